//! Full HTML documents

use crate::helpers::Html;

/// A rendered page: head tags plus body content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub head: Html,
    pub body: Html,
}

impl Document {
    pub fn new(head: Html, body: Html) -> Self {
        Self { head, body }
    }

    /// Serialize as a complete HTML5 page
    pub fn to_page(&self, lang: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             {}\n</head>\n<body>\n{}\n</body>\n</html>\n",
            lang, self.head, self.body
        )
    }
}
