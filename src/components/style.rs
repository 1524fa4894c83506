//! Class names and link text for the post template

use serde::{Deserialize, Serialize};

/// Which post template preset to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleVariant {
    #[default]
    Standard,
    Compact,
}

/// Presentation options for a post page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostStyle {
    pub article: String,
    pub title: String,
    pub date: String,
    pub body: String,
    pub divider: String,
    pub nav: String,
    pub back_link: String,
    pub back_text: String,
}

impl PostStyle {
    /// Roomy layout with a "← Back" link
    pub fn standard() -> Self {
        Self {
            article: "bg-white px-6 py-4 rounded shadow mb-8".to_string(),
            title: "text-4xl font-black mt-8 mb-0".to_string(),
            date: "text-lg leading-loose mb-8 text-gray-600".to_string(),
            body: "markdown".to_string(),
            divider: "h-px mb-8".to_string(),
            nav: "mb-8".to_string(),
            back_link: "text-2xl text-blue-600".to_string(),
            back_text: "← Back".to_string(),
        }
    }

    /// Tighter spacing and a bare arrow for the back link
    pub fn compact() -> Self {
        Self {
            article: "bg-white px-4 py-3 rounded shadow mb-6".to_string(),
            title: "text-3xl font-black mt-6 mb-0".to_string(),
            date: "text-base leading-normal mb-6 text-gray-600".to_string(),
            divider: "h-px mb-6".to_string(),
            nav: "mb-6".to_string(),
            back_link: "text-xl text-blue-600".to_string(),
            back_text: "←".to_string(),
            ..Self::standard()
        }
    }
}

impl From<StyleVariant> for PostStyle {
    fn from(variant: StyleVariant) -> Self {
        match variant {
            StyleVariant::Standard => PostStyle::standard(),
            StyleVariant::Compact => PostStyle::compact(),
        }
    }
}

impl Default for PostStyle {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_differ_only_in_presentation() {
        let standard = PostStyle::from(StyleVariant::Standard);
        let compact = PostStyle::from(StyleVariant::Compact);
        assert_eq!(standard.back_text, "← Back");
        assert_eq!(compact.back_text, "←");
        assert_eq!(standard.body, compact.body);
    }
}
