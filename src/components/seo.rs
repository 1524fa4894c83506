//! Page metadata (title, description, Open Graph tags)

use crate::content::Post;
use crate::helpers::{element, meta_tag, Html};

/// Metadata for a page's `<head>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
}

impl SeoMeta {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// Metadata for a post; the description falls back to the excerpt
    pub fn for_post(post: &Post) -> Self {
        Self::new(&post.title, post.summary())
    }

    /// Render the head tags
    pub fn render(&self, site_title: &str) -> Html {
        let full_title = if site_title.is_empty() {
            self.title.clone()
        } else {
            format!("{} | {}", self.title, site_title)
        };

        let mut head = element("title", "", Html::text(&full_title));
        head.push(meta_tag("name", "description", &self.description));
        head.push(meta_tag("property", "og:title", &self.title));
        head.push(meta_tag("property", "og:description", &self.description));
        head.push(meta_tag("property", "og:type", "website"));
        head
    }
}
