//! Post and navigation models

use serde::{Deserialize, Serialize};

use crate::helpers::root_path;

/// A blog post, already resolved by the content pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Stable record id
    pub id: String,

    /// Post title
    pub title: String,

    /// Publication date, already formatted for display
    #[serde(alias = "date")]
    pub published_date: String,

    /// Front-matter description
    #[serde(default)]
    pub description: Option<String>,

    /// Pre-truncated preview of the body
    #[serde(default)]
    pub excerpt: String,

    /// Rendered body, trusted HTML
    #[serde(alias = "html")]
    pub body_markup: String,

    /// URL-friendly name, used for the output path
    #[serde(default)]
    pub slug: Option<String>,
}

impl Post {
    /// Create a post with the required fields
    pub fn new(id: &str, title: &str, published_date: &str, body_markup: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            published_date: published_date.to_string(),
            description: None,
            excerpt: String::new(),
            body_markup: body_markup.to_string(),
            slug: None,
        }
    }

    /// Description for metadata, falling back to the excerpt
    ///
    /// An empty description counts as absent.
    pub fn summary(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => &self.excerpt,
        }
    }

    /// Relative path this post is written under
    ///
    /// Empty, `.` and `..` segments of the record's slug are dropped. Without
    /// a usable slug the title is slugified, then the id. `None` when all
    /// three come out empty.
    pub fn output_slug(&self) -> Option<String> {
        if let Some(slug) = self.slug.as_deref() {
            let segments: Vec<&str> = slug
                .split(|c: char| c == '/' || c == '\\')
                .filter(|seg| !matches!(*seg, "" | "." | ".."))
                .collect();
            if !segments.is_empty() {
                return Some(segments.join("/"));
            }
        }

        [&self.title, &self.id]
            .into_iter()
            .map(slug::slugify)
            .find(|s| !s.is_empty())
    }
}

/// Per-render navigation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationContext {
    /// Path of the page being rendered
    pub current_path: String,

    /// Site title shown in the header
    pub site_title: String,

    /// Prefix the site is mounted under ("" for the domain root)
    #[serde(default)]
    pub path_prefix: String,
}

impl NavigationContext {
    pub fn new(current_path: &str, site_title: &str, path_prefix: &str) -> Self {
        Self {
            current_path: current_path.to_string(),
            site_title: site_title.to_string(),
            path_prefix: path_prefix.to_string(),
        }
    }

    /// The site root under this context's prefix
    pub fn root_path(&self) -> String {
        root_path(&self.path_prefix)
    }

    /// Whether the page being rendered is the site root
    pub fn is_root(&self) -> bool {
        self.current_path == self.root_path()
    }

    /// Same context with a different site title
    pub fn with_site_title(&self, site_title: &str) -> Self {
        Self {
            site_title: site_title.to_string(),
            ..self.clone()
        }
    }
}
