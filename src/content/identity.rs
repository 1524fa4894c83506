//! Site identity: who writes the blog

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An image pre-resized to constant pixel dimensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedImage {
    pub src: String,
    pub src_set: Option<String>,
    pub width: u32,
    pub height: u32,
}

impl Default for FixedImage {
    fn default() -> Self {
        Self {
            src: "/images/profile-pic.jpg".to_string(),
            src_set: None,
            width: 100,
            height: 100,
        }
    }
}

/// Author identity, resolved once per build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteIdentity {
    pub display_name: String,
    /// Provider name to handle, in display order
    pub profile_links: IndexMap<String, String>,
    pub avatar: FixedImage,
}
