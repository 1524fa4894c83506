//! Page components
//!
//! Each component is a pure function from resolved records to HTML.

pub mod bio;
pub mod layout;
mod page;
pub mod post;
mod seo;
mod style;

use indexmap::IndexMap;

pub use bio::BIO_CLASS;
pub use page::Document;
pub use seo::SeoMeta;
pub use style::{PostStyle, StyleVariant};

use crate::config::{Provider, SiteConfig};
use crate::content::SiteIdentity;
use crate::helpers::Clock;

/// Everything a render needs besides the page's own records
pub struct RenderContext<'a> {
    pub identity: SiteIdentity,
    pub providers: IndexMap<String, Provider>,
    pub footer_name: String,
    pub style: PostStyle,
    pub clock: &'a dyn Clock,
}

impl<'a> RenderContext<'a> {
    pub fn from_config(config: &SiteConfig, clock: &'a dyn Clock) -> Self {
        Self {
            identity: config.identity(),
            providers: config.provider_table(),
            footer_name: config.footer_name.clone(),
            style: PostStyle::from(config.post_style),
            clock,
        }
    }
}
