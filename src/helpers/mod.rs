//! Helper functions for the renderers
//!
//! HTML building blocks, URL generation under the site prefix and the
//! clock used by the page footer.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
