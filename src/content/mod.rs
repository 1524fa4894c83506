//! Content module - the records the renderers consume

mod identity;
pub mod loader;
mod post;

pub use identity::{FixedImage, SiteIdentity};
pub use loader::{load_record, LoadError, RecordLoader};
pub use post::{NavigationContext, Post};
