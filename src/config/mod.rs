//! Configuration module

mod site;

pub use site::{default_providers, ConfigError, Provider, SiteConfig};
