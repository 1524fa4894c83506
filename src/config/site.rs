//! Site configuration (_config.yml)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::components::StyleVariant;
use crate::content::{FixedImage, SiteIdentity};

/// Errors raised while loading the site configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("No URL template for social provider '{0}'")]
    UnknownProvider(String),
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    /// Name printed after the year in the footer
    pub footer_name: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Identity
    pub avatar: FixedImage,
    pub social: IndexMap<String, String>,
    /// Extra or overriding provider templates
    pub providers: IndexMap<String, Provider>,

    // Post template
    pub post_style: StyleVariant,

    // Directory
    pub source_dir: String,
    pub public_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let mut social = IndexMap::new();
        social.insert("github".to_string(), "glenbray".to_string());
        social.insert("dev".to_string(), "glenbray".to_string());

        Self {
            title: "glenbray.com".to_string(),
            author: "Glen Bray".to_string(),
            footer_name: "glenbray.com".to_string(),
            language: "en".to_string(),

            url: "https://glenbray.com".to_string(),
            root: "/".to_string(),

            avatar: FixedImage::default(),
            social,
            providers: IndexMap::new(),

            post_style: StyleVariant::Standard,

            source_dir: "data".to_string(),
            public_dir: "public".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SiteConfig =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        tracing::debug!("Loaded site configuration from {:?}", path);
        Ok(config)
    }

    /// Check that every social entry has a provider template
    pub fn validate(&self) -> Result<(), ConfigError> {
        let providers = self.provider_table();
        match self.social.keys().find(|name| !providers.contains_key(*name)) {
            Some(name) => Err(ConfigError::UnknownProvider(name.clone())),
            None => Ok(()),
        }
    }

    /// Path prefix the site is mounted under, without the trailing slash
    pub fn path_prefix(&self) -> &str {
        self.root.trim_end_matches('/')
    }

    /// Built-in providers with the configured ones merged over them
    pub fn provider_table(&self) -> IndexMap<String, Provider> {
        let mut table = default_providers();
        for (name, provider) in &self.providers {
            table.insert(name.clone(), provider.clone());
        }
        table
    }

    /// The author identity shown by the bio
    pub fn identity(&self) -> SiteIdentity {
        SiteIdentity {
            display_name: self.author.clone(),
            profile_links: self.social.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// How to link to a profile on an external provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// URL template; `{handle}` is replaced by the stored handle
    pub url: String,
    /// Link text
    pub label: String,
}

impl Provider {
    pub fn new(url: &str, label: &str) -> Self {
        Self {
            url: url.to_string(),
            label: label.to_string(),
        }
    }
}

/// Providers known without any configuration
pub fn default_providers() -> IndexMap<String, Provider> {
    let mut providers = IndexMap::new();
    providers.insert(
        "github".to_string(),
        Provider::new("https://github.com/{handle}", "github"),
    );
    providers.insert(
        "dev".to_string(),
        Provider::new("https://dev.to/{handle}", "dev.to"),
    );
    providers
}
