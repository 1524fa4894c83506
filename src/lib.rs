//! glenbray-blog: page renderers for the glenbray.com blog
//!
//! Post records arrive fully resolved (title, formatted date, rendered
//! body). This crate wraps them in the site chrome: page shell, author bio
//! and post template.

pub mod commands;
pub mod components;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

use components::{Document, RenderContext};
use content::{NavigationContext, Post};
use helpers::{url_for, Clock};

/// The blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Post record directory
    pub source_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Blog {
    /// Create a new Blog from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {:?}, using default configuration", config_path);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Blog with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let source_dir = base_dir.join(&config.source_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            source_dir,
            public_dir,
        }
    }

    /// URL path a post is published under
    pub fn post_path(&self, post: &Post) -> Option<String> {
        post.output_slug()
            .map(|slug| url_for(self.config.path_prefix(), &format!("{}/", slug)))
    }

    /// Navigation context for a page at `current_path`
    pub fn navigation(&self, current_path: &str) -> NavigationContext {
        NavigationContext::new(
            current_path,
            &self.config.title,
            self.config.path_prefix(),
        )
    }

    /// Render a post page
    pub fn render_post(&self, post: &Post, current_path: &str, clock: &dyn Clock) -> Document {
        let ctx = RenderContext::from_config(&self.config, clock);
        self.render_post_with(post, current_path, &ctx)
    }

    /// Render a post page with a prepared context
    pub fn render_post_with(
        &self,
        post: &Post,
        current_path: &str,
        ctx: &RenderContext<'_>,
    ) -> Document {
        let nav = self.navigation(current_path);
        components::post::render(post, &self.config.title, &nav, ctx)
    }

    /// Render every post record into the public directory
    pub fn build(&self) -> Result<usize> {
        commands::build::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
