//! CLI entry point for glenbray-blog

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "glenbray-blog")]
#[command(version)]
#[command(about = "Render glenbray.com post records into HTML pages", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single post record
    #[command(alias = "r")]
    Render {
        /// JSON record holding one post
        record: PathBuf,

        /// Write the page here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Path the page is served at (defaults to the post's own path)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Render every post record into the public folder
    #[command(alias = "b")]
    Build {
        /// Record directory (defaults to the configured source_dir)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory (defaults to the configured public_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List post records
    List,

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "glenbray_blog=debug,info"
    } else {
        "glenbray_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    match cli.command {
        Commands::Render { record, out, path } => {
            let blog = glenbray_blog::Blog::new(&base_dir)?;
            tracing::debug!("Rendering {:?}", record);
            if let Some(page) = glenbray_blog::commands::render::run(
                &blog,
                &record,
                path.as_deref(),
                out.as_deref(),
            )? {
                print!("{}", page);
            }
        }

        Commands::Build { input, output } => {
            let blog = glenbray_blog::Blog::new(&base_dir)?;
            let input = input.unwrap_or_else(|| blog.source_dir.clone());
            let output = output.unwrap_or_else(|| blog.public_dir.clone());
            tracing::info!("Rendering post records...");

            let count = glenbray_blog::commands::build::run_with_dirs(&blog, &input, &output)?;
            println!("Generated {} pages in {:?}", count, output);
        }

        Commands::List => {
            let blog = glenbray_blog::Blog::new(&base_dir)?;
            glenbray_blog::commands::list::run(&blog)?;
        }

        Commands::Clean => {
            let blog = glenbray_blog::Blog::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("glenbray-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
