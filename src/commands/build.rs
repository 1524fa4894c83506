//! Render every post record into the public directory

use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path};

use crate::components::RenderContext;
use crate::content::RecordLoader;
use crate::helpers::SystemClock;
use crate::Blog;

/// Build with the configured directories
pub fn run(blog: &Blog) -> Result<usize> {
    run_with_dirs(blog, &blog.source_dir, &blog.public_dir)
}

/// Build from `input` into `output`, returning the number of pages written
pub fn run_with_dirs(blog: &Blog, input: &Path, output: &Path) -> Result<usize> {
    let start = std::time::Instant::now();

    let posts = RecordLoader::new(blog).load_posts_from(input);
    tracing::info!("Loaded {} post records from {:?}", posts.len(), input);

    let clock = SystemClock;
    let ctx = RenderContext::from_config(&blog.config, &clock);

    fs::create_dir_all(output)?;

    let mut seen = HashSet::new();
    let mut written = 0;
    for post in &posts {
        let (slug, path) = match (post.output_slug(), blog.post_path(post)) {
            (Some(slug), Some(path)) if stays_inside(&slug) => (slug, path),
            _ => {
                tracing::warn!(
                    "Skipping '{}' ({}): no slug that stays inside {:?}",
                    post.title,
                    post.id,
                    output
                );
                continue;
            }
        };

        if !seen.insert(slug.clone()) {
            tracing::warn!(
                "Skipping '{}' ({}): slug '{}' already used",
                post.title,
                post.id,
                slug
            );
            continue;
        }

        let page = blog
            .render_post_with(post, &path, &ctx)
            .to_page(&blog.config.language);

        let dir = output.join(&slug);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("index.html"), page)?;
        tracing::debug!("Generated: {}", path);
        written += 1;
    }

    let duration = start.elapsed();
    tracing::info!("Generated {} pages in {:.2}s", written, duration.as_secs_f64());

    Ok(written)
}

/// Whether `slug` names a directory strictly below the output root
fn stays_inside(slug: &str) -> bool {
    let mut components = Path::new(slug).components().peekable();
    components.peek().is_some() && components.all(|c| matches!(c, Component::Normal(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    fn record(id: &str, title: &str, slug: Option<&str>) -> String {
        serde_json::json!({
            "id": id,
            "title": title,
            "publishedDate": "01 January, 2020",
            "excerpt": "Hi there",
            "bodyMarkup": "<p>Hi</p>",
            "slug": slug,
        })
        .to_string()
    }

    #[test]
    fn test_build_writes_one_page_per_post() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        fs::create_dir_all(&blog.source_dir).unwrap();
        fs::write(blog.source_dir.join("a.json"), record("1", "Hello World", None)).unwrap();
        fs::write(
            blog.source_dir.join("b.json"),
            record("2", "Second", Some("/second-post/")),
        )
        .unwrap();

        assert_eq!(run(&blog).unwrap(), 2);

        let hello = fs::read_to_string(blog.public_dir.join("hello-world/index.html")).unwrap();
        assert!(hello.contains("<h1 class=\"text-4xl font-black mt-8 mb-0\">Hello World</h1>"));
        assert!(blog.public_dir.join("second-post/index.html").exists());
    }

    #[test]
    fn test_build_keeps_parent_slug_inside_output() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        let input = dir.path().join("records");
        let output = dir.path().join("site");
        fs::create_dir_all(&input).unwrap();
        fs::write(
            input.join("a.json"),
            record("1", "Escape", Some("../escaped")),
        )
        .unwrap();

        assert_eq!(run_with_dirs(&blog, &input, &output).unwrap(), 1);
        assert!(output.join("escaped/index.html").exists());
        assert!(!dir.path().join("escaped").exists());
    }

    #[test]
    fn test_build_untitled_post_is_not_site_root() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        let input = dir.path().join("records");
        let output = dir.path().join("site");
        fs::create_dir_all(&input).unwrap();
        fs::write(input.join("a.json"), record("intro", "!!!", None)).unwrap();
        fs::write(input.join("b.json"), record("???", "!!!", Some("/./"))).unwrap();

        assert_eq!(run_with_dirs(&blog, &input, &output).unwrap(), 1);
        assert!(!output.join("index.html").exists());

        let page = fs::read_to_string(output.join("intro/index.html")).unwrap();
        assert!(page.contains("<h3 "));
        assert!(!page.contains("font-sans mb-10"));
    }

    #[test]
    fn test_stays_inside() {
        assert!(stays_inside("hello"));
        assert!(stays_inside("2020/hello"));
        assert!(!stays_inside(""));
        assert!(!stays_inside("../x"));
        assert!(!stays_inside("/abs"));
        assert!(!stays_inside("."));
    }

    #[test]
    fn test_build_skips_duplicate_slugs() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        let input = dir.path().join("records");
        let output = dir.path().join("site");
        fs::create_dir_all(&input).unwrap();
        fs::write(
            input.join("all.json"),
            format!("[{}, {}]", record("1", "Same", None), record("2", "Same", None)),
        )
        .unwrap();

        assert_eq!(run_with_dirs(&blog, &input, &output).unwrap(), 1);
        assert!(output.join("same/index.html").exists());
    }
}
