//! Record loader - reads pre-resolved post records from the data directory

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::Post;
use crate::Blog;

/// Errors raised while reading post records
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid post record in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Post record in {path:?} has an empty id")]
    MissingId { path: PathBuf },
}

/// Load every post held by a single JSON record file
pub fn load_record(path: &Path) -> Result<Vec<Post>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // A record file holds either one post object or a list of them
    let parsed = if content.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<Post>>(&content)
    } else {
        serde_json::from_str::<Post>(&content).map(|post| vec![post])
    };
    let posts = parsed.map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if posts.iter().any(|p| p.id.trim().is_empty()) {
        return Err(LoadError::MissingId {
            path: path.to_path_buf(),
        });
    }

    Ok(posts)
}

/// Loads post records from the source directory
pub struct RecordLoader<'a> {
    blog: &'a Blog,
}

impl<'a> RecordLoader<'a> {
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Load all posts found under the source directory
    ///
    /// Files that fail to load are logged and skipped.
    pub fn load_posts(&self) -> Vec<Post> {
        self.load_posts_from(&self.blog.source_dir)
    }

    /// Load all posts found under `dir`
    pub fn load_posts_from(&self, dir: &Path) -> Vec<Post> {
        if !dir.exists() {
            tracing::warn!("Record directory {:?} does not exist", dir);
            return Vec::new();
        }

        let mut paths: Vec<PathBuf> = WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|e| e.into_path())
            .filter(|p| p.is_file() && is_record_file(p))
            .collect();
        paths.sort();

        let mut posts = Vec::new();
        for path in paths {
            match load_record(&path) {
                Ok(loaded) => {
                    tracing::debug!("Loaded {} record(s) from {:?}", loaded.len(), path);
                    posts.extend(loaded);
                }
                Err(e) => {
                    tracing::warn!("Skipping {:?}: {}", path, e);
                }
            }
        }

        posts
    }
}

fn is_record_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    const HELLO: &str = r#"{"id": "1", "title": "Hello", "publishedDate": "01 January, 2020",
        "excerpt": "Hi there", "bodyMarkup": "<p>Hi</p>"}"#;

    #[test]
    fn test_load_single_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hello.json");
        fs::write(&path, HELLO).unwrap();

        let posts = load_record(&path).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello");
    }

    #[test]
    fn test_load_record_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("all.json");
        fs::write(&path, format!("[{}, {}]", HELLO, HELLO.replace("\"1\"", "\"2\""))).unwrap();

        let posts = load_record(&path).unwrap();
        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, HELLO.replace("\"1\"", "\"\"")).unwrap();

        assert!(matches!(
            load_record(&path),
            Err(LoadError::MissingId { .. })
        ));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_record(&path), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_parse_error_names_the_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"id": "1", "title": "Hello", "publishedDate": "x"}"#).unwrap();

        match load_record(&path) {
            Err(LoadError::Parse { source, .. }) => {
                assert!(source.to_string().contains("bodyMarkup"), "{}", source);
                assert_eq!(source.line(), 1);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_in_list_keeps_position() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, format!("[\n{},\n{{\"id\": 7}}\n]", HELLO)).unwrap();

        match load_record(&path) {
            Err(LoadError::Parse { source, .. }) => assert!(source.line() > 1),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_loader_skips_bad_files() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("data");
        fs::create_dir_all(data.join("2020")).unwrap();
        fs::write(data.join("2020").join("hello.json"), HELLO).unwrap();
        fs::write(data.join("broken.json"), "nope").unwrap();
        fs::write(data.join("notes.txt"), "ignored").unwrap();

        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        let posts = RecordLoader::new(&blog).load_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "1");
    }
}
