//! Render a single post record

use anyhow::{anyhow, bail, Result};
use std::fs;
use std::path::Path;

use crate::content::load_record;
use crate::helpers::SystemClock;
use crate::Blog;

/// Render the post in `record` as a full page
///
/// Writes to `out` when given, otherwise returns the page for printing.
pub fn run(
    blog: &Blog,
    record: &Path,
    current_path: Option<&str>,
    out: Option<&Path>,
) -> Result<Option<String>> {
    let posts = load_record(record)?;
    let post = match posts.as_slice() {
        [post] => post,
        [] => bail!("{:?} holds no post records", record),
        _ => bail!(
            "{:?} holds {} post records; use `build` to render them all",
            record,
            posts.len()
        ),
    };

    let path = match current_path {
        Some(path) => path.to_string(),
        None => blog.post_path(post).ok_or_else(|| {
            anyhow!(
                "Post '{}' has no usable slug, title or id; pass --path",
                post.id
            )
        })?,
    };
    let page = blog
        .render_post(post, &path, &SystemClock)
        .to_page(&blog.config.language);

    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(out, &page)?;
            tracing::info!("Rendered '{}' to {:?}", post.title, out);
            Ok(None)
        }
        None => Ok(Some(page)),
    }
}
