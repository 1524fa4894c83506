//! List post records

use anyhow::Result;

use crate::content::RecordLoader;
use crate::Blog;

/// Print every post record found under the source directory
pub fn run(blog: &Blog) -> Result<()> {
    let posts = RecordLoader::new(blog).load_posts();

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!(
            "  {} - {} [{}]",
            post.published_date,
            post.title,
            post.output_slug().unwrap_or_else(|| "-".to_string())
        );
    }

    Ok(())
}
