//! URL helper functions

/// Generate a URL under the site's path prefix
///
/// # Examples
/// ```ignore
/// url_for("/blog", "/css/style.css") // -> "/blog/css/style.css"
/// url_for("", "/") // -> "/"
/// ```
pub fn url_for(prefix: &str, path: &str) -> String {
    let root = prefix.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// The site root for a path prefix (`"{prefix}/"`)
pub fn root_path(prefix: &str) -> String {
    url_for(prefix, "/")
}

/// Substitute a handle into a provider URL template
///
/// The handle goes in exactly as stored; attribute escaping happens when
/// the anchor is built.
///
/// # Examples
/// ```ignore
/// profile_url("https://github.com/{handle}", "glenbray") // -> "https://github.com/glenbray"
/// ```
pub fn profile_url(template: &str, handle: &str) -> String {
    template.replace("{handle}", handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        assert_eq!(url_for("", "/"), "/");
        assert_eq!(url_for("/", "/"), "/");
        assert_eq!(url_for("/blog", "/css/style.css"), "/blog/css/style.css");
        assert_eq!(url_for("/blog/", "about/"), "/blog/about/");
    }

    #[test]
    fn test_root_path() {
        assert_eq!(root_path(""), "/");
        assert_eq!(root_path("/blog"), "/blog/");
    }

    #[test]
    fn test_profile_url() {
        assert_eq!(
            profile_url("https://github.com/{handle}", "glenbray"),
            "https://github.com/glenbray"
        );
        assert_eq!(
            profile_url("https://dev.to/{handle}", "glen.bray_1"),
            "https://dev.to/glen.bray_1"
        );
        assert_eq!(
            profile_url("https://github.com/{handle}", "glen bray"),
            "https://github.com/glen bray"
        );
    }

    #[test]
    fn test_profile_url_keeps_at_sign() {
        assert_eq!(
            profile_url("https://fosstodon.org/@{handle}", "glen@hachyderm.io"),
            "https://fosstodon.org/@glen@hachyderm.io"
        );
    }
}
