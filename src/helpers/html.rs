//! HTML helper functions

use std::fmt;

use super::url::url_for;

/// A rendered HTML fragment
///
/// Text only gets in through [`Html::text`] (escaped) or
/// [`Html::from_trusted`] (verbatim), so every call site that skips
/// escaping is visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    /// An empty fragment
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Escaped text
    pub fn text(s: &str) -> Self {
        Self(html_escape(s))
    }

    /// Insert pre-sanitized markup verbatim
    ///
    /// The caller vouches for `markup`; nothing is escaped.
    pub fn from_trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Append another fragment
    pub fn push(&mut self, other: Html) {
        self.0.push_str(&other.0);
    }

    /// Append literal markup produced by this crate
    pub(crate) fn push_raw(&mut self, raw: &str) {
        self.0.push_str(raw);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Html> for Html {
    fn from_iter<I: IntoIterator<Item = Html>>(iter: I) -> Self {
        let mut out = Html::new();
        for fragment in iter {
            out.push(fragment);
        }
        out
    }
}

/// Wrap `inner` in an element, with an optional class attribute
///
/// # Examples
/// ```ignore
/// element("h1", "title", Html::text("Hi")) // -> <h1 class="title">Hi</h1>
/// ```
pub fn element(tag: &str, class: &str, inner: Html) -> Html {
    let mut out = Html::new();
    out.push_raw(&format!("<{}{}>", tag, class_attr(class)));
    out.push(inner);
    out.push_raw(&format!("</{}>", tag));
    out
}

/// Generate an anchor tag pointing inside the site
///
/// # Examples
/// ```ignore
/// link_to("/", "/", "shadow-none", None, Html::text("Home")) // -> <a class="shadow-none" href="/">Home</a>
/// ```
pub fn link_to(prefix: &str, path: &str, class: &str, rel: Option<&str>, inner: Html) -> Html {
    let href = url_for(prefix, path);
    anchor(&href, class, rel, inner)
}

/// Generate an anchor tag for an already resolved href
pub fn anchor(href: &str, class: &str, rel: Option<&str>, inner: Html) -> Html {
    let rel_attr = rel
        .map(|r| format!(r#" rel="{}""#, html_escape(r)))
        .unwrap_or_default();

    let mut out = Html::new();
    out.push_raw(&format!(
        r#"<a{} href="{}"{}>"#,
        class_attr(class),
        html_escape(href),
        rel_attr
    ));
    out.push(inner);
    out.push_raw("</a>");
    out
}

/// Generate an image tag with fixed dimensions
pub fn image_tag(
    src: &str,
    src_set: Option<&str>,
    alt: &str,
    width: u32,
    height: u32,
    class: &str,
) -> Html {
    let src_set_attr = src_set
        .map(|s| format!(r#" srcset="{}""#, html_escape(s)))
        .unwrap_or_default();

    Html::from_trusted(format!(
        r#"<img{} src="{}"{} alt="{}" width="{}" height="{}" style="min-width:{}px">"#,
        class_attr(class),
        html_escape(src),
        src_set_attr,
        html_escape(alt),
        width,
        height,
        width
    ))
}

/// Generate a meta tag
pub fn meta_tag(key_attr: &str, key: &str, content: &str) -> Html {
    Html::from_trusted(format!(
        r#"<meta {}="{}" content="{}">"#,
        key_attr,
        html_escape(key),
        html_escape(content)
    ))
}

fn class_attr(class: &str) -> String {
    if class.is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, html_escape(class))
    }
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(
            Html::text("<b>\"Tom\" & 'Jerry'</b>").as_str(),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_trusted_is_verbatim() {
        assert_eq!(Html::from_trusted("<p>Hi</p>").as_str(), "<p>Hi</p>");
    }

    #[test]
    fn test_element() {
        assert_eq!(
            element("h1", "big", Html::text("Hi")).as_str(),
            r#"<h1 class="big">Hi</h1>"#
        );
        assert_eq!(element("main", "", Html::new()).as_str(), "<main></main>");
    }

    #[test]
    fn test_link_to() {
        let link = link_to("/blog", "/", "", Some("back"), Html::text("Home"));
        assert_eq!(link.as_str(), r#"<a href="/blog/" rel="back">Home</a>"#);
    }

    #[test]
    fn test_image_tag() {
        let img = image_tag("/a.jpg", None, "Glen", 100, 100, "");
        assert!(img.as_str().contains(r#"alt="Glen""#));
        assert!(img.as_str().contains(r#"width="100""#));
        assert!(img.as_str().contains(r#"height="100""#));
        assert!(!img.as_str().contains("srcset"));
    }

    #[test]
    fn test_collect_fragments() {
        let html: Html = vec![Html::text("a"), Html::text("<b>")].into_iter().collect();
        assert_eq!(html.as_str(), "a&lt;b&gt;");
    }
}
