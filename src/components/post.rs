//! Single post page

use super::{bio, layout, Document, RenderContext, SeoMeta};
use crate::content::{NavigationContext, Post};
use crate::helpers::{element, html_escape, link_to, Html};

/// Render a post inside the page shell
///
/// The bio appears above the article and again in its footer. The body
/// markup is inserted verbatim.
pub fn render(
    post: &Post,
    site_title: &str,
    nav: &NavigationContext,
    ctx: &RenderContext<'_>,
) -> Document {
    let style = &ctx.style;
    let nav = nav.with_site_title(site_title);

    let mut header = element("h1", &style.title, Html::text(&post.title));
    header.push(element("p", &style.date, Html::text(&post.published_date)));

    let mut article = element("header", "", header);
    article.push(element(
        "section",
        &style.body,
        Html::from_trusted(post.body_markup.as_str()),
    ));
    article.push(Html::from_trusted(format!(
        r#"<hr class="{}">"#,
        html_escape(&style.divider)
    )));
    article.push(element("footer", "", bio::render(&ctx.identity, &ctx.providers)));

    let mut content = bio::render(&ctx.identity, &ctx.providers);
    content.push(element("article", &style.article, article));
    content.push(element(
        "nav",
        &style.nav,
        link_to(
            &nav.path_prefix,
            "/",
            &style.back_link,
            Some("back"),
            Html::text(&style.back_text),
        ),
    ));

    let body = layout::render(&nav, content, &ctx.footer_name, ctx.clock);
    let head = SeoMeta::for_post(post).render(site_title);

    Document::new(head, body)
}
