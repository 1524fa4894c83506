//! Page shell: header, main region and footer

use crate::content::NavigationContext;
use crate::helpers::{element, link_to, Clock, Html};

const CONTAINER_CLASS: &str = "max-w-3xl mx-auto px-2 py-10";
const HOME_HEADING_CLASS: &str = "text-4xl font-black font-sans mb-10 mt-0";
const BACK_HEADING_CLASS: &str = "text-2xl font-sans font-black mt-0";
const HEADER_LINK_CLASS: &str = "shadow-none";

/// Site logo shown in front of the title on the home page
pub const LOGO: &str = r#"<svg class="logo inline-block mr-2" width="32" height="32" viewBox="0 0 32 32" aria-hidden="true"><rect x="4" y="4" width="24" height="24" rx="6" fill="currentColor"/></svg>"#;

/// Wrap `children` in the site chrome
///
/// The root page gets a large heading with the logo, every other page a
/// smaller "← title" heading that links home.
pub fn render(
    nav: &NavigationContext,
    children: Html,
    footer_name: &str,
    clock: &dyn Clock,
) -> Html {
    let mut page = Html::new();
    page.push(element("header", "", header(nav)));
    page.push(element("main", "", children));
    page.push(element("footer", "", footer(footer_name, clock)));

    element("div", CONTAINER_CLASS, page)
}

fn header(nav: &NavigationContext) -> Html {
    if nav.is_root() {
        let mut title = Html::from_trusted(LOGO);
        title.push(Html::text(&nav.site_title));
        element(
            "h1",
            HOME_HEADING_CLASS,
            link_to(&nav.path_prefix, "/", HEADER_LINK_CLASS, None, title),
        )
    } else {
        let title = Html::text(&format!("← {}", nav.site_title));
        element(
            "h3",
            BACK_HEADING_CLASS,
            link_to(&nav.path_prefix, "/", HEADER_LINK_CLASS, None, title),
        )
    }
}

fn footer(footer_name: &str, clock: &dyn Clock) -> Html {
    Html::text(&format!("© {} {}", clock.year(), footer_name))
}
