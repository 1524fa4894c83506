//! Author bio: avatar, name and profile links

use indexmap::IndexMap;

use crate::config::Provider;
use crate::content::SiteIdentity;
use crate::helpers::{anchor, element, image_tag, profile_url, Html};

/// Marker class on the bio's outer element
pub const BIO_CLASS: &str = "bio flex my-10";
const AVATAR_CLASS: &str = "mr-4 mb-0 rounded-full";
const LINKS_CLASS: &str = "flex";
const LINK_CLASS: &str = "text-blue-600 mr-1";

/// Render the author summary
///
/// One link per profile entry, in the identity's order. Entries whose
/// provider has no template are skipped.
pub fn render(identity: &SiteIdentity, providers: &IndexMap<String, Provider>) -> Html {
    let avatar = &identity.avatar;
    let image = image_tag(
        &avatar.src,
        avatar.src_set.as_deref(),
        &identity.display_name,
        avatar.width,
        avatar.height,
        AVATAR_CLASS,
    );

    let links: Html = identity
        .profile_links
        .iter()
        .filter_map(|(name, handle)| match providers.get(name) {
            Some(provider) => Some(anchor(
                &profile_url(&provider.url, handle),
                LINK_CLASS,
                None,
                Html::text(&provider.label),
            )),
            None => {
                tracing::warn!("No URL template for social provider '{}'", name);
                None
            }
        })
        .collect();

    let mut details = element(
        "p",
        "",
        element("strong", "", Html::text(&identity.display_name)),
    );
    details.push(element("div", LINKS_CLASS, links));

    let mut bio = image;
    bio.push(element("div", "", details));
    element("div", BIO_CLASS, bio)
}
