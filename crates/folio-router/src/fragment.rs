//! Location fragment handling
//!
//! The fragment (everything after `#`) is the only routing key. Router
//! links follow the `#/` convention; other `#id` hrefs are same-page
//! scroll anchors and are never treated as routes.

/// Key the empty fragment resolves to
pub const ROOT_KEY: &str = "/";

/// Href prefix marking a router link
pub const LINK_PREFIX: &str = "#/";

/// Turn a raw location hash into a route key.
///
/// Strips one leading `#`; an empty remainder maps to `root_key`.
///
/// ```
/// use folio_router::fragment::route_key;
///
/// assert_eq!(route_key("#/about", "/"), "/about");
/// assert_eq!(route_key("", "/"), "/");
/// assert_eq!(route_key("#", "/"), "/");
/// ```
pub fn route_key<'a>(hash: &'a str, root_key: &'a str) -> &'a str {
    let key = hash.strip_prefix('#').unwrap_or(hash);
    if key.is_empty() {
        root_key
    } else {
        key
    }
}

/// Whether an href follows the router link convention
pub fn is_router_link(href: &str, prefix: &str) -> bool {
    href.starts_with(prefix)
}

/// Route key an anchor href points to (href minus the leading `#`)
pub fn link_target(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

/// Build the href for a route key
pub fn href_for(key: &str) -> String {
    format!("#{}", key)
}

/// Element id targeted by a same-page anchor.
///
/// Returns `None` for router links, bare `#`, and hrefs that are not
/// fragments at all.
pub fn in_page_target<'a>(href: &'a str, prefix: &str) -> Option<&'a str> {
    if is_router_link(href, prefix) {
        return None;
    }
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
