//! Router configuration

use crate::fragment::{LINK_PREFIX, ROOT_KEY};

/// Router configuration
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Id of the element whose content is replaced on navigation
    pub mount_id: String,
    /// Selector for navigation anchors considered by the indicator update
    pub nav_selector: String,
    /// Href prefix of router links; other anchors are never touched
    pub link_prefix: String,
    /// Key the empty fragment resolves to
    pub root_key: String,
    /// Attribute marking the current navigation link
    pub current_attribute: String,
    /// Value written to `current_attribute`
    pub current_value: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            mount_id: "app".to_string(),
            nav_selector: "nav a".to_string(),
            link_prefix: LINK_PREFIX.to_string(),
            root_key: ROOT_KEY.to_string(),
            current_attribute: "aria-current".to_string(),
            current_value: "page".to_string(),
        }
    }
}

impl RouterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount_id(mut self, id: impl Into<String>) -> Self {
        self.mount_id = id.into();
        self
    }

    pub fn nav_selector(mut self, selector: impl Into<String>) -> Self {
        self.nav_selector = selector.into();
        self
    }

    pub fn link_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.link_prefix = prefix.into();
        self
    }

    pub fn root_key(mut self, key: impl Into<String>) -> Self {
        self.root_key = key.into();
        self
    }

    /// Attribute and value used for the "current" marker
    pub fn current_marker(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.current_attribute = attribute.into();
        self.current_value = value.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RouterConfig::default();
        assert_eq!(config.mount_id, "app");
        assert_eq!(config.nav_selector, "nav a");
        assert_eq!(config.link_prefix, "#/");
        assert_eq!(config.root_key, "/");
        assert_eq!(config.current_attribute, "aria-current");
        assert_eq!(config.current_value, "page");
    }

    #[test]
    fn test_builder() {
        let config = RouterConfig::new()
            .mount_id("root")
            .nav_selector("header a")
            .current_marker("data-active", "true");
        assert_eq!(config.mount_id, "root");
        assert_eq!(config.nav_selector, "header a");
        assert_eq!(config.current_attribute, "data-active");
        assert_eq!(config.current_value, "true");
    }
}
