//! In-memory host
//!
//! Fakes for the [`dom`](crate::dom) traits. Used by the test suites and by
//! embedders that drive the router without a browser.

use crate::dom::{Document, Location, NavEvent, NavigationSource};
use crate::error::{Result, RouterError};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

/// One anchor element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryAnchor {
    pub href: Option<String>,
    pub attributes: BTreeMap<String, String>,
    /// Inside the navigation area
    pub in_nav: bool,
}

/// In-memory document: mount elements by id plus a flat anchor list.
///
/// Selectors are not parsed; [`Document::nav_anchors`] returns every anchor
/// flagged `in_nav`, whatever selector is passed.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    mounts: HashMap<String, String>,
    anchors: Vec<MemoryAnchor>,
    mount_writes: usize,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty mount element
    pub fn with_mount(mut self, id: impl Into<String>) -> Self {
        self.mounts.insert(id.into(), String::new());
        self
    }

    /// Add an anchor inside the navigation area
    pub fn with_nav_link(mut self, href: impl Into<String>) -> Self {
        self.anchors.push(MemoryAnchor {
            href: Some(href.into()),
            in_nav: true,
            ..Default::default()
        });
        self
    }

    /// Add an anchor outside the navigation area
    pub fn with_anchor(mut self, href: impl Into<String>) -> Self {
        self.anchors.push(MemoryAnchor {
            href: Some(href.into()),
            in_nav: false,
            ..Default::default()
        });
        self
    }

    /// Add an arbitrary anchor (e.g. one carrying stale attributes)
    pub fn with_anchor_element(mut self, anchor: MemoryAnchor) -> Self {
        self.anchors.push(anchor);
        self
    }

    pub fn remove_mount(&mut self, id: &str) {
        self.mounts.remove(id);
    }

    pub fn insert_mount(&mut self, id: impl Into<String>) {
        self.mounts.insert(id.into(), String::new());
    }

    pub fn mount_content(&self, id: &str) -> Option<&str> {
        self.mounts.get(id).map(String::as_str)
    }

    /// Number of successful mount content replacements
    pub fn mount_writes(&self) -> usize {
        self.mount_writes
    }

    pub fn anchors(&self) -> &[MemoryAnchor] {
        &self.anchors
    }

    pub fn attribute(&self, anchor: usize, name: &str) -> Option<&str> {
        self.anchors
            .get(anchor)?
            .attributes
            .get(name)
            .map(String::as_str)
    }

    /// Hrefs of all anchors carrying attribute `name`
    pub fn marked_hrefs(&self, name: &str) -> Vec<&str> {
        self.anchors
            .iter()
            .filter(|a| a.attributes.contains_key(name))
            .filter_map(|a| a.href.as_deref())
            .collect()
    }

    fn anchor_mut(&mut self, index: usize) -> Result<&mut MemoryAnchor> {
        self.anchors
            .get_mut(index)
            .ok_or_else(|| RouterError::Host(format!("no anchor at index {}", index)))
    }
}

impl Document for MemoryDocument {
    type Anchor = usize;

    fn set_mount_content(&mut self, mount_id: &str, markup: &str) -> Result<()> {
        let slot = self
            .mounts
            .get_mut(mount_id)
            .ok_or_else(|| RouterError::MountNotFound(mount_id.to_string()))?;
        slot.clear();
        slot.push_str(markup);
        self.mount_writes += 1;
        Ok(())
    }

    fn nav_anchors(&self, _selector: &str) -> Vec<usize> {
        self.anchors
            .iter()
            .enumerate()
            .filter(|(_, a)| a.in_nav)
            .map(|(i, _)| i)
            .collect()
    }

    fn href(&self, anchor: &usize) -> Option<String> {
        self.anchors.get(*anchor)?.href.clone()
    }

    fn set_attribute(&mut self, anchor: &usize, name: &str, value: &str) -> Result<()> {
        self.anchor_mut(*anchor)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_attribute(&mut self, anchor: &usize, name: &str) -> Result<()> {
        self.anchor_mut(*anchor)?.attributes.remove(name);
        Ok(())
    }
}

/// Settable location; clones share the same fragment
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    hash: Rc<RefCell<String>>,
}

impl MemoryLocation {
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: Rc::new(RefCell::new(hash.into())),
        }
    }

    /// Set the fragment. Listeners are not notified; call
    /// [`MemoryNavigation::emit`] to dispatch the change.
    pub fn set_hash(&self, hash: impl Into<String>) {
        *self.hash.borrow_mut() = hash.into();
    }
}

impl Location for MemoryLocation {
    fn hash(&self) -> String {
        self.hash.borrow().clone()
    }
}

/// Manually dispatched navigation notifications
#[derive(Default)]
pub struct MemoryNavigation {
    listeners: Vec<Box<dyn FnMut(NavEvent)>>,
}

impl MemoryNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch an event to every listener, in subscription order
    pub fn emit(&mut self, event: NavEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl NavigationSource for MemoryNavigation {
    fn subscribe(&mut self, listener: Box<dyn FnMut(NavEvent)>) -> Result<()> {
        self.listeners.push(listener);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_content() {
        let mut doc = MemoryDocument::new().with_mount("app");
        assert_eq!(doc.mount_content("app"), Some(""));

        doc.set_mount_content("app", "<p>hi</p>").unwrap();
        doc.set_mount_content("app", "<p>bye</p>").unwrap();
        assert_eq!(doc.mount_content("app"), Some("<p>bye</p>"));
        assert_eq!(doc.mount_writes(), 2);
    }

    #[test]
    fn test_missing_mount() {
        let mut doc = MemoryDocument::new();
        let err = doc.set_mount_content("app", "x").unwrap_err();
        assert_eq!(err, RouterError::MountNotFound("app".to_string()));
        assert_eq!(doc.mount_writes(), 0);
    }

    #[test]
    fn test_nav_anchors_only_in_nav() {
        let doc = MemoryDocument::new()
            .with_nav_link("#/")
            .with_anchor("#features")
            .with_nav_link("#/about");
        assert_eq!(doc.nav_anchors("nav a"), vec![0, 2]);
        assert_eq!(doc.href(&2).as_deref(), Some("#/about"));
    }

    #[test]
    fn test_attributes() {
        let mut doc = MemoryDocument::new().with_nav_link("#/");
        doc.set_attribute(&0, "aria-current", "page").unwrap();
        assert_eq!(doc.attribute(0, "aria-current"), Some("page"));
        assert_eq!(doc.marked_hrefs("aria-current"), vec!["#/"]);

        doc.remove_attribute(&0, "aria-current").unwrap();
        assert_eq!(doc.attribute(0, "aria-current"), None);
        assert!(doc.set_attribute(&5, "x", "y").is_err());
    }

    #[test]
    fn test_location_shared() {
        let location = MemoryLocation::new("#/");
        let other = location.clone();
        other.set_hash("#/about");
        assert_eq!(location.hash(), "#/about");
    }

    #[test]
    fn test_navigation_emit() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut nav = MemoryNavigation::new();
        nav.subscribe(Box::new(move |e| sink.borrow_mut().push(e)))
            .unwrap();

        nav.emit(NavEvent::Load);
        nav.emit(NavEvent::HashChange);
        assert_eq!(nav.listener_count(), 1);
        assert_eq!(*seen.borrow(), vec![NavEvent::Load, NavEvent::HashChange]);
    }
}
