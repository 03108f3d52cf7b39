//! Host boundary
//!
//! The router never touches globals. Everything it reads or writes goes
//! through these traits, implemented by the browser bindings in folio-web
//! and by the in-memory host in [`crate::memory`].

use crate::error::Result;

/// Document access: the mount element and navigation anchors
pub trait Document {
    /// Handle to one anchor element
    type Anchor;

    /// Replace the content of the element with id `mount_id`.
    ///
    /// Returns [`RouterError::MountNotFound`](crate::RouterError::MountNotFound)
    /// when no such element exists.
    fn set_mount_content(&mut self, mount_id: &str, markup: &str) -> Result<()>;

    /// Anchors matching a CSS selector (e.g. `nav a`), in document order
    fn nav_anchors(&self, selector: &str) -> Vec<Self::Anchor>;

    /// Raw `href` attribute of an anchor
    fn href(&self, anchor: &Self::Anchor) -> Option<String>;

    fn set_attribute(&mut self, anchor: &Self::Anchor, name: &str, value: &str) -> Result<()>;

    fn remove_attribute(&mut self, anchor: &Self::Anchor, name: &str) -> Result<()>;
}

/// Read access to the current location
pub trait Location {
    /// Current fragment including the leading `#` (empty when none)
    fn hash(&self) -> String;
}

/// Navigation notifications the router reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The location fragment changed
    HashChange,
    /// Initial application-ready signal
    Load,
}

/// Source of navigation notifications
pub trait NavigationSource {
    /// Register a listener for the lifetime of the application
    fn subscribe(&mut self, listener: Box<dyn FnMut(NavEvent)>) -> Result<()>;
}
