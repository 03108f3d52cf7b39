//! Hash-fragment view router
//!
//! Keeps the mount element and the navigation indicator in sync with the
//! location fragment. One operation, resolve-and-render, runs on every
//! navigation event:
//!
//! 1. read the fragment, empty -> root key
//! 2. look it up, unknown -> fallback view
//! 3. same view as displayed -> nothing to do
//! 4. otherwise inject template, update indicator, run init script
//!
//! ## Example
//! ```
//! use folio_router::memory::{MemoryDocument, MemoryLocation, MemoryNavigation};
//! use folio_router::{NavEvent, Registry, Router, View};
//!
//! let registry = Registry::builder()
//!     .view("/", View::new("<h1>Home</h1>"))
//!     .view("/about", View::new("<h1>About</h1>"))
//!     .view("404", View::new("<h1>Not Found</h1>"))
//!     .build()
//!     .unwrap();
//!
//! let location = MemoryLocation::new("#/about");
//! let document = MemoryDocument::new().with_mount("app");
//! let mut nav = MemoryNavigation::new();
//!
//! let router = Router::new(registry, document, location.clone())
//!     .attach(&mut nav)
//!     .unwrap();
//!
//! nav.emit(NavEvent::Load);
//! router.with(|r| assert_eq!(r.document().mount_content("app"), Some("<h1>About</h1>")));
//! ```

use crate::config::RouterConfig;
use crate::dom::{Document, Location, NavEvent, NavigationSource};
use crate::error::{Result, RouterError};
use crate::fragment::{is_router_link, link_target, route_key};
use crate::registry::{Registry, Resolved};
use crate::view::View;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

/// Logical router state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterState {
    /// Nothing rendered yet
    Unrendered,
    /// Displaying the view registered under `key`
    Rendered { key: String },
}

/// Result of one resolve-and-render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Resolved view is already displayed
    Unchanged,
    /// A new view was rendered
    Rendered {
        /// Key the view is registered under (the fallback key on fallback)
        key: String,
        /// The requested key was unknown
        fallback: bool,
    },
}

struct Current {
    key: String,
    view: Rc<View>,
}

/// A rendered view whose init script has not run yet
struct PendingScript {
    view: Rc<View>,
    outcome: Result<Transition>,
}

impl PendingScript {
    fn finish(self) -> Result<Transition> {
        self.view.run_script();
        self.outcome
    }
}

/// Hash-fragment view router
pub struct Router<D: Document, L: Location> {
    registry: Registry,
    document: D,
    location: L,
    config: RouterConfig,
    current: Option<Current>,
}

impl<D: Document, L: Location> Router<D, L> {
    /// Create a router with the default configuration
    pub fn new(registry: Registry, document: D, location: L) -> Self {
        Self::with_config(registry, document, location, RouterConfig::default())
    }

    pub fn with_config(registry: Registry, document: D, location: L, config: RouterConfig) -> Self {
        Self {
            registry,
            document,
            location,
            config,
            current: None,
        }
    }

    /// Resolve the current fragment and render it if the view changed.
    ///
    /// Unknown keys never fail; they render the fallback view. A missing
    /// mount element returns [`RouterError::MountNotFound`] and leaves the
    /// router in its previous state, so the next event retries.
    pub fn handle_route(&mut self) -> Result<Transition> {
        match self.render()? {
            Some(pending) => pending.finish(),
            None => Ok(Transition::Unchanged),
        }
    }

    /// Resolve-and-render up to, not including, the init script.
    /// `None` when the resolved view is already displayed.
    fn render(&mut self) -> Result<Option<PendingScript>> {
        let hash = self.location.hash();
        let requested = route_key(&hash, &self.config.root_key).to_string();

        let (key, view, fallback) = match self.registry.resolve(&requested) {
            Resolved::Found { key, view } => (key.to_string(), Rc::clone(view), false),
            Resolved::Fallback { requested, view } => {
                debug!(key = %requested, fallback = %self.registry.fallback_key(), "unknown route");
                (self.registry.fallback_key().to_string(), Rc::clone(view), true)
            }
        };

        if let Some(current) = &self.current {
            if Rc::ptr_eq(&current.view, &view) {
                debug!(key = %requested, "view already displayed");
                return Ok(None);
            }
        }

        self.document
            .set_mount_content(&self.config.mount_id, view.template())?;

        self.current = Some(Current {
            key: key.clone(),
            view: Rc::clone(&view),
        });

        // Requested key, not the fallback key
        let indicator = self.update_active_nav(&requested);

        debug!(key = %key, fallback, "rendered view");
        Ok(Some(PendingScript {
            view,
            outcome: indicator.map(|()| Transition::Rendered { key, fallback }),
        }))
    }

    /// Clear the current marker on every router link in the nav, then set
    /// it on the first one pointing at `active`.
    fn update_active_nav(&mut self, active: &str) -> Result<()> {
        let anchors = self.document.nav_anchors(&self.config.nav_selector);

        let mut links = Vec::with_capacity(anchors.len());
        for anchor in anchors {
            let Some(href) = self.document.href(&anchor) else {
                continue;
            };
            if is_router_link(&href, &self.config.link_prefix) {
                links.push((anchor, href));
            }
        }

        for (anchor, _) in &links {
            self.document
                .remove_attribute(anchor, &self.config.current_attribute)?;
        }

        if let Some((anchor, _)) = links.iter().find(|(_, href)| link_target(href) == active) {
            self.document.set_attribute(
                anchor,
                &self.config.current_attribute,
                &self.config.current_value,
            )?;
        }

        Ok(())
    }

    pub fn state(&self) -> RouterState {
        match &self.current {
            None => RouterState::Unrendered,
            Some(current) => RouterState::Rendered {
                key: current.key.clone(),
            },
        }
    }

    /// Currently displayed view
    pub fn current_view(&self) -> Option<&Rc<View>> {
        self.current.as_ref().map(|c| &c.view)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn location(&self) -> &L {
        &self.location
    }
}

impl<D: Document + 'static, L: Location + 'static> Router<D, L> {
    /// Share the router and subscribe it to `source`. Failed renders are
    /// logged with `tracing`.
    pub fn attach<N: NavigationSource>(self, source: &mut N) -> Result<RouterHandle<D, L>> {
        self.attach_with_reporter(source, |event, err| {
            warn!(?event, error = %err, "navigation not rendered");
        })
    }

    /// Like [`Router::attach`], reporting failed renders to `reporter`
    pub fn attach_with_reporter<N, F>(self, source: &mut N, reporter: F) -> Result<RouterHandle<D, L>>
    where
        N: NavigationSource,
        F: Fn(NavEvent, &RouterError) + 'static,
    {
        let handle = RouterHandle {
            inner: Rc::new(RefCell::new(self)),
        };

        let router = handle.clone();
        source.subscribe(Box::new(move |event| {
            if let Err(err) = router.handle_route() {
                reporter(event, &err);
            }
        }))?;

        Ok(handle)
    }
}

/// Shared handle to an attached router.
///
/// View scripts run after the router is released and may read it through
/// the handle.
pub struct RouterHandle<D: Document, L: Location> {
    inner: Rc<RefCell<Router<D, L>>>,
}

impl<D: Document, L: Location> Clone for RouterHandle<D, L> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<D: Document, L: Location> RouterHandle<D, L> {
    /// Run resolve-and-render outside of an event
    pub fn handle_route(&self) -> Result<Transition> {
        // Borrow ends before the init script runs
        let pending = self.inner.borrow_mut().render()?;
        match pending {
            Some(pending) => pending.finish(),
            None => Ok(Transition::Unchanged),
        }
    }

    pub fn state(&self) -> RouterState {
        self.inner.borrow().state()
    }

    /// Inspect the router
    pub fn with<R>(&self, f: impl FnOnce(&Router<D, L>) -> R) -> R {
        f(&self.inner.borrow())
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Router<D, L>) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }
}
