//! web-sys host
//!
//! Browser implementations of the router's host traits, plus the DOM glue
//! for same-page scroll anchors and view init scripts.

use folio_router::fragment::in_page_target;
use folio_router::{Document, Location, NavEvent, NavigationSource, Result, RouterError};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

fn host_error(err: JsValue) -> RouterError {
    let message = match err.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => err.as_string().unwrap_or_else(|| format!("{:?}", err)),
    };
    RouterError::Host(message)
}

/// Global `window`
pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| RouterError::Host("no global window".to_string()))
}

fn document(window: &Window) -> Result<web_sys::Document> {
    window
        .document()
        .ok_or_else(|| RouterError::Host("window has no document".to_string()))
}

// ============================================================================
// Document
// ============================================================================

/// Live DOM document
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// Document of the global window
    pub fn from_window() -> Result<Self> {
        Ok(Self::new(document(&window()?)?))
    }

    pub fn inner(&self) -> &web_sys::Document {
        &self.document
    }
}

impl Document for WebDocument {
    type Anchor = Element;

    fn set_mount_content(&mut self, mount_id: &str, markup: &str) -> Result<()> {
        let mount = self
            .document
            .get_element_by_id(mount_id)
            .ok_or_else(|| RouterError::MountNotFound(mount_id.to_string()))?;
        mount.set_inner_html(markup);
        Ok(())
    }

    fn nav_anchors(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                warn!(selector, error = ?err, "invalid nav selector");
                return Vec::new();
            }
        };

        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn href(&self, anchor: &Element) -> Option<String> {
        anchor.get_attribute("href")
    }

    fn set_attribute(&mut self, anchor: &Element, name: &str, value: &str) -> Result<()> {
        anchor.set_attribute(name, value).map_err(host_error)
    }

    fn remove_attribute(&mut self, anchor: &Element, name: &str) -> Result<()> {
        anchor.remove_attribute(name).map_err(host_error)
    }
}

// ============================================================================
// Location
// ============================================================================

/// `window.location`
#[derive(Debug, Clone)]
pub struct WebLocation {
    location: web_sys::Location,
}

impl WebLocation {
    pub fn new(location: web_sys::Location) -> Self {
        Self { location }
    }

    pub fn from_window() -> Result<Self> {
        Ok(Self::new(window()?.location()))
    }

    /// Navigate by setting the fragment; the browser fires `hashchange`
    pub fn set_hash(&self, hash: &str) -> Result<()> {
        self.location.set_hash(hash).map_err(host_error)
    }
}

impl Location for WebLocation {
    fn hash(&self) -> String {
        self.location.hash().unwrap_or_default()
    }
}

// ============================================================================
// Navigation events
// ============================================================================

/// `hashchange` and `load` listeners on the window
#[derive(Debug, Clone)]
pub struct WebNavigation {
    window: Window,
}

impl WebNavigation {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    pub fn from_window() -> Result<Self> {
        Ok(Self::new(window()?))
    }

    fn listen(&self, event: &str, closure: Closure<dyn FnMut(Event)>) -> Result<()> {
        self.window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(host_error)?;
        // Listeners live as long as the page
        closure.forget();
        Ok(())
    }
}

impl NavigationSource for WebNavigation {
    fn subscribe(&mut self, listener: Box<dyn FnMut(NavEvent)>) -> Result<()> {
        let listener = Rc::new(RefCell::new(listener));

        let on_hash = Rc::clone(&listener);
        self.listen(
            "hashchange",
            Closure::new(move |_: Event| {
                let mut listener = on_hash.borrow_mut();
                (&mut *listener)(NavEvent::HashChange)
            }),
        )?;

        let on_load = listener;
        self.listen(
            "load",
            Closure::new(move |_: Event| {
                let mut listener = on_load.borrow_mut();
                (&mut *listener)(NavEvent::Load)
            }),
        )
    }
}

/// The `load` event has already fired
pub fn is_loaded(document: &web_sys::Document) -> bool {
    document.ready_state() == "complete"
}

// ============================================================================
// Same-page anchors
// ============================================================================

/// Smooth-scroll clicks on `#id` anchors that are not router links
pub fn install_smooth_scroll(document: &web_sys::Document, link_prefix: &str) -> Result<()> {
    let doc = document.clone();
    let prefix = link_prefix.to_string();

    let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(link)) = target.closest("a[href^=\"#\"]") else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(id) = in_page_target(&href, &prefix) else {
            return;
        };

        if let Some(section) = doc.get_element_by_id(id) {
            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    document
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(host_error)?;
    closure.forget();
    Ok(())
}

// ============================================================================
// View scripts
// ============================================================================

thread_local! {
    // Submit handler of the mounted contact form; replaced on every render
    static CONTACT_SUBMIT: RefCell<Option<Closure<dyn FnMut(Event)>>> = const { RefCell::new(None) };
}

/// Init script of the contact view: confirm submissions inline
pub fn wire_contact_form() {
    if let Err(err) = try_wire_contact_form() {
        web_sys::console::error_1(&JsValue::from_str(&format!("contact form: {}", err)));
    }
}

fn try_wire_contact_form() -> Result<()> {
    let doc = document(&window()?)?;
    let form = doc
        .get_element_by_id("contact-form")
        .ok_or_else(|| RouterError::Host("contact form not mounted".to_string()))?;

    let status_doc = doc.clone();
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        if let Some(status) = status_doc.get_element_by_id("contact-status") {
            status.set_text_content(Some("Thanks! We'll be in touch soon."));
        }
        if let Some(form) = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlFormElement>().ok())
        {
            form.reset();
        }
    });

    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
        .map_err(host_error)?;

    // Previous form left the DOM with the previous render
    CONTACT_SUBMIT.with(|slot| *slot.borrow_mut() = Some(closure));
    Ok(())
}
