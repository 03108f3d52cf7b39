//! WASM bindings for JavaScript interop

use crate::host::{self, WebDocument, WebLocation, WebNavigation};
use crate::views;
use folio_router::{RouterConfig, RouterError, RouterHandle, RouterState, Router};
use wasm_bindgen::prelude::*;

fn to_js(err: RouterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Running application: the attached router
#[wasm_bindgen]
pub struct FolioApp {
    router: RouterHandle<WebDocument, WebLocation>,
}

#[wasm_bindgen]
impl FolioApp {
    /// Key of the displayed view, `undefined` before the first render
    #[wasm_bindgen(getter)]
    pub fn current_route(&self) -> Option<String> {
        match self.router.state() {
            RouterState::Unrendered => None,
            RouterState::Rendered { key } => Some(key),
        }
    }

    /// Navigate to a route key; rendering follows the `hashchange` event
    pub fn navigate(&self, key: &str) -> Result<(), JsValue> {
        self.router
            .with(|r| r.location().set_hash(key))
            .map_err(to_js)
    }

    /// Re-run resolve-and-render against the current fragment
    pub fn refresh(&self) -> Result<(), JsValue> {
        self.router.handle_route().map(|_| ()).map_err(to_js)
    }

    /// Registered route keys, sorted
    #[wasm_bindgen(getter)]
    pub fn routes(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .router
            .with(|r| r.registry().keys().map(str::to_string).collect());
        keys.sort();
        keys
    }
}

/// Start the demo app mounted on `#app`
#[wasm_bindgen]
pub fn start() -> Result<FolioApp, JsValue> {
    start_with_mount("app")
}

/// Start the demo app on a custom mount element
#[wasm_bindgen]
pub fn start_with_mount(mount_id: &str) -> Result<FolioApp, JsValue> {
    let config = RouterConfig::new().mount_id(mount_id);
    let link_prefix = config.link_prefix.clone();

    let document = WebDocument::from_window().map_err(to_js)?;
    let location = WebLocation::from_window().map_err(to_js)?;
    let mut navigation = WebNavigation::from_window().map_err(to_js)?;
    let registry = views::registry().map_err(to_js)?;

    let dom = document.inner().clone();
    let router = Router::with_config(registry, document, location, config)
        .attach_with_reporter(&mut navigation, |event, err| {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "folio: {:?} not rendered: {}",
                event, err
            )));
        })
        .map_err(to_js)?;

    host::install_smooth_scroll(&dom, &link_prefix).map_err(to_js)?;

    // Module loaded after the page: the load event is gone
    if host::is_loaded(&dom) {
        router.handle_route().map_err(to_js)?;
    }

    Ok(FolioApp { router })
}
