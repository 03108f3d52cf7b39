//! folio-web: browser host for folio-router
//!
//! web-sys implementations of the router's host traits, the demo view set
//! and the wasm-bindgen entry point.

pub mod views;

#[cfg(feature = "wasm")]
pub mod host;

#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::*;

#[cfg(feature = "wasm")]
pub use host::{WebDocument, WebLocation, WebNavigation};
pub use views::registry;
