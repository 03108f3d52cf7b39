//! folio-router: hash-fragment view router
//!
//! Host-independent core used by folio-web (browser) and by tests through
//! the in-memory host.
//!
//! ## Features
//! - Fragment routing: `#/about` -> view registered under `/about`
//! - Empty fragment resolves to the root key `/`
//! - Unknown keys render the registry's fallback view (`404`)
//! - Re-render suppressed while the resolved view is unchanged
//! - `aria-current` kept on the nav link of the displayed route
//!
//! ## Host traits
//! - [`Document`] - mount element and nav anchors
//! - [`Location`] - current fragment
//! - [`NavigationSource`] - hash change and load notifications

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod dom;
pub mod error;
pub mod fragment;
pub mod memory;
pub mod registry;
pub mod router;
pub mod view;

// Re-exports
pub use config::RouterConfig;
pub use dom::{Document, Location, NavEvent, NavigationSource};
pub use error::{Result, RouterError};
pub use registry::{Registry, RegistryBuilder, Resolved, DEFAULT_FALLBACK_KEY};
pub use router::{Router, RouterHandle, RouterState, Transition};
pub use view::{Script, View};
