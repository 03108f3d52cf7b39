//! View registry
//!
//! Immutable key -> view mapping with a declared fallback entry. Built once
//! at startup through [`RegistryBuilder`]; building fails if the fallback
//! key has no view, so lookups can always degrade to it.

use crate::error::{Result, RouterError};
use crate::view::View;
use std::collections::HashMap;
use std::rc::Rc;

/// Default fallback ("not found") key
pub const DEFAULT_FALLBACK_KEY: &str = "404";

/// Outcome of a registry lookup
#[derive(Debug, Clone, Copy)]
pub enum Resolved<'a> {
    /// The key is registered
    Found { key: &'a str, view: &'a Rc<View> },
    /// `requested` is unknown; carries the fallback view
    Fallback { requested: &'a str, view: &'a Rc<View> },
}

impl<'a> Resolved<'a> {
    pub fn view(&self) -> &'a Rc<View> {
        match *self {
            Resolved::Found { view, .. } | Resolved::Fallback { view, .. } => view,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolved::Fallback { .. })
    }
}

/// Immutable collection of all views, keyed by route
#[derive(Debug)]
pub struct Registry {
    views: HashMap<String, Rc<View>>,
    fallback_key: String,
    fallback: Rc<View>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Look up a key, degrading to the fallback view when absent
    pub fn resolve<'a>(&'a self, key: &'a str) -> Resolved<'a> {
        match self.views.get_key_value(key) {
            Some((key, view)) => Resolved::Found {
                key: key.as_str(),
                view,
            },
            None => Resolved::Fallback {
                requested: key,
                view: &self.fallback,
            },
        }
    }

    /// Exact lookup without fallback
    pub fn get(&self, key: &str) -> Option<&Rc<View>> {
        self.views.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.views.contains_key(key)
    }

    pub fn fallback_key(&self) -> &str {
        &self.fallback_key
    }

    pub fn fallback(&self) -> &Rc<View> {
        &self.fallback
    }

    /// Registered keys (unordered)
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.views.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

/// Builder for [`Registry`]
#[derive(Debug)]
pub struct RegistryBuilder {
    views: HashMap<String, Rc<View>>,
    fallback_key: String,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            views: HashMap::new(),
            fallback_key: DEFAULT_FALLBACK_KEY.to_string(),
        }
    }
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view under `key`; a later registration replaces an earlier one
    pub fn view(self, key: impl Into<String>, view: View) -> Self {
        self.shared(key, view.shared())
    }

    /// Register an already shared view. The same `Rc` may be registered
    /// under several keys; those keys then resolve to one identical view.
    pub fn shared(mut self, key: impl Into<String>, view: Rc<View>) -> Self {
        self.views.insert(key.into(), view);
        self
    }

    /// Override the fallback key (default `"404"`)
    pub fn fallback_key(mut self, key: impl Into<String>) -> Self {
        self.fallback_key = key.into();
        self
    }

    pub fn build(self) -> Result<Registry> {
        let fallback = self
            .views
            .get(&self.fallback_key)
            .cloned()
            .ok_or_else(|| RouterError::MissingFallback(self.fallback_key.clone()))?;

        Ok(Registry {
            views: self.views,
            fallback_key: self.fallback_key,
            fallback,
        })
    }
}
