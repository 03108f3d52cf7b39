//! Views - one screen of the application
//!
//! A view is a markup template plus an optional init routine that runs
//! right after the template is injected into the mount point.

use std::fmt;
use std::rc::Rc;

/// Zero-argument init routine attached to a view
pub type Script = Box<dyn Fn()>;

/// A named screen: template markup and optional init script
pub struct View {
    template: String,
    script: Option<Script>,
}

impl View {
    /// Create a view from its template markup
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            script: None,
        }
    }

    /// Attach an init routine, run after every render of this view
    pub fn with_script(mut self, script: impl Fn() + 'static) -> Self {
        self.script = Some(Box::new(script));
        self
    }

    /// Wrap in `Rc` for registration; identity is `Rc` pointer identity
    pub fn shared(self) -> Rc<Self> {
        Rc::new(self)
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn has_script(&self) -> bool {
        self.script.is_some()
    }

    /// Invoke the init routine if there is one
    pub(crate) fn run_script(&self) {
        if let Some(script) = &self.script {
            script();
        }
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("template_len", &self.template.len())
            .field("script", &self.script.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_template() {
        let view = View::new("<h1>Home</h1>");
        assert_eq!(view.template(), "<h1>Home</h1>");
        assert!(!view.has_script());
    }

    #[test]
    fn test_script_runs() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let view = View::new("").with_script(move || counter.set(counter.get() + 1));

        assert!(view.has_script());
        view.run_script();
        view.run_script();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_run_script_without_script() {
        // No-op, must not panic
        View::new("").run_script();
    }
}
