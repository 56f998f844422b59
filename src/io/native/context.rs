use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Deserialize;

use crate::error::{GeoBridgeError, Result};
use crate::io::native::{Engine, NativeGeometryHandle};

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Options for a [`NativeContext`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContextOptions {
    /// Maximum number of diagnostics kept; the oldest are dropped first.
    pub max_diagnostics: usize,

    /// Clear accumulated diagnostics after each successful top-level bridge call.
    pub clear_on_success: bool,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            max_diagnostics: 64,
            clear_on_success: false,
        }
    }
}

/// An engine handle plus the diagnostics accumulated from its failed calls.
///
/// A context is not `Sync`: calls through one context must come from one thread at a time.
/// Use one context per worker to run in parallel.
pub struct NativeContext<E: Engine> {
    id: u64,
    engine: E,
    options: ContextOptions,
    diagnostics: RefCell<VecDeque<String>>,
}

impl<E: Engine> NativeContext<E> {
    pub fn new(engine: E) -> Self {
        Self::with_options(engine, ContextOptions::default())
    }

    pub fn with_options(engine: E, options: ContextOptions) -> Self {
        Self {
            id: NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed),
            engine,
            options,
            diagnostics: RefCell::new(VecDeque::new()),
        }
    }

    /// Identifier that tags every handle created through this context.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn options(&self) -> &ContextOptions {
        &self.options
    }

    /// Diagnostics accumulated so far, oldest first.
    pub fn diagnostics(&self) -> Vec<String> {
        self.diagnostics.borrow().iter().cloned().collect()
    }

    pub fn clear_diagnostics(&self) {
        self.diagnostics.borrow_mut().clear();
    }

    /// Turn a sentinel-returning engine call into a [`Result`].
    pub(crate) fn check<T>(&self, value: Option<T>, call: &str) -> Result<T> {
        value.ok_or_else(|| self.fail(call))
    }

    pub(crate) fn check_status(&self, ok: bool, call: &str) -> Result<()> {
        if ok {
            Ok(())
        } else {
            Err(self.fail(call))
        }
    }

    /// Wrap a geometry returned by the engine so that this context owns its release.
    pub(crate) fn wrap(&self, raw: E::Geometry) -> NativeGeometryHandle<'_, E> {
        NativeGeometryHandle::new(self, raw)
    }

    pub(crate) fn ensure_owned(&self, handle: &NativeGeometryHandle<'_, E>) -> Result<()> {
        if handle.context_id() == self.id {
            Ok(())
        } else {
            Err(GeoBridgeError::Engine(format!(
                "geometry handle belongs to context {}, not {}",
                handle.context_id(),
                self.id
            )))
        }
    }

    pub(crate) fn succeeded(&self) {
        if self.options.clear_on_success {
            self.clear_diagnostics();
        }
    }

    fn fail(&self, call: &str) -> GeoBridgeError {
        let message = self
            .engine
            .last_error()
            .unwrap_or_else(|| "no diagnostic reported".to_string());
        log::debug!("native call {call} failed in context {}: {message}", self.id);

        let mut diagnostics = self.diagnostics.borrow_mut();
        diagnostics.push_back(format!("{call}: {message}"));
        while diagnostics.len() > self.options.max_diagnostics.max(1) {
            diagnostics.pop_front();
        }
        let text = diagnostics.iter().map(String::as_str).collect::<Vec<_>>();
        GeoBridgeError::Engine(text.join("\n"))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::engine::MockEngine;

    #[test]
    fn options_from_json() {
        let options: ContextOptions = serde_json::from_str(r#"{"max_diagnostics": 2}"#).unwrap();
        assert_eq!(options.max_diagnostics, 2);
        assert!(!options.clear_on_success);
    }

    #[test]
    fn diagnostics_accumulate_and_are_bounded() {
        let options = ContextOptions {
            max_diagnostics: 2,
            clear_on_success: false,
        };
        let ctx = NativeContext::with_options(MockEngine::default(), options);
        for call in ["first", "second", "third"] {
            ctx.engine().fail_next(call);
            let err = ctx.check::<()>(None, call).unwrap_err();
            assert!(matches!(err, GeoBridgeError::Engine(_)));
        }
        let diagnostics = ctx.diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].starts_with("second"));
        assert!(diagnostics[1].contains("third"));
    }

    #[test]
    fn error_text_carries_all_diagnostics() {
        let ctx = NativeContext::new(MockEngine::default());
        ctx.engine().fail_next("boom");
        let _ = ctx.check::<()>(None, "a");
        ctx.engine().fail_next("bang");
        let err = ctx.check::<()>(None, "b").unwrap_err();
        let GeoBridgeError::Engine(text) = err else {
            panic!("expected engine error");
        };
        assert!(text.contains("boom"));
        assert!(text.contains("bang"));
    }

    #[test]
    fn ids_are_unique() {
        let a = NativeContext::new(MockEngine::default());
        let b = NativeContext::new(MockEngine::default());
        assert_ne!(a.id(), b.id());
    }
}
