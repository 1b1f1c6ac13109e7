//! Diagnostic sink boundary
//!
//! Passes report problems by handing a diagnostic value to a [`Sink`];
//! how (and whether) diagnostics get rendered is the consumer's
//! concern. Rendering and process exit behavior live outside this
//! workspace.

use std::sync::RwLock;

/// Receives diagnostics from a compiler pass.
///
/// Implementations decide what to do with each diagnostic: collect it,
/// count it, forward it to a renderer. Reporting must not fail; a sink
/// that cannot accept a diagnostic should panic rather than lose it.
pub trait Sink<T>: Send + Sync {
    /// Accepts one diagnostic.
    fn report(&self, diagnostic: T);
}

/// A [`Sink`] that stores every diagnostic it receives.
///
/// The usual choice in tests and in batch compilation, where all
/// diagnostics for a translation unit are gathered before rendering.
#[derive(Debug)]
pub struct Collected<T: Send + Sync> {
    diagnostics: RwLock<Vec<T>>,
}

impl<T: Send + Sync> Collected<T> {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            diagnostics: RwLock::new(Vec::new()),
        }
    }

    /// Consumes the store and returns the diagnostics in report order
    pub fn into_vec(self) -> Vec<T> {
        self.diagnostics.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    /// Number of diagnostics reported so far
    pub fn len(&self) -> usize {
        self.diagnostics.read().map(|v| v.len()).unwrap_or(0)
    }

    /// True if nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Send + Sync> Default for Collected<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync> Sink<T> for Collected<T> {
    fn report(&self, diagnostic: T) {
        if let Ok(mut diagnostics) = self.diagnostics.write() {
            diagnostics.push(diagnostic);
        }
    }
}

/// A [`Sink`] that discards everything.
///
/// Used by callers that probe "is this a constant?" speculatively and
/// do not want the failure surfaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ignore;

impl<T> Sink<T> for Ignore {
    fn report(&self, _diagnostic: T) {}
}
