//! Deferred view factories.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::{BoxFuture, FutureExt};

/// A loaded view module.
///
/// Views are opaque to routing: the only thing known about one is the
/// component it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Component identifier, e.g. `main/Security`.
    pub component: String,
}

impl View {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }
}

/// Error raised when a view module fails to load.
#[derive(Debug, Clone, thiserror::Error)]
#[error("failed to load view `{component}`: {reason}")]
pub struct LoadError {
    pub component: String,
    pub reason: String,
}

impl LoadError {
    pub fn new(component: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            reason: reason.into(),
        }
    }
}

/// Future returned by a [`Loader`].
pub type LoadFuture = BoxFuture<'static, Result<View, LoadError>>;

/// Zero-argument factory producing a view on demand.
///
/// Cloning a loader is cheap; clones share the same factory.
#[derive(Clone)]
pub struct Loader {
    factory: Arc<dyn Fn() -> LoadFuture + Send + Sync>,
}

impl Loader {
    /// Wrap an async factory.
    pub fn new<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<View, LoadError>> + Send + 'static,
    {
        Self {
            factory: Arc::new(move || factory().boxed()),
        }
    }

    /// Loader for a bundled component that is always available.
    pub fn component(component: &'static str) -> Self {
        Self::new(move || async move { Ok(View::new(component)) })
    }

    /// Start loading the view.
    pub fn load(&self) -> LoadFuture {
        (self.factory)()
    }
}

impl fmt::Debug for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Loader(..)")
    }
}
