//! Load-once view cache.
//!
//! # Responsibilities
//! - Memoize the first successful load per route name
//! - Share one in-flight load between concurrent navigations
//! - Leave failed loads uncached so they can be retried

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::OnceCell;

use crate::observability::metrics;
use crate::views::loader::{LoadError, Loader, View};

/// Thread-safe cache of loaded views, keyed by route name.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct ViewCache {
    slots: Arc<DashMap<String, Arc<OnceCell<Arc<View>>>>>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached view for `name`, running `loader` if it has not
    /// loaded successfully yet.
    pub async fn load(&self, name: &str, loader: &Loader) -> Result<Arc<View>, LoadError> {
        // Clone the cell out so no map shard is held across the await.
        let cell = self.slots.entry(name.to_string()).or_default().clone();

        if let Some(view) = cell.get() {
            metrics::record_view_load("cached");
            return Ok(view.clone());
        }

        let view = cell
            .get_or_try_init(|| async {
                match loader.load().await {
                    Ok(view) => {
                        tracing::debug!(route = %name, component = %view.component, "View loaded");
                        metrics::record_view_load("loaded");
                        Ok(Arc::new(view))
                    }
                    Err(e) => {
                        tracing::warn!(route = %name, error = %e, "View load failed");
                        metrics::record_view_load("failed");
                        Err(e)
                    }
                }
            })
            .await?;

        Ok(view.clone())
    }

    /// Whether the view for `name` has been loaded.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.slots
            .get(name)
            .map(|cell| cell.initialized())
            .unwrap_or(false)
    }

    /// Number of loaded views.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|e| e.value().initialized()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
