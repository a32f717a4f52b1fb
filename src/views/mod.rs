//! Lazy view subsystem.
//!
//! # Data Flow
//! ```text
//! Route table (startup):
//!     Route { path, name, loader }
//!     → loader.rs (deferred view factory, never invoked here)
//!
//! Navigation (runtime):
//!     Router commits a match
//!     → cache.rs (memoized by route name)
//!     → first visit: loader runs, view stored
//!     → later visits: stored view returned
//! ```
//!
//! # Design Decisions
//! - The route table only holds loaders; memoization belongs to the router
//! - Load-once, cache-forever per route name
//! - Failed loads are not cached, the next navigation retries

pub mod cache;
pub mod loader;

pub use cache::ViewCache;
pub use loader::{LoadError, Loader, View};
