//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     Route tree (console.rs)
//!     → table.rs (validate names and paths, index by name)
//!     → Freeze as immutable RouteTable
//!
//! Path Resolution:
//!     "/index/security"
//!     → matcher.rs (split into segments, walk the tree)
//!     → Return: RouteMatch (leaf + matched chain) or None
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Exact, case-sensitive segment matching; no dynamic parameters
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)
//! - Not-found is an explicit `None`, never a silent default

pub mod console;
pub mod matcher;
pub mod route;
pub mod table;

pub use console::console_routes;
pub use route::Route;
pub use table::{MatchedRoute, RouteEntry, RouteMatch, RouteTable, RouteTableError};
