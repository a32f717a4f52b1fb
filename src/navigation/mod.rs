//! Navigation subsystem (the host router).
//!
//! # Data Flow
//! ```text
//! push("/forget?email=a")
//!     → location.rs (path / query / fragment)
//!     → routing::RouteTable::resolve (leaf + matched chain)
//!     → guard::NavigationGuard::check
//!         RedirectTo(p) → back to location.rs with p (bounded)
//!         Proceed       → views::ViewCache::load for each matched route
//!     → history.rs (push / replace / back)
//!     → Navigation (final target, views, redirect trail)
//! ```
//!
//! # Design Decisions
//! - One navigation at a time: the router is driven through `&mut self`
//! - Redirects re-enter the guard, so every landing page is also checked
//! - Unresolvable paths fail before the guard runs
//! - History only records committed destinations

pub mod history;
pub mod location;
pub mod router;

pub use history::History;
pub use location::{Location, LocationError};
pub use router::{resolve_location, Navigation, NavigationError, Router};
