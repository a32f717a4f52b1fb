//! Navigation guard subsystem.
//!
//! # Data Flow
//! ```text
//! NavigationRequest { to, from }
//!     → provider.rs (AuthProvider::is_unauthorized, queried fresh)
//!     → policy.rs (welcome-while-authenticated? index-while-unauthorized?)
//!     → Decision: Proceed | RedirectTo(path)
//! ```
//!
//! # Design Decisions
//! - Auth state is an injected capability, never a global
//! - The guard holds no mutable state between navigations
//! - Rules are evaluated in order, first match wins
//! - A failing auth check is resolved by a configured policy

pub mod policy;
pub mod provider;

pub use policy::{Decision, GuardError, NavigationGuard, NavigationRequest, NavigationTarget};
pub use provider::{AuthError, AuthProvider};
