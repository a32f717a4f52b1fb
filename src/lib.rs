//! Monitor console navigation: route table, authentication guard, and the
//! router that ties them together.

pub mod config;
pub mod guard;
pub mod navigation;
pub mod observability;
pub mod routing;
pub mod session;
pub mod views;

pub use config::ConsoleConfig;
pub use guard::{AuthProvider, Decision, NavigationGuard};
pub use navigation::Router;
pub use routing::{console_routes, RouteTable};
pub use session::{SessionAuth, TokenStore};
