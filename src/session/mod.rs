//! Session subsystem.
//!
//! # Data Flow
//! ```text
//! Login response { token, expire }
//!     → token.rs (AccessToken)
//!     → store.rs (memory slot, or JSON file when "remember me")
//!
//! Before each navigation:
//!     SessionAuth::is_unauthorized
//!     → TokenStore::take (persisted first, then memory)
//!     → expired? forget everywhere, report unauthorized
//! ```
//!
//! # Design Decisions
//! - Persisted tokens are re-read on every check so another process
//!   (e.g. the CLI `login`) is observed immediately
//! - Expiry is checked on read, no background sweeper
//! - A malformed token file is an error, not a silent logout

pub mod store;
pub mod token;

pub use store::{SessionAuth, SessionError, TokenStore};
pub use token::AccessToken;
