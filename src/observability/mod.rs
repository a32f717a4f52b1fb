//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured fields, navigation id)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → logging.rs (fmt subscriber on stderr)
//!     → whatever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Navigation id flows through every event of one navigation
//! - Metrics go through the `metrics` facade; without a recorder they are no-ops

pub mod logging;
pub mod metrics;
