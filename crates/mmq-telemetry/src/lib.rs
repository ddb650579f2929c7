//! Logging and metrics for the mmq quoting engine.
//!
//! Recoverable conditions (venue rejections, stale snapshots, model
//! fallbacks) surface through these counters and structured logs rather
//! than errors that would interrupt the orchestrator's loop.

pub mod error;
pub mod logging;
pub mod metrics;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
