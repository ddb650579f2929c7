//! Engine error types.

use thiserror::Error;

use crate::venue::VenueError;
use mmq_depth::ModelError;

/// Engine error types.
///
/// Only construction-time configuration problems and whole-tick venue
/// failures surface here. Per-instruction rejections and stale snapshots
/// are recovered locally and reported through counters, never as errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Invalid engine configuration. Fatal at construction.
    #[error("Invalid engine configuration: {0}")]
    Configuration(String),

    /// Depth-model failure.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The venue failed the whole tick (reference price, inventory, or
    /// batch submission). The next tick re-diffs from scratch.
    #[error("Venue error: {0}")]
    Venue(#[from] VenueError),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
