//! Quoting engine facade.
//!
//! Wires the depth schedule, ladder builder, book synchronizer, and peg
//! manager into one step-driven engine. Per tick: the driver supplies the
//! reference price, inventory, step index, and a live-order snapshot; the
//! engine returns one atomic instruction batch plus the commitment peg
//! update.
//!
//! Single-threaded and synchronous by design: all per-tick state is
//! derived fresh from the driver's inputs plus the immutable depth
//! schedule, so no locking exists anywhere in the engine.

pub mod config;
pub mod engine;
pub mod error;
pub mod venue;

pub use config::{CommitmentConfig, EngineConfig, LadderConfig, ModelConfig};
pub use engine::{QuotingEngine, TickReport};
pub use error::EngineError;
pub use venue::{VenueClient, VenueError};

pub use mmq_sync::LiveBook;
