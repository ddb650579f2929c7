//! Venue access trait.
//!
//! Everything the engine needs from a venue in one tick: the reference
//! price, the current inventory, a live-order snapshot per side, and
//! atomic batch submission. Implementations own the transport; the engine
//! stays synchronous and transport-agnostic.

use rust_decimal::Decimal;
use thiserror::Error;

use mmq_core::{InstructionBatch, InstructionResult, LiveOrder, OrderSide, Price};

/// Venue-side failure modes.
#[derive(Debug, Error)]
pub enum VenueError {
    /// The live-order snapshot is stale or unreadable. Synchronization is
    /// skipped for the tick and retried on the next one.
    #[error("Stale order snapshot: {0}")]
    StaleSnapshot(String),

    /// The venue could not serve the request at all.
    #[error("Venue unavailable: {0}")]
    Unavailable(String),
}

/// Per-tick venue interface.
///
/// `live_orders` must return each side sorted best price first (bids
/// descending, asks ascending); the diff pairs ladder levels with resting
/// orders by rank. `submit_batch` applies the batch in order and returns
/// one result per instruction, in the same order.
#[cfg_attr(test, mockall::automock)]
pub trait VenueClient {
    /// Current reference price.
    fn reference_price(&self) -> Result<Price, VenueError>;

    /// Current inventory, in units (may be fractional).
    fn inventory(&self) -> Result<Decimal, VenueError>;

    /// Resting orders on one side, best price first.
    fn live_orders(&self, side: OrderSide) -> Result<Vec<LiveOrder>, VenueError>;

    /// Submit a batch atomically; one result per instruction, in order.
    fn submit_batch(
        &mut self,
        batch: &InstructionBatch,
    ) -> Result<Vec<InstructionResult>, VenueError>;
}
