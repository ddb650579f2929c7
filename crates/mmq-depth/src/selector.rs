//! Boundary-clamped depth lookup.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use mmq_core::Price;

use crate::params::ModelParameters;
use crate::schedule::{DepthPair, DepthSchedule};

/// Maps (inventory position, step) to a bid/ask depth pair.
///
/// Outside the inventory bounds the reducing side is quoted at exactly one
/// tick (maximally aggressive) while the other side takes the schedule's
/// boundary entry. The side that would reduce absolute inventory is always
/// quoted at least as aggressively as the side that would increase it.
pub struct DepthSelector {
    schedule: Box<dyn DepthSchedule>,
    q_upper: i64,
    q_lower: i64,
    tick: Price,
}

impl DepthSelector {
    pub fn new(schedule: Box<dyn DepthSchedule>, params: &ModelParameters) -> Self {
        Self {
            schedule,
            q_upper: params.q_upper,
            q_lower: params.q_lower,
            tick: params.tick(),
        }
    }

    /// Look up the depth pair for the current position and step.
    ///
    /// Fractional positions are rounded to the nearest inventory unit for
    /// the table lookup; the boundary branches compare against the exact
    /// position so a holding at or beyond a bound always quotes the
    /// reducing side at one tick.
    pub fn select(&self, position: Decimal, step: usize) -> DepthPair {
        let last = self.schedule.offsets() - 1;

        if position >= Decimal::from(self.q_upper) {
            // Shed excess long inventory: one-tick ask, boundary bid.
            return DepthPair {
                bid: self.schedule.bid_depth(0, step),
                ask: self.tick,
            };
        }
        if position <= Decimal::from(self.q_lower) {
            // Cover short inventory: one-tick bid, boundary ask.
            return DepthPair {
                bid: self.tick,
                ask: self.schedule.ask_depth(last, step),
            };
        }

        let units = position.round().to_i64().unwrap_or(0);
        let bid_idx = (self.q_upper - 1 - units).clamp(0, last as i64) as usize;
        let ask_idx = (self.q_upper - units).clamp(0, last as i64) as usize;
        DepthPair {
            bid: self.schedule.bid_depth(bid_idx, step),
            ask: self.schedule.ask_depth(ask_idx, step),
        }
    }
}
