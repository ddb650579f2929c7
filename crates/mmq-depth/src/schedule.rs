//! The depth-schedule interface and horizon-length selection policy.

use tracing::info;

use mmq_core::Price;

use crate::asymptotic::AsymptoticSchedule;
use crate::error::Result;
use crate::finite::FiniteHorizonSchedule;
use crate::params::ModelParameters;

/// A bid/ask depth pair, in price units from the reference price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthPair {
    pub bid: Price,
    pub ask: Price,
}

/// An inventory-to-depth schedule.
///
/// Entries are indexed by table index, not inventory value: index `j` on
/// the bid side corresponds to inventory `q_upper - 1 - j`, and on the ask
/// side to inventory `q_upper - j`. `DepthSelector` owns that mapping and
/// the boundary clamping; implementations only store quantized entries.
///
/// Schedules are computed once at construction and read-only afterwards,
/// so they can be shared across selector calls without synchronization.
pub trait DepthSchedule: Send + Sync {
    /// Bid depth at a table index for the given step.
    fn bid_depth(&self, index: usize, step: usize) -> Price;

    /// Ask depth at a table index for the given step.
    fn ask_depth(&self, index: usize, step: usize) -> Price;

    /// Number of per-side entries (q_upper - q_lower).
    fn offsets(&self) -> usize;
}

/// Quantize a raw f64 depth to the price grid: round to the configured
/// precision, then clamp any non-positive result to exactly one tick.
pub(crate) fn quantize_depth(value: f64, decimals: u32) -> Price {
    let raw = rust_decimal::Decimal::from_f64_retain(value).unwrap_or(rust_decimal::Decimal::ZERO);
    Price::new(raw).quantize_at_least_tick(decimals)
}

/// Build the schedule for a parameter set.
///
/// Horizons beyond `long_horizon_threshold` steps use the asymptotic
/// closed form; shorter horizons get the finite-horizon numerical solve.
pub fn build_schedule(
    params: &ModelParameters,
    long_horizon_threshold: u32,
) -> Result<Box<dyn DepthSchedule>> {
    params.validate()?;
    if params.horizon_steps > long_horizon_threshold {
        info!(
            horizon_steps = params.horizon_steps,
            long_horizon_threshold, "using asymptotic depth schedule"
        );
        Ok(Box::new(AsymptoticSchedule::build(params)?))
    } else {
        info!(
            horizon_steps = params.horizon_steps,
            states = params.states(),
            "solving finite-horizon depth schedule"
        );
        Ok(Box::new(FiniteHorizonSchedule::build(params)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(horizon_steps: u32) -> ModelParameters {
        ModelParameters {
            horizon_steps,
            step_dt: 1.0 / (60.0 * 24.0 * 365.25),
            q_upper: 3,
            q_lower: -3,
            fill_intensity: 500.0,
            arrival_rate: 5.0,
            terminal_penalty: 1e-4,
            running_penalty: 5e-6,
            price_decimals: 4,
        }
    }

    #[test]
    fn test_short_horizon_is_step_dependent() {
        // The finite-horizon solve produces step-dependent entries; the
        // asymptotic one never does. Distinguish them through the trait.
        let schedule = build_schedule(&params(20), 1000).unwrap();
        assert_eq!(schedule.offsets(), 6);
        // Terminal row exists and is clamped/positive.
        assert!(schedule.bid_depth(0, 20).is_positive());
    }

    #[test]
    fn test_long_horizon_uses_asymptotic() {
        let schedule = build_schedule(&params(5000), 1000).unwrap();
        // Step index is ignored by the asymptotic schedule.
        assert_eq!(schedule.bid_depth(2, 0), schedule.bid_depth(2, 4999));
        assert_eq!(schedule.ask_depth(3, 17), schedule.ask_depth(3, 0));
    }

    #[test]
    fn test_invalid_parameters_refused() {
        let mut bad = params(20);
        bad.q_lower = 3;
        assert!(build_schedule(&bad, 1000).is_err());
    }
}
