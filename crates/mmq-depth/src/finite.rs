//! Finite-horizon depth solve.
//!
//! Models inventory as a birth-death process: the generator has the
//! running-penalty decay on the diagonal and the expected one-tick fill
//! rate `lambda * e^-1` on the neighbor bands. For each remaining horizon
//! the value transform is `w = expm(A * remaining) * z` with terminal
//! vector `z[q] = exp(-alpha * kappa * q^2)`; depths are first differences
//! of `h = ln(w) / kappa` shifted by the `1/kappa` half-spread.

use nalgebra::{DMatrix, DVector};

use mmq_core::Price;

use crate::error::{ModelError, Result};
use crate::params::ModelParameters;
use crate::schedule::{quantize_depth, DepthSchedule};

/// Dense per-step depth tables for a finite horizon.
///
/// Shape: `[horizon_steps + 1][q_upper - q_lower]` per side. Steps beyond
/// the horizon clamp to the terminal row.
#[derive(Debug, Clone)]
pub struct FiniteHorizonSchedule {
    bid: Vec<Vec<Price>>,
    ask: Vec<Vec<Price>>,
    offsets: usize,
}

impl FiniteHorizonSchedule {
    /// Solve the full table for a parameter set.
    ///
    /// Fails with `Configuration` on invalid parameters and with
    /// `NumericDomain` if the value transform reaches a non-positive (or
    /// non-finite) entry before the logarithm. The guard is explicit so a
    /// fragile parameter set surfaces as an error instead of NaN depths.
    pub fn build(params: &ModelParameters) -> Result<Self> {
        params.validate()?;

        let n = params.states();
        let nq = params.offsets();
        let steps = params.horizon_steps as usize;
        let kappa = params.fill_intensity;
        let inv_kappa = 1.0 / kappa;
        // Expected fill rate at one-tick distance.
        let hop = params.arrival_rate * (-1.0f64).exp();

        let mut generator = DMatrix::<f64>::zeros(n, n);
        for i in 0..n {
            let q = params.inventory_at_offset(i) as f64;
            generator[(i, i)] = -kappa * params.running_penalty * q * q;
            if i > 0 {
                generator[(i, i - 1)] = hop;
            }
            if i + 1 < n {
                generator[(i, i + 1)] = hop;
            }
        }

        let terminal = DVector::<f64>::from_fn(n, |i, _| {
            let q = params.inventory_at_offset(i) as f64;
            (-params.terminal_penalty * kappa * q * q).exp()
        });

        let mut bid = Vec::with_capacity(steps + 1);
        let mut ask = Vec::with_capacity(steps + 1);

        for step in 0..=steps {
            let remaining = (steps - step) as f64 * params.step_dt;
            let transform = (&generator * remaining).exp() * &terminal;

            let mut h = vec![0.0f64; n];
            for (offset, value) in transform.iter().enumerate() {
                if *value <= 0.0 || !value.is_finite() {
                    return Err(ModelError::NumericDomain {
                        step,
                        offset,
                        value: *value,
                    });
                }
                h[offset] = value.ln() * inv_kappa;
            }

            let mut bid_row = Vec::with_capacity(nq);
            let mut ask_row = Vec::with_capacity(nq);
            for idx in 0..nq {
                // Ask at offset idx sells into offset idx+1; the bid stored
                // at idx buys from offset idx+1 back into idx.
                ask_row.push(quantize_depth(
                    inv_kappa + h[idx] - h[idx + 1],
                    params.price_decimals,
                ));
                bid_row.push(quantize_depth(
                    inv_kappa + h[idx + 1] - h[idx],
                    params.price_decimals,
                ));
            }
            bid.push(bid_row);
            ask.push(ask_row);
        }

        Ok(Self {
            bid,
            ask,
            offsets: nq,
        })
    }

    fn row(&self, step: usize) -> usize {
        step.min(self.bid.len() - 1)
    }
}

impl DepthSchedule for FiniteHorizonSchedule {
    fn bid_depth(&self, index: usize, step: usize) -> Price {
        self.bid[self.row(step)][index]
    }

    fn ask_depth(&self, index: usize, step: usize) -> Price {
        self.ask[self.row(step)][index]
    }

    fn offsets(&self) -> usize {
        self.offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn small_params() -> ModelParameters {
        ModelParameters {
            horizon_steps: 10,
            step_dt: 1.0 / (60.0 * 24.0 * 365.25),
            q_upper: 4,
            q_lower: -4,
            fill_intensity: 500.0,
            arrival_rate: 5.0,
            terminal_penalty: 1e-4,
            running_penalty: 5e-6,
            price_decimals: 4,
        }
    }

    fn scenario_a_params() -> ModelParameters {
        ModelParameters {
            horizon_steps: 180,
            step_dt: 1.0 / (60.0 * 24.0 * 365.25),
            q_upper: 20,
            q_lower: -20,
            fill_intensity: 500.0,
            arrival_rate: 5.0,
            terminal_penalty: 1e-4,
            running_penalty: 5e-6,
            price_decimals: 4,
        }
    }

    #[test]
    fn test_every_entry_at_least_one_tick() {
        let params = small_params();
        let schedule = FiniteHorizonSchedule::build(&params).unwrap();
        let tick = params.tick();
        for step in 0..=params.horizon_steps as usize {
            for idx in 0..schedule.offsets() {
                assert!(schedule.bid_depth(idx, step) >= tick);
                assert!(schedule.ask_depth(idx, step) >= tick);
            }
        }
    }

    #[test]
    fn test_bid_monotone_in_inventory() {
        // Rising inventory means a falling bid-table index; bid depth must
        // not decrease as inventory rises toward q_upper.
        let params = small_params();
        let schedule = FiniteHorizonSchedule::build(&params).unwrap();
        for step in 0..=params.horizon_steps as usize {
            for idx in 1..schedule.offsets() {
                assert!(
                    schedule.bid_depth(idx - 1, step) >= schedule.bid_depth(idx, step),
                    "bid table not monotone at step {step}, index {idx}"
                );
            }
        }
    }

    #[test]
    fn test_ask_monotone_in_inventory() {
        // Falling inventory means a rising ask-table index; ask depth must
        // not decrease as inventory falls toward q_lower.
        let params = small_params();
        let schedule = FiniteHorizonSchedule::build(&params).unwrap();
        for step in 0..=params.horizon_steps as usize {
            for idx in 1..schedule.offsets() {
                assert!(
                    schedule.ask_depth(idx, step) >= schedule.ask_depth(idx - 1, step),
                    "ask table not monotone at step {step}, index {idx}"
                );
            }
        }
    }

    #[test]
    fn test_step_beyond_horizon_clamps_to_terminal_row() {
        let params = small_params();
        let schedule = FiniteHorizonSchedule::build(&params).unwrap();
        assert_eq!(schedule.bid_depth(3, 10), schedule.bid_depth(3, 10_000));
    }

    #[test]
    fn test_scenario_a_table() {
        // q_upper=20, q_lower=-20, kappa=500, lambda=5, alpha=1e-4,
        // phi=5e-6, N=180, dt=1/(60*24*365.25).
        let params = scenario_a_params();
        let schedule = FiniteHorizonSchedule::build(&params).unwrap();
        assert_eq!(schedule.offsets(), 40);

        let tick = params.tick();
        for step in [0usize, 90, 180] {
            for idx in 0..40 {
                let bid = schedule.bid_depth(idx, step);
                let ask = schedule.ask_depth(idx, step);
                assert!(bid >= tick && ask >= tick, "non-finite or unclamped entry");
            }
            for idx in 1..40 {
                assert!(schedule.bid_depth(idx - 1, step) >= schedule.bid_depth(idx, step));
            }
        }

        // bid[90][offset 10] lies in (0, 10/kappa].
        let probe = schedule.bid_depth(10, 90);
        assert!(probe.is_positive());
        assert!(probe.inner() <= dec!(10) / Decimal::from(500));
    }

    #[test]
    fn test_invalid_bounds_fail_configuration() {
        let mut params = small_params();
        params.q_lower = params.q_upper;
        assert!(matches!(
            FiniteHorizonSchedule::build(&params),
            Err(ModelError::Configuration(_))
        ));
    }

    #[test]
    fn test_extreme_terminal_penalty_fails_numeric_domain() {
        // exp(-alpha * kappa * q^2) underflows to exactly 0.0 for extreme
        // alpha, which must surface as NumericDomain, not NaN depths.
        let mut params = small_params();
        params.terminal_penalty = 1e6;
        let result = FiniteHorizonSchedule::build(&params);
        assert!(matches!(result, Err(ModelError::NumericDomain { .. })));
    }
}
