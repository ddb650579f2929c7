//! Model parameters for the depth solve.

use mmq_core::Price;

use crate::error::{ModelError, Result};

/// Parameters of the inventory-control quoting model.
///
/// Immutable once constructed; validated before any schedule is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParameters {
    /// Horizon step count N.
    pub horizon_steps: u32,
    /// Per-step duration dt, in years.
    pub step_dt: f64,
    /// Upper inventory bound (inclusive), in integer units.
    pub q_upper: i64,
    /// Lower inventory bound (inclusive), in integer units.
    pub q_lower: i64,
    /// Fill intensity kappa: decay of fill probability with quote depth.
    pub fill_intensity: f64,
    /// Market-order arrival rate lambda.
    pub arrival_rate: f64,
    /// Terminal inventory penalty alpha.
    pub terminal_penalty: f64,
    /// Running inventory penalty phi.
    pub running_penalty: f64,
    /// Price decimal precision; one tick is 10^-price_decimals.
    pub price_decimals: u32,
}

impl ModelParameters {
    /// Validate the parameter set.
    ///
    /// Returns `ModelError::Configuration` for bounds or rate values that
    /// make the solve undefined.
    pub fn validate(&self) -> Result<()> {
        if self.q_upper <= self.q_lower {
            return Err(ModelError::Configuration(format!(
                "q_upper ({}) must exceed q_lower ({})",
                self.q_upper, self.q_lower
            )));
        }
        if self.horizon_steps == 0 {
            return Err(ModelError::Configuration(
                "horizon_steps must be positive".to_string(),
            ));
        }
        if self.step_dt <= 0.0 || !self.step_dt.is_finite() {
            return Err(ModelError::Configuration(format!(
                "step_dt must be positive and finite, got {}",
                self.step_dt
            )));
        }
        if self.fill_intensity <= 0.0 {
            return Err(ModelError::Configuration(format!(
                "fill_intensity must be positive, got {}",
                self.fill_intensity
            )));
        }
        if self.arrival_rate <= 0.0 {
            return Err(ModelError::Configuration(format!(
                "arrival_rate must be positive, got {}",
                self.arrival_rate
            )));
        }
        if self.terminal_penalty < 0.0 || self.running_penalty < 0.0 {
            return Err(ModelError::Configuration(
                "penalty coefficients must be non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of inventory states q_lower..=q_upper.
    pub fn states(&self) -> usize {
        (self.q_upper - self.q_lower + 1) as usize
    }

    /// Number of per-side schedule entries (states - 1).
    pub fn offsets(&self) -> usize {
        self.states() - 1
    }

    /// Inventory value at a state offset (offset 0 is q_upper).
    pub fn inventory_at_offset(&self, offset: usize) -> i64 {
        self.q_upper - offset as i64
    }

    /// One price tick at the configured precision.
    pub fn tick(&self) -> Price {
        Price::tick(self.price_decimals)
    }
}
