//! Engine configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use mmq_depth::ModelParameters;

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Depth-model parameters.
    #[serde(default)]
    pub model: ModelConfig,

    /// Ladder shape parameters.
    #[serde(default)]
    pub ladder: LadderConfig,

    /// Liquidity-commitment parameters.
    #[serde(default)]
    pub commitment: CommitmentConfig,
}

impl EngineConfig {
    /// Validate the whole configuration.
    pub fn validate(&self) -> Result<()> {
        self.model
            .to_parameters()
            .validate()
            .map_err(|e| EngineError::Configuration(e.to_string()))?;
        self.ladder.validate()?;
        self.commitment.validate()?;
        Ok(())
    }
}

/// Depth-model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Horizon step count N.
    #[serde(default = "default_horizon_steps")]
    pub horizon_steps: u32,

    /// Per-step duration dt, in years.
    #[serde(default = "default_step_dt")]
    pub step_dt: f64,

    /// Upper inventory bound (inclusive), in integer units.
    #[serde(default = "default_q_upper")]
    pub q_upper: i64,

    /// Lower inventory bound (inclusive), in integer units.
    #[serde(default = "default_q_lower")]
    pub q_lower: i64,

    /// Fill intensity kappa.
    #[serde(default = "default_fill_intensity")]
    pub fill_intensity: f64,

    /// Market-order arrival rate lambda.
    #[serde(default = "default_arrival_rate")]
    pub arrival_rate: f64,

    /// Terminal inventory penalty alpha.
    #[serde(default = "default_terminal_penalty")]
    pub terminal_penalty: f64,

    /// Running inventory penalty phi.
    #[serde(default = "default_running_penalty")]
    pub running_penalty: f64,

    /// Price decimal precision; one tick is 10^-price_decimals.
    #[serde(default = "default_price_decimals")]
    pub price_decimals: u32,

    /// Horizons beyond this step count use the asymptotic closed form
    /// instead of the finite-horizon numerical solve.
    #[serde(default = "default_long_horizon_threshold")]
    pub long_horizon_threshold: u32,
}

impl ModelConfig {
    /// Convert to solver parameters.
    pub fn to_parameters(&self) -> ModelParameters {
        ModelParameters {
            horizon_steps: self.horizon_steps,
            step_dt: self.step_dt,
            q_upper: self.q_upper,
            q_lower: self.q_lower,
            fill_intensity: self.fill_intensity,
            arrival_rate: self.arrival_rate,
            terminal_penalty: self.terminal_penalty,
            running_penalty: self.running_penalty,
            price_decimals: self.price_decimals,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            horizon_steps: default_horizon_steps(),
            step_dt: default_step_dt(),
            q_upper: default_q_upper(),
            q_lower: default_q_lower(),
            fill_intensity: default_fill_intensity(),
            arrival_rate: default_arrival_rate(),
            terminal_penalty: default_terminal_penalty(),
            running_penalty: default_running_penalty(),
            price_decimals: default_price_decimals(),
            long_horizon_threshold: default_long_horizon_threshold(),
        }
    }
}

/// Ladder shape configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderConfig {
    /// Quote levels per side.
    #[serde(default = "default_levels")]
    pub levels: u32,

    /// Price distance between adjacent levels.
    #[serde(default = "default_tick_spacing")]
    pub tick_spacing: Decimal,

    /// Exponential size-shape decay (0 = uniform sizes).
    #[serde(default = "default_shape_decay")]
    pub shape_decay: f64,

    /// Size of level 0.
    #[serde(default = "default_base_size")]
    pub base_size: Decimal,

    /// Hard per-level size cap.
    #[serde(default = "default_max_level_size")]
    pub max_level_size: Decimal,

    /// Decimal precision for emitted sizes.
    #[serde(default = "default_size_decimals")]
    pub size_decimals: u32,
}

impl LadderConfig {
    fn validate(&self) -> Result<()> {
        if self.levels == 0 {
            return Err(EngineError::Configuration(
                "ladder.levels must be at least 1".to_string(),
            ));
        }
        if self.tick_spacing <= Decimal::ZERO {
            return Err(EngineError::Configuration(format!(
                "ladder.tick_spacing must be positive, got {}",
                self.tick_spacing
            )));
        }
        if self.base_size <= Decimal::ZERO {
            return Err(EngineError::Configuration(format!(
                "ladder.base_size must be positive, got {}",
                self.base_size
            )));
        }
        if self.max_level_size < self.base_size {
            return Err(EngineError::Configuration(format!(
                "ladder.max_level_size ({}) must not be below base_size ({})",
                self.max_level_size, self.base_size
            )));
        }
        if self.shape_decay < 0.0 || !self.shape_decay.is_finite() {
            return Err(EngineError::Configuration(format!(
                "ladder.shape_decay must be non-negative and finite, got {}",
                self.shape_decay
            )));
        }
        Ok(())
    }
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            levels: default_levels(),
            tick_spacing: default_tick_spacing(),
            shape_decay: default_shape_decay(),
            base_size: default_base_size(),
            max_level_size: default_max_level_size(),
            size_decimals: default_size_decimals(),
        }
    }
}

/// Liquidity-commitment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitmentConfig {
    /// Committed amount.
    #[serde(default = "default_commitment_amount")]
    pub amount: Decimal,

    /// Commitment fee rate.
    #[serde(default = "default_commitment_fee")]
    pub fee: Decimal,
}

impl CommitmentConfig {
    fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(EngineError::Configuration(format!(
                "commitment.amount must be positive, got {}",
                self.amount
            )));
        }
        if self.fee < Decimal::ZERO {
            return Err(EngineError::Configuration(format!(
                "commitment.fee must be non-negative, got {}",
                self.fee
            )));
        }
        Ok(())
    }
}

impl Default for CommitmentConfig {
    fn default() -> Self {
        Self {
            amount: default_commitment_amount(),
            fee: default_commitment_fee(),
        }
    }
}

fn default_horizon_steps() -> u32 {
    180
}

fn default_step_dt() -> f64 {
    // One minute, in years.
    1.0 / (60.0 * 24.0 * 365.25)
}

fn default_q_upper() -> i64 {
    20
}

fn default_q_lower() -> i64 {
    -20
}

fn default_fill_intensity() -> f64 {
    500.0
}

fn default_arrival_rate() -> f64 {
    5.0
}

fn default_terminal_penalty() -> f64 {
    1e-4
}

fn default_running_penalty() -> f64 {
    5e-6
}

fn default_price_decimals() -> u32 {
    2
}

fn default_long_horizon_threshold() -> u32 {
    1000
}

fn default_levels() -> u32 {
    5
}

fn default_tick_spacing() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

fn default_shape_decay() -> f64 {
    1.0
}

fn default_base_size() -> Decimal {
    Decimal::from(10)
}

fn default_max_level_size() -> Decimal {
    Decimal::from(50)
}

fn default_size_decimals() -> u32 {
    2
}

fn default_commitment_amount() -> Decimal {
    Decimal::from(1000)
}

fn default_commitment_fee() -> Decimal {
    Decimal::new(3, 3) // 0.003
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_are_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: EngineConfig = toml::from_str("").unwrap();
        assert_eq!(config.model.horizon_steps, 180);
        assert_eq!(config.model.q_upper, 20);
        assert_eq!(config.ladder.levels, 5);
        assert_eq!(config.ladder.tick_spacing, dec!(0.01));
        assert_eq!(config.commitment.fee, dec!(0.003));
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: EngineConfig = toml::from_str(
            r#"
            [model]
            horizon_steps = 60
            q_upper = 10
            q_lower = -10

            [ladder]
            levels = 3
            tick_spacing = "0.5"

            [commitment]
            amount = "250"
            "#,
        )
        .unwrap();
        assert_eq!(config.model.horizon_steps, 60);
        assert_eq!(config.model.q_upper, 10);
        // Untouched fields keep their defaults.
        assert_eq!(config.model.fill_intensity, 500.0);
        assert_eq!(config.ladder.levels, 3);
        assert_eq!(config.ladder.tick_spacing, dec!(0.5));
        assert_eq!(config.commitment.amount, dec!(250));
        assert_eq!(config.commitment.fee, dec!(0.003));
    }

    #[test]
    fn test_invalid_ladder_rejected() {
        let mut config = EngineConfig::default();
        config.ladder.levels = 0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.ladder.max_level_size = dec!(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_model_bounds_rejected() {
        let mut config = EngineConfig::default();
        config.model.q_upper = -20;
        config.model.q_lower = 20;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn test_negative_fee_rejected() {
        let mut config = EngineConfig::default();
        config.commitment.fee = dec!(-0.001);
        assert!(config.validate().is_err());
    }
}
