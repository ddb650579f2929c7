//! Infinite-horizon asymptotic depth approximation.
//!
//! For long horizons the finite solve is replaced by the closed form
//! `1/kappa +- (2q +- 1) * sqrt(phi * e / (lambda * kappa)) / 2`, computed
//! once per inventory unit and independent of the step index.

use std::f64::consts::E;

use mmq_core::Price;

use crate::error::Result;
use crate::params::ModelParameters;
use crate::schedule::{quantize_depth, DepthSchedule};

/// Step-independent depth vectors for a long horizon.
#[derive(Debug, Clone)]
pub struct AsymptoticSchedule {
    bid: Vec<Price>,
    ask: Vec<Price>,
}

impl AsymptoticSchedule {
    /// Compute the closed-form vectors for a parameter set.
    pub fn build(params: &ModelParameters) -> Result<Self> {
        params.validate()?;

        let nq = params.offsets();
        let inv_kappa = 1.0 / params.fill_intensity;
        let slope =
            (params.running_penalty * E / (params.arrival_rate * params.fill_intensity)).sqrt();

        let mut bid = Vec::with_capacity(nq);
        let mut ask = Vec::with_capacity(nq);
        for idx in 0..nq {
            // Bid index idx quotes at inventory q_upper - 1 - idx; ask
            // index idx quotes at inventory q_upper - idx.
            let bid_q = (params.q_upper - 1 - idx as i64) as f64;
            let ask_q = (params.q_upper - idx as i64) as f64;
            bid.push(quantize_depth(
                inv_kappa + (2.0 * bid_q + 1.0) * slope / 2.0,
                params.price_decimals,
            ));
            ask.push(quantize_depth(
                inv_kappa - (2.0 * ask_q - 1.0) * slope / 2.0,
                params.price_decimals,
            ));
        }

        Ok(Self { bid, ask })
    }
}

impl DepthSchedule for AsymptoticSchedule {
    fn bid_depth(&self, index: usize, _step: usize) -> Price {
        self.bid[index]
    }

    fn ask_depth(&self, index: usize, _step: usize) -> Price {
        self.ask[index]
    }

    fn offsets(&self) -> usize {
        self.bid.len()
    }
}
