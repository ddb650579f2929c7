//! Ladder construction from a depth pair.
//!
//! Level prices step outward from the quoted depth at the tick spacing.
//! Level sizes follow an exponential cumulative-mass curve: the per-level
//! size is the consecutive difference of `exp(decay * i * spacing)`,
//! normalized so level 0 carries the base unit size, then clamped
//! elementwise to the maximum level size. The clamp never redistributes
//! the excess to other levels.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use mmq_core::{Ladder, LadderLevel, OrderSide, Price, Size};

/// Expands a (bid_depth, ask_depth) pair into a two-sided ladder.
#[derive(Debug, Clone)]
pub struct LadderBuilder {
    /// Levels per side.
    pub levels: u32,
    /// Price distance between adjacent levels.
    pub tick_spacing: Price,
    /// Exponential size-shape decay (0 = uniform sizes).
    pub shape_decay: f64,
    /// Size of level 0.
    pub base_size: Size,
    /// Hard per-level size cap.
    pub max_level_size: Size,
    /// Decimal precision for emitted sizes.
    pub size_decimals: u32,
}

impl LadderBuilder {
    /// Build the ladder around a reference price.
    ///
    /// Bid level i rests at `reference - bid_depth - i * spacing`, ask
    /// level i at `reference + ask_depth + i * spacing`; both sides are
    /// returned best-to-worst.
    pub fn build(&self, bid_depth: Price, ask_depth: Price, reference: Price) -> Ladder {
        let sizes = self.level_sizes();

        let mut bids = Vec::with_capacity(self.levels as usize);
        let mut asks = Vec::with_capacity(self.levels as usize);
        for (i, size) in sizes.into_iter().enumerate() {
            let outward = self.tick_spacing * Decimal::from(i as u64);
            bids.push(LadderLevel::new(
                reference - bid_depth - outward,
                size,
                OrderSide::Buy,
            ));
            asks.push(LadderLevel::new(
                reference + ask_depth + outward,
                size,
                OrderSide::Sell,
            ));
        }

        Ladder::new(bids, asks)
    }

    /// Per-level sizes, best to worst.
    ///
    /// Monotonically non-decreasing for positive decay; uniform at the
    /// base size for zero decay.
    fn level_sizes(&self) -> Vec<Size> {
        let spacing = self.tick_spacing.inner().to_f64().unwrap_or(0.0);
        let cumulative: Vec<f64> = (0..=self.levels)
            .map(|i| (self.shape_decay * i as f64 * spacing).exp())
            .collect();
        let first = cumulative[1] - cumulative[0];

        (0..self.levels as usize)
            .map(|i| {
                // Zero decay collapses every difference to zero; the
                // normalized shape is then uniform.
                let ratio = if first > 0.0 {
                    (cumulative[i + 1] - cumulative[i]) / first
                } else {
                    1.0
                };
                let scaled = self.base_size * Decimal::from_f64_retain(ratio).unwrap_or(Decimal::ONE);
                scaled.quantize(self.size_decimals).clamp_max(self.max_level_size)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn scenario_b_builder() -> LadderBuilder {
        LadderBuilder {
            levels: 5,
            tick_spacing: Price::new(dec!(1)),
            shape_decay: 1.0,
            base_size: Size::new(dec!(10)),
            max_level_size: Size::new(dec!(50)),
            size_decimals: 2,
        }
    }

    #[test]
    fn test_scenario_b_prices() {
        // L=5, spacing=1, base=10, decay=1, max=50, both depths 1.
        let builder = scenario_b_builder();
        let ladder = builder.build(
            Price::new(dec!(1)),
            Price::new(dec!(1)),
            Price::new(dec!(1000)),
        );

        // Level 0 price equals reference -/+ 1.
        assert_eq!(ladder.bids[0].price.inner(), dec!(999));
        assert_eq!(ladder.asks[0].price.inner(), dec!(1001));
        // Outward at the tick spacing.
        assert_eq!(ladder.bids[4].price.inner(), dec!(995));
        assert_eq!(ladder.asks[4].price.inner(), dec!(1005));
    }

    #[test]
    fn test_scenario_b_sizes_increase_until_clamp() {
        let builder = scenario_b_builder();
        let ladder = builder.build(
            Price::new(dec!(1)),
            Price::new(dec!(1)),
            Price::new(dec!(1000)),
        );

        let sizes: Vec<_> = ladder.bids.iter().map(|l| l.size.inner()).collect();
        // 10, 10e, then clamped: 10e^2 = 73.89 > 50.
        assert_eq!(sizes[0], dec!(10));
        assert_eq!(sizes[1], dec!(27.18));
        assert_eq!(sizes[2], dec!(50));
        assert_eq!(sizes[3], dec!(50));
        assert_eq!(sizes[4], dec!(50));

        // Strictly increasing until the clamp is hit.
        assert!(sizes[0] < sizes[1]);
        assert!(sizes[1] < sizes[2]);
    }

    #[test]
    fn test_no_size_exceeds_maximum() {
        let builder = LadderBuilder {
            levels: 8,
            shape_decay: 2.5,
            ..scenario_b_builder()
        };
        let ladder = builder.build(
            Price::new(dec!(0.5)),
            Price::new(dec!(0.5)),
            Price::new(dec!(100)),
        );
        for level in ladder.bids.iter().chain(ladder.asks.iter()) {
            assert!(level.size <= builder.max_level_size);
        }
    }

    #[test]
    fn test_zero_decay_uniform_sizes() {
        let builder = LadderBuilder {
            shape_decay: 0.0,
            ..scenario_b_builder()
        };
        let ladder = builder.build(
            Price::new(dec!(1)),
            Price::new(dec!(1)),
            Price::new(dec!(1000)),
        );
        for level in ladder.bids.iter().chain(ladder.asks.iter()) {
            assert_eq!(level.size.inner(), dec!(10));
        }
    }

    #[test]
    fn test_asymmetric_depths() {
        let builder = scenario_b_builder();
        let ladder = builder.build(
            Price::new(dec!(0.5)),
            Price::new(dec!(3)),
            Price::new(dec!(200)),
        );
        assert_eq!(ladder.bids[0].price.inner(), dec!(199.5));
        assert_eq!(ladder.asks[0].price.inner(), dec!(203));
        assert!(!ladder.is_crossed());
    }

    #[test]
    fn test_sides_ordered_best_to_worst() {
        let builder = scenario_b_builder();
        let ladder = builder.build(
            Price::new(dec!(1)),
            Price::new(dec!(1)),
            Price::new(dec!(1000)),
        );
        for w in ladder.bids.windows(2) {
            assert!(w[0].price > w[1].price);
        }
        for w in ladder.asks.windows(2) {
            assert!(w[0].price < w[1].price);
        }
    }
}
