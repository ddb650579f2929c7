//! Desired resting state: the quote ladder.
//!
//! A `Ladder` is the full set of price/size levels the engine wants resting
//! on each side of the book for the current tick. Levels are ordered best
//! to worst (index 0 is the touch).

use serde::{Deserialize, Serialize};

use crate::{OrderSide, Price, Size};

/// A single desired quote level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderLevel {
    /// Limit price for this level.
    pub price: Price,
    /// Size for this level.
    pub size: Size,
    /// Side the level belongs to.
    pub side: OrderSide,
}

impl LadderLevel {
    pub fn new(price: Price, size: Size, side: OrderSide) -> Self {
        Self { price, size, side }
    }
}

/// Two-sided quote ladder, best-to-worst per side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ladder {
    /// Bid levels, highest price first.
    pub bids: Vec<LadderLevel>,
    /// Ask levels, lowest price first.
    pub asks: Vec<LadderLevel>,
}

impl Ladder {
    pub fn new(bids: Vec<LadderLevel>, asks: Vec<LadderLevel>) -> Self {
        Self { bids, asks }
    }

    /// Levels wanted on the given side, best first.
    pub fn side(&self, side: OrderSide) -> &[LadderLevel] {
        match side {
            OrderSide::Buy => &self.bids,
            OrderSide::Sell => &self.asks,
        }
    }

    /// Best (highest) bid level, if any.
    pub fn best_bid(&self) -> Option<&LadderLevel> {
        self.bids.first()
    }

    /// Best (lowest) ask level, if any.
    pub fn best_ask(&self) -> Option<&LadderLevel> {
        self.asks.first()
    }

    /// Outermost (lowest) bid level, if any.
    pub fn outermost_bid(&self) -> Option<&LadderLevel> {
        self.bids.last()
    }

    /// Outermost (highest) ask level, if any.
    pub fn outermost_ask(&self) -> Option<&LadderLevel> {
        self.asks.last()
    }

    /// True if the ladder's own touch prices cross (best bid >= best ask).
    ///
    /// Depth clamping keeps both depths at least one tick, so this never
    /// holds for ladders produced by the builder; it is a guard against
    /// hand-built ladders.
    pub fn is_crossed(&self) -> bool {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => bid.price >= ask.price,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn level(price: rust_decimal::Decimal, side: OrderSide) -> LadderLevel {
        LadderLevel::new(Price::new(price), Size::new(dec!(10)), side)
    }

    #[test]
    fn test_accessors_ordered_best_to_worst() {
        let ladder = Ladder::new(
            vec![level(dec!(99), OrderSide::Buy), level(dec!(98), OrderSide::Buy)],
            vec![
                level(dec!(101), OrderSide::Sell),
                level(dec!(102), OrderSide::Sell),
            ],
        );
        assert_eq!(ladder.best_bid().unwrap().price.inner(), dec!(99));
        assert_eq!(ladder.outermost_bid().unwrap().price.inner(), dec!(98));
        assert_eq!(ladder.best_ask().unwrap().price.inner(), dec!(101));
        assert_eq!(ladder.outermost_ask().unwrap().price.inner(), dec!(102));
    }

    #[test]
    fn test_crossed_detection() {
        let ok = Ladder::new(
            vec![level(dec!(99), OrderSide::Buy)],
            vec![level(dec!(101), OrderSide::Sell)],
        );
        assert!(!ok.is_crossed());

        let crossed = Ladder::new(
            vec![level(dec!(101), OrderSide::Buy)],
            vec![level(dec!(100), OrderSide::Sell)],
        );
        assert!(crossed.is_crossed());

        let empty = Ladder::new(vec![], vec![]);
        assert!(!empty.is_crossed());
    }
}
