//! Liquidity-commitment peg derivation.
//!
//! The commitment order sits just outside the quoted ladder: one tick
//! beyond the outermost level on each side, expressed as an offset
//! relative to the ladder's own touch so the venue re-prices it with the
//! ladder. Recomputed and re-submitted as an amendment every tick.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use mmq_core::{Ladder, Price, Size};

/// Reference point a peg offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PegReference {
    /// The ladder's best bid.
    BestBid,
    /// The ladder's best ask.
    BestAsk,
}

/// A relative price specification: reference point plus an offset in the
/// passive direction (below the bid reference, above the ask reference).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PegSpec {
    pub reference: PegReference,
    pub offset: Price,
}

/// Commitment order specification for one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentSpec {
    /// Committed amount.
    pub amount: Size,
    /// Commitment fee rate.
    pub fee: Decimal,
    /// Buy-side peg.
    pub buy: PegSpec,
    /// Sell-side peg.
    pub sell: PegSpec,
}

/// Derives the commitment peg from the current ladder.
#[derive(Debug, Clone)]
pub struct LiquidityPegManager {
    amount: Size,
    fee: Decimal,
    tick: Price,
}

impl LiquidityPegManager {
    pub fn new(amount: Size, fee: Decimal, tick: Price) -> Self {
        Self { amount, fee, tick }
    }

    /// Derive the peg spec from the ladder's outer edges.
    ///
    /// Buy peg: one tick below the outermost bid, as an offset below the
    /// best bid. Sell peg symmetric above the best ask. Returns `None`
    /// when either side of the ladder is empty.
    pub fn derive(&self, ladder: &Ladder) -> Option<CommitmentSpec> {
        let best_bid = ladder.best_bid()?.price;
        let outer_bid = ladder.outermost_bid()?.price;
        let best_ask = ladder.best_ask()?.price;
        let outer_ask = ladder.outermost_ask()?.price;

        Some(CommitmentSpec {
            amount: self.amount,
            fee: self.fee,
            buy: PegSpec {
                reference: PegReference::BestBid,
                offset: best_bid - (outer_bid - self.tick),
            },
            sell: PegSpec {
                reference: PegReference::BestAsk,
                offset: (outer_ask + self.tick) - best_ask,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mmq_core::{LadderLevel, OrderSide};
    use rust_decimal_macros::dec;

    fn ladder() -> Ladder {
        let level = |price, side| LadderLevel::new(Price::new(price), Size::new(dec!(10)), side);
        Ladder::new(
            vec![
                level(dec!(99), OrderSide::Buy),
                level(dec!(98), OrderSide::Buy),
                level(dec!(97), OrderSide::Buy),
            ],
            vec![
                level(dec!(101), OrderSide::Sell),
                level(dec!(102), OrderSide::Sell),
                level(dec!(103), OrderSide::Sell),
            ],
        )
    }

    #[test]
    fn test_peg_sits_one_tick_outside_ladder() {
        let manager =
            LiquidityPegManager::new(Size::new(dec!(1000)), dec!(0.003), Price::new(dec!(0.01)));
        let spec = manager.derive(&ladder()).unwrap();

        // Buy target 97 - 0.01 = 96.99, offset below best bid 99.
        assert_eq!(spec.buy.reference, PegReference::BestBid);
        assert_eq!(spec.buy.offset.inner(), dec!(2.01));
        // Sell target 103 + 0.01 = 103.01, offset above best ask 101.
        assert_eq!(spec.sell.reference, PegReference::BestAsk);
        assert_eq!(spec.sell.offset.inner(), dec!(2.01));

        assert_eq!(spec.amount.inner(), dec!(1000));
        assert_eq!(spec.fee, dec!(0.003));
    }

    #[test]
    fn test_single_level_ladder_offsets_are_one_tick() {
        let level = |price, side| LadderLevel::new(Price::new(price), Size::new(dec!(5)), side);
        let thin = Ladder::new(
            vec![level(dec!(99), OrderSide::Buy)],
            vec![level(dec!(101), OrderSide::Sell)],
        );
        let manager =
            LiquidityPegManager::new(Size::new(dec!(100)), dec!(0.001), Price::new(dec!(0.5)));
        let spec = manager.derive(&thin).unwrap();
        // Best and outermost coincide, so the offset is exactly one tick.
        assert_eq!(spec.buy.offset.inner(), dec!(0.5));
        assert_eq!(spec.sell.offset.inner(), dec!(0.5));
    }

    #[test]
    fn test_empty_side_yields_none() {
        let manager =
            LiquidityPegManager::new(Size::new(dec!(100)), dec!(0.001), Price::new(dec!(0.01)));
        assert!(manager.derive(&Ladder::new(vec![], vec![])).is_none());
    }
}
