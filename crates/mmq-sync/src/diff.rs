//! Pairwise ladder diff with explicit cross-side ordering.
//!
//! Per side, level i of the ladder is matched with the i-th best resting
//! order: identical levels emit nothing, changed levels emit one
//! amendment, a longer ladder emits submissions, surplus resting orders
//! are cancelled worst price first. Each side is touched exactly once per
//! tick.
//!
//! Cross-side ordering is an explicit two-element plan computed from the
//! reference price delta: when price fell the buy side retreats first,
//! when it rose (or there is no prior price) the sell side retreats
//! first. Walking the plan in order guarantees the amended ladder never
//! crosses itself mid-batch.

use tracing::debug;

use mmq_core::{
    AmendOrder, CancelOrder, Instruction, InstructionBatch, Ladder, LadderLevel, LiveOrder,
    OrderSide, Price, SubmitOrder,
};

/// Live-order snapshot for one tick, both sides sorted best-first.
#[derive(Debug, Clone, Default)]
pub struct LiveBook {
    /// Resting buy orders, highest price first.
    pub bids: Vec<LiveOrder>,
    /// Resting sell orders, lowest price first.
    pub asks: Vec<LiveOrder>,
}

impl LiveBook {
    pub fn new(bids: Vec<LiveOrder>, asks: Vec<LiveOrder>) -> Self {
        Self { bids, asks }
    }

    fn side(&self, side: OrderSide) -> &[LiveOrder] {
        match side {
            OrderSide::Buy => &self.bids,
            OrderSide::Sell => &self.asks,
        }
    }
}

/// Stateless ladder-vs-book differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookSynchronizer;

impl BookSynchronizer {
    pub fn new() -> Self {
        Self
    }

    /// The ordered side plan `[retreating, advancing]` for a tick.
    ///
    /// A falling reference price moves the buy side away from the market,
    /// so buys are amended first; otherwise (rise, unchanged, or no prior
    /// price) sells go first.
    pub fn side_plan(prev_reference: Option<Price>, reference: Price) -> [OrderSide; 2] {
        match prev_reference {
            Some(prev) if reference < prev => [OrderSide::Buy, OrderSide::Sell],
            _ => [OrderSide::Sell, OrderSide::Buy],
        }
    }

    /// Diff the desired ladder against the live book into one atomic
    /// instruction batch.
    pub fn synchronize(
        &self,
        ladder: &Ladder,
        live: &LiveBook,
        prev_reference: Option<Price>,
        reference: Price,
    ) -> InstructionBatch {
        let mut batch = InstructionBatch::new();
        for side in Self::side_plan(prev_reference, reference) {
            diff_side(&mut batch, ladder.side(side), live.side(side), side);
        }

        debug!(
            amendments = batch.amendments(),
            submissions = batch.submissions(),
            cancellations = batch.cancellations(),
            reference = %reference,
            "ladder diff complete"
        );
        batch
    }
}

/// Diff one side, appending instructions in emission order.
fn diff_side(
    batch: &mut InstructionBatch,
    desired: &[LadderLevel],
    live: &[LiveOrder],
    side: OrderSide,
) {
    let paired = desired.len().min(live.len());

    for (level, order) in desired.iter().zip(live.iter()).take(paired) {
        if order.price == level.price && order.remaining == level.size {
            continue;
        }
        batch.push(Instruction::Amend(AmendOrder {
            oid: order.oid,
            side,
            price: level.price,
            size_delta: level.size.delta_from(order.remaining),
        }));
    }

    for level in &desired[paired..] {
        batch.push(Instruction::Submit(SubmitOrder::new(
            side,
            level.price,
            level.size,
        )));
    }

    // Surplus resting orders leave worst price first.
    for order in live[paired..].iter().rev() {
        batch.push(Instruction::Cancel(CancelOrder {
            oid: order.oid,
            side,
        }));
    }
}
