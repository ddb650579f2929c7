//! Book-update instructions and the atomic per-tick batch.
//!
//! The synchronizer emits one `InstructionBatch` per tick. The batch is
//! ordered: the venue must apply instructions in sequence, so the
//! no-self-cross side ordering is preserved, and it is submitted in a
//! single round-trip so no other participant can observe a half-updated
//! ladder.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ClientOrderId, OrderSide, Price, Size};

/// Amend a resting order in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmendOrder {
    /// Venue order ID of the resting order.
    pub oid: u64,
    /// Side the order rests on.
    pub side: OrderSide,
    /// New limit price.
    pub price: Price,
    /// Signed size adjustment: desired size minus remaining size.
    pub size_delta: Decimal,
}

/// Submit a new resting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOrder {
    /// Client order ID for idempotency.
    pub cloid: ClientOrderId,
    /// Order side.
    pub side: OrderSide,
    /// Limit price.
    pub price: Price,
    /// Order size.
    pub size: Size,
}

impl SubmitOrder {
    /// Create a submission with a fresh client order ID.
    pub fn new(side: OrderSide, price: Price, size: Size) -> Self {
        Self {
            cloid: ClientOrderId::new(),
            side,
            price,
            size,
        }
    }
}

/// Cancel a resting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOrder {
    /// Venue order ID to cancel.
    pub oid: u64,
    /// Side the order rests on.
    pub side: OrderSide,
}

/// One book-update instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    Amend(AmendOrder),
    Submit(SubmitOrder),
    Cancel(CancelOrder),
}

impl Instruction {
    /// Side this instruction touches.
    pub fn side(&self) -> OrderSide {
        match self {
            Self::Amend(a) => a.side,
            Self::Submit(s) => s.side,
            Self::Cancel(c) => c.side,
        }
    }

    /// Instruction kind, for counters and logs.
    pub fn kind(&self) -> InstructionKind {
        match self {
            Self::Amend(_) => InstructionKind::Amend,
            Self::Submit(_) => InstructionKind::Submit,
            Self::Cancel(_) => InstructionKind::Cancel,
        }
    }
}

/// Instruction kind discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    Amend,
    Submit,
    Cancel,
}

impl InstructionKind {
    /// Stable label for metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amend => "amend",
            Self::Submit => "submit",
            Self::Cancel => "cancel",
        }
    }
}

/// Ordered, atomic batch of instructions for one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionBatch {
    instructions: Vec<Instruction>,
}

impl InstructionBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instruction, preserving submission order.
    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Instructions in submission order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    fn count(&self, kind: InstructionKind) -> usize {
        self.instructions.iter().filter(|i| i.kind() == kind).count()
    }

    /// Number of amendments in the batch.
    pub fn amendments(&self) -> usize {
        self.count(InstructionKind::Amend)
    }

    /// Number of submissions in the batch.
    pub fn submissions(&self) -> usize {
        self.count(InstructionKind::Submit)
    }

    /// Number of cancellations in the batch.
    pub fn cancellations(&self) -> usize {
        self.count(InstructionKind::Cancel)
    }
}

/// Per-instruction outcome reported by the venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstructionResult {
    /// Applied by the venue.
    Accepted,
    /// Rejected by the venue (stale oid, venue-side cross guard, ...).
    /// The instruction is dropped; the next tick's re-diff corrects.
    Rejected {
        /// Venue-supplied reason, for logging.
        reason: String,
    },
}

impl InstructionResult {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_batch_counts_by_kind() {
        let mut batch = InstructionBatch::new();
        batch.push(Instruction::Amend(AmendOrder {
            oid: 1,
            side: OrderSide::Buy,
            price: Price::new(dec!(99)),
            size_delta: dec!(-2),
        }));
        batch.push(Instruction::Submit(SubmitOrder::new(
            OrderSide::Sell,
            Price::new(dec!(101)),
            Size::new(dec!(5)),
        )));
        batch.push(Instruction::Cancel(CancelOrder {
            oid: 2,
            side: OrderSide::Sell,
        }));
        batch.push(Instruction::Cancel(CancelOrder {
            oid: 3,
            side: OrderSide::Sell,
        }));

        assert_eq!(batch.len(), 4);
        assert_eq!(batch.amendments(), 1);
        assert_eq!(batch.submissions(), 1);
        assert_eq!(batch.cancellations(), 2);
    }

    #[test]
    fn test_batch_preserves_order() {
        let mut batch = InstructionBatch::new();
        batch.push(Instruction::Cancel(CancelOrder {
            oid: 9,
            side: OrderSide::Buy,
        }));
        batch.push(Instruction::Submit(SubmitOrder::new(
            OrderSide::Buy,
            Price::new(dec!(98)),
            Size::new(dec!(1)),
        )));

        let kinds: Vec<_> = batch.instructions().iter().map(|i| i.kind()).collect();
        assert_eq!(kinds, vec![InstructionKind::Cancel, InstructionKind::Submit]);
    }

    #[test]
    fn test_instruction_result_rejection() {
        let ok = InstructionResult::Accepted;
        let no = InstructionResult::rejected("stale oid");
        assert!(!ok.is_rejected());
        assert!(no.is_rejected());
    }
}
