//! Core domain types for the mmq quoting engine.
//!
//! This crate provides the types shared by the depth model, ladder
//! builder, book synchronizer, and engine facade:
//! - `Price`, `Size`: precision-safe decimal wrappers
//! - `OrderSide`, `ClientOrderId`, `LiveOrder`: order vocabulary
//! - `Ladder`, `LadderLevel`: the desired resting state per side
//! - `Instruction`, `InstructionBatch`: the atomic per-tick update

pub mod decimal;
pub mod instruction;
pub mod ladder;
pub mod order;

pub use decimal::{Price, Size};
pub use instruction::{
    AmendOrder, CancelOrder, Instruction, InstructionBatch, InstructionKind, InstructionResult,
    SubmitOrder,
};
pub use ladder::{Ladder, LadderLevel};
pub use order::{ClientOrderId, LiveOrder, OrderSide};
