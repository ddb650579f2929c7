//! Ladder construction and liquidity-commitment pegs.
//!
//! `LadderBuilder` expands one bid/ask depth pair into a multi-level,
//! exponentially-sized ladder per side; `LiquidityPegManager` derives the
//! commitment order's peg offsets from the ladder's outer edges.

pub mod builder;
pub mod peg;

pub use builder::LadderBuilder;
pub use peg::{CommitmentSpec, LiquidityPegManager, PegReference, PegSpec};
