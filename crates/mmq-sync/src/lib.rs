//! Ladder-vs-book diffing.
//!
//! Produces the minimal ordered instruction batch that moves the resting
//! book to the desired ladder without transiently crossing it.

pub mod diff;

pub use diff::{BookSynchronizer, LiveBook};
