//! Inventory-to-depth schedules.
//!
//! Solves the inventory-control quoting problem into a schedule mapping
//! (inventory, step) to a bid/ask depth pair:
//! - `finite`: finite-horizon numerical solve (matrix exponential over the
//!   inventory birth-death generator)
//! - `asymptotic`: infinite-horizon closed form, used for long horizons
//!   where the per-step matrix exponential is costly and numerically
//!   fragile
//! - `selector`: boundary-clamped lookup from the schedule
//!
//! Both solvers implement the `DepthSchedule` trait; the horizon-length
//! policy in `build_schedule` picks one at construction time.

pub mod asymptotic;
pub mod error;
pub mod finite;
pub mod params;
pub mod schedule;
pub mod selector;

pub use asymptotic::AsymptoticSchedule;
pub use error::{ModelError, Result};
pub use finite::FiniteHorizonSchedule;
pub use params::ModelParameters;
pub use schedule::{build_schedule, DepthPair, DepthSchedule};
pub use selector::DepthSelector;
