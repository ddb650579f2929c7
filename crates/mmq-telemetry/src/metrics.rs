//! Prometheus metrics for the quoting engine.
//!
//! # Panics
//!
//! Metric registration uses `unwrap()` intentionally. If registration
//! fails it indicates a fatal configuration error (e.g., duplicate metric
//! names) that should crash at startup rather than fail silently. These
//! panics only occur during static initialization, never at runtime.

use once_cell::sync::Lazy;
use prometheus::{register_counter, register_counter_vec, Counter, CounterVec};

/// Completed quoting ticks.
pub static TICKS_TOTAL: Lazy<Counter> = Lazy::new(|| {
    register_counter!("mmq_ticks_total", "Total completed quoting ticks").unwrap()
});

/// Instructions emitted, by kind (amend/submit/cancel).
pub static INSTRUCTIONS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "mmq_instructions_total",
        "Total book instructions emitted",
        &["kind"]
    )
    .unwrap()
});

/// Instructions rejected by the venue and dropped, by kind.
///
/// Rejections are recovered locally: the instruction is dropped and the
/// next tick's full re-diff corrects the book.
pub static VENUE_REJECTIONS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "mmq_venue_rejections_total",
        "Total instructions rejected by the venue and dropped",
        &["kind"]
    )
    .unwrap()
});

/// Ticks where the live-order snapshot could not be read and
/// synchronization was skipped.
pub static STALE_SNAPSHOTS_TOTAL: Lazy<Counter> = Lazy::new(|| {
    register_counter!(
        "mmq_stale_snapshots_total",
        "Total ticks with an unreadable live-order snapshot (sync skipped)"
    )
    .unwrap()
});

/// Finite-horizon solves that fell back to the asymptotic schedule.
pub static MODEL_FALLBACKS_TOTAL: Lazy<Counter> = Lazy::new(|| {
    register_counter!(
        "mmq_model_fallbacks_total",
        "Total finite-horizon solves replaced by the asymptotic schedule"
    )
    .unwrap()
});
