//! The step-driven quoting engine.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use mmq_core::{Ladder, OrderSide, Price, Size};
use mmq_depth::{build_schedule, AsymptoticSchedule, DepthSchedule, DepthSelector, ModelError};
use mmq_quote::{CommitmentSpec, LadderBuilder, LiquidityPegManager};
use mmq_sync::{BookSynchronizer, LiveBook};
use mmq_telemetry::metrics::{
    INSTRUCTIONS_TOTAL, MODEL_FALLBACKS_TOTAL, STALE_SNAPSHOTS_TOTAL, TICKS_TOTAL,
    VENUE_REJECTIONS_TOTAL,
};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::venue::{VenueClient, VenueError};

/// What one tick produced.
#[derive(Debug, Clone)]
pub struct TickReport {
    /// Reference price the ladder was built around.
    pub reference: Price,
    /// The desired ladder for this tick.
    pub ladder: Ladder,
    /// Commitment peg derived from the ladder edges.
    pub peg: Option<CommitmentSpec>,
    /// Whether the live book was diffed and updated. False when the
    /// snapshot was stale and synchronization was skipped.
    pub synchronized: bool,
    /// Instructions emitted to the venue.
    pub emitted: usize,
    /// Instructions the venue rejected (dropped, corrected next tick).
    pub rejected: usize,
}

/// Step-driven quoting engine.
///
/// Construction solves the depth schedule once; each `run_tick` call then
/// reads the venue, builds the desired ladder, diffs it against the live
/// book, and submits one atomic batch.
pub struct QuotingEngine {
    selector: DepthSelector,
    builder: LadderBuilder,
    peg: LiquidityPegManager,
    synchronizer: BookSynchronizer,
}

impl QuotingEngine {
    /// Build the engine from a validated configuration.
    ///
    /// A finite-horizon solve that leaves the numeric domain falls back to
    /// the asymptotic closed form rather than refusing to start; the
    /// fallback is logged and counted.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let params = config.model.to_parameters();

        let schedule: Box<dyn DepthSchedule> =
            match build_schedule(&params, config.model.long_horizon_threshold) {
                Ok(schedule) => schedule,
                Err(ModelError::NumericDomain { step, offset, value }) => {
                    warn!(
                        step,
                        offset,
                        value,
                        "finite-horizon solve left the numeric domain, using asymptotic schedule"
                    );
                    MODEL_FALLBACKS_TOTAL.inc();
                    Box::new(AsymptoticSchedule::build(&params)?)
                }
                Err(e) => return Err(e.into()),
            };

        let tick = params.tick();
        info!(
            horizon_steps = params.horizon_steps,
            states = params.states(),
            levels = config.ladder.levels,
            "quoting engine ready"
        );

        Ok(Self {
            selector: DepthSelector::new(schedule, &params),
            builder: LadderBuilder {
                levels: config.ladder.levels,
                tick_spacing: Price::new(config.ladder.tick_spacing),
                shape_decay: config.ladder.shape_decay,
                base_size: Size::new(config.ladder.base_size),
                max_level_size: Size::new(config.ladder.max_level_size),
                size_decimals: config.ladder.size_decimals,
            },
            peg: LiquidityPegManager::new(
                Size::new(config.commitment.amount),
                config.commitment.fee,
                tick,
            ),
            synchronizer: BookSynchronizer::new(),
        })
    }

    /// Build the desired ladder for a (reference, inventory, step) input.
    pub fn compute_ladder(&self, reference: Price, inventory: Decimal, step: usize) -> Ladder {
        let depth = self.selector.select(inventory, step);
        self.builder.build(depth.bid, depth.ask, reference)
    }

    /// Commitment peg for a ladder.
    pub fn peg_spec(&self, ladder: &Ladder) -> Option<CommitmentSpec> {
        self.peg.derive(ladder)
    }

    /// Diff a ladder against a live-order snapshot.
    pub fn synchronize(
        &self,
        ladder: &Ladder,
        live: &LiveBook,
        prev_reference: Option<Price>,
        reference: Price,
    ) -> mmq_core::InstructionBatch {
        self.synchronizer
            .synchronize(ladder, live, prev_reference, reference)
    }

    /// Run one quoting tick against the venue.
    ///
    /// Reference-price, inventory, and batch-submission failures abort the
    /// tick with an error. A stale live-order snapshot only skips the
    /// synchronization: the ladder and peg are still reported, and the
    /// next tick re-diffs from a fresh snapshot. Per-instruction venue
    /// rejections are dropped and counted, never propagated.
    pub fn run_tick<V: VenueClient>(
        &self,
        venue: &mut V,
        step: usize,
        prev_reference: Option<Price>,
    ) -> Result<TickReport> {
        let reference = venue.reference_price()?;
        let inventory = venue.inventory()?;

        let ladder = self.compute_ladder(reference, inventory, step);
        let peg = self.peg_spec(&ladder);

        let book = match self.read_book(venue) {
            Ok(book) => book,
            Err(e) => {
                STALE_SNAPSHOTS_TOTAL.inc();
                warn!(error = %e, step, "stale order snapshot, skipping synchronization");
                TICKS_TOTAL.inc();
                return Ok(TickReport {
                    reference,
                    ladder,
                    peg,
                    synchronized: false,
                    emitted: 0,
                    rejected: 0,
                });
            }
        };

        let batch = self
            .synchronizer
            .synchronize(&ladder, &book, prev_reference, reference);
        for instruction in batch.instructions() {
            INSTRUCTIONS_TOTAL
                .with_label_values(&[instruction.kind().as_str()])
                .inc();
        }

        let mut rejected = 0;
        if !batch.is_empty() {
            let results = venue.submit_batch(&batch)?;
            for (instruction, result) in batch.instructions().iter().zip(results.iter()) {
                if let mmq_core::InstructionResult::Rejected { reason } = result {
                    rejected += 1;
                    VENUE_REJECTIONS_TOTAL
                        .with_label_values(&[instruction.kind().as_str()])
                        .inc();
                    warn!(
                        kind = instruction.kind().as_str(),
                        side = %instruction.side(),
                        reason = %reason,
                        "instruction rejected, dropping"
                    );
                }
            }
        }

        debug!(
            step,
            inventory = %inventory,
            emitted = batch.len(),
            rejected,
            "tick complete"
        );
        TICKS_TOTAL.inc();

        Ok(TickReport {
            reference,
            ladder,
            peg,
            synchronized: true,
            emitted: batch.len(),
            rejected,
        })
    }

    /// Read both sides of the live book.
    fn read_book<V: VenueClient>(&self, venue: &V) -> std::result::Result<LiveBook, VenueError> {
        Ok(LiveBook::new(
            venue.live_orders(OrderSide::Buy)?,
            venue.live_orders(OrderSide::Sell)?,
        ))
    }
}
