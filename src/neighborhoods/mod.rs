//! This module contains the [`Neighborhood`] trait and its three move families: [`Swap`],
//! [`Reinsertion`] and [`TwoOpt`]. Each implements a **best-improvement** policy: scan every
//! legal move in the family, remember the single move with the lowest resulting total penalty
//! (provided it strictly improves on the current total), apply it in place, and report whether a
//! move was applied.
//!
//! Candidate evaluation re-runs [`evaluate`] on a scratch [`ScheduleData`] rather than cloning and
//! rescoring the whole iterator-of-neighbors a generic local-search framework would produce;
//! sequence-dependent setup scheduling re-evaluates every candidate in `O(N)` anyway, so this
//! keeps candidate generation and candidate scoring in the same place without threading an
//! iterator lifetime through the caller.

pub mod reinsertion;
mod swap;
pub mod two_opt;

pub use reinsertion::Reinsertion;
pub use swap::Swap;
pub use two_opt::TwoOpt;

use crate::domain::ProblemInstance;
use crate::schedule::{evaluate, ScheduleData};

/// A move family ("neighborhood") explored by [`rvnd`][crate::search::rvnd::rvnd].
///
/// Implementors must examine every legal move, keep the best-improving one under a strict
/// `<` comparison against `schedule_data`'s current total penalty, apply it in place, and return
/// `true` — or return `false` and leave `schedule_data` untouched if no move improves it.
pub trait Neighborhood: Send + Sync {
    /// Scans the whole move family and applies the single best-improving move, if any.
    /// Returns `true` iff a move was applied.
    fn apply_best_improvement(&self, schedule_data: &mut ScheduleData, instance: &ProblemInstance) -> bool;

    /// A short name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Evaluates `schedule` against `instance` as a scratch [`ScheduleData`], for scoring a single
/// candidate move without disturbing the caller's current state.
fn evaluate_candidate(schedule: Vec<usize>, instance: &ProblemInstance) -> ScheduleData {
    let mut candidate = ScheduleData::new(schedule);
    evaluate(&mut candidate, instance);
    candidate
}
