//! Contains the [`Swap`] neighborhood: exchange the jobs at two positions.
use crate::domain::ProblemInstance;
use crate::schedule::ScheduleData;

use super::{evaluate_candidate, Neighborhood};

/// For each unordered pair of positions `(i, j)` with `i < j`, swaps the jobs at those positions.
/// `N * (N-1) / 2` candidates are examined.
pub struct Swap;

impl Neighborhood for Swap {
    fn apply_best_improvement(&self, schedule_data: &mut ScheduleData, instance: &ProblemInstance) -> bool {
        let n = schedule_data.schedule().len();
        debug_assert!(schedule_data.is_valid_permutation(n));
        let current_penalty = schedule_data.total_penalty();

        let mut best: Option<ScheduleData> = None;

        for i in 0..n.saturating_sub(1) {
            for j in (i + 1)..n {
                let mut candidate_schedule = schedule_data.schedule().clone();
                candidate_schedule.swap(i, j);
                let candidate = evaluate_candidate(candidate_schedule, instance);

                let improves_current = candidate.total_penalty() < current_penalty;
                let improves_best = best
                    .as_ref()
                    .map_or(true, |b| candidate.total_penalty() < b.total_penalty());

                if improves_current && improves_best {
                    best = Some(candidate);
                }
            }
        }

        match best {
            Some(candidate) => {
                *schedule_data = candidate;
                debug_assert!(schedule_data.is_valid_permutation(n));
                true
            }
            None => false,
        }
    }

    fn name(&self) -> &'static str {
        "swap"
    }
}
