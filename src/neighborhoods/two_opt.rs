//! Contains the [`TwoOpt`] neighborhood: reverse a bounded-length segment of the schedule.
use crate::domain::ProblemInstance;
use crate::schedule::ScheduleData;

use super::{evaluate_candidate, Neighborhood};

/// The reference segment-length cap for [`TwoOpt`].
pub const DEFAULT_MAX_SEGMENT_LEN: usize = 10;

/// For each position `i` in `0..N-1` and each `j` in `i+1 ..= min(N-1, i + max_segment_len - 1)`,
/// reverses the segment `[i, j]`. Bounding `j - i` keeps each scan `O(N)` rather than `O(N^2)`.
pub struct TwoOpt {
    max_segment_len: usize,
}

impl TwoOpt {
    /// Creates a [`TwoOpt`] neighborhood with the given segment-length cap.
    pub fn new(max_segment_len: usize) -> TwoOpt {
        TwoOpt { max_segment_len }
    }
}

impl Default for TwoOpt {
    fn default() -> Self {
        TwoOpt::new(DEFAULT_MAX_SEGMENT_LEN)
    }
}

impl Neighborhood for TwoOpt {
    fn apply_best_improvement(&self, schedule_data: &mut ScheduleData, instance: &ProblemInstance) -> bool {
        let n = schedule_data.schedule().len();
        debug_assert!(schedule_data.is_valid_permutation(n));
        let current_penalty = schedule_data.total_penalty();

        let mut best: Option<ScheduleData> = None;

        for i in 0..n.saturating_sub(1) {
            let j_max = i.saturating_add(self.max_segment_len.saturating_sub(1)).min(n - 1);
            for j in (i + 1)..=j_max {
                let mut candidate_schedule = schedule_data.schedule().clone();
                candidate_schedule[i..=j].reverse();
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
        "two_opt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighborhoods::tests::instance_4_jobs;
    use crate::schedule::evaluate;

    #[test]
    fn applies_best_improving_reversal() {
        let instance = instance_4_jobs();
        let mut data = ScheduleData::new(vec![2, 0, 1, 3]);
        evaluate(&mut data, &instance);
        let before = data.total_penalty();

        let improved = TwoOpt::default().apply_best_improvement(&mut data, &instance);

        if improved {
            assert!(data.total_penalty() < before);
        }
        assert!(data.is_valid_permutation(4));
    }

    #[test]
    fn segment_cap_limits_candidate_span() {
        let instance = instance_4_jobs();
        let mut data = ScheduleData::new(vec![0, 1, 2, 3]);
        evaluate(&mut data, &instance);

        // With a cap of 1, j_max == i, so the range i+1..=j_max is empty and no move is possible.
        let two_opt = TwoOpt::new(1);
        assert!(!two_opt.apply_best_improvement(&mut data, &instance));
    }

    #[test]
    fn zero_segment_cap_does_not_panic() {
        let instance = instance_4_jobs();
        let mut data = ScheduleData::new(vec![0, 1, 2, 3]);
        evaluate(&mut data, &instance);

        // With a cap of 0, j_max == i, so the range i+1..=j_max is empty and no move is possible.
        let two_opt = TwoOpt::new(0);
        assert!(!two_opt.apply_best_improvement(&mut data, &instance));
    }

    #[test]
    fn reaches_fixed_point() {
        let instance = instance_4_jobs();
        let mut data = ScheduleData::new(vec![2, 0, 1, 3]);
        evaluate(&mut data, &instance);
        let two_opt = TwoOpt::default();
        while two_opt.apply_best_improvement(&mut data, &instance) {}

        let before = data.clone();
        assert!(!two_opt.apply_best_improvement(&mut data, &instance));
        assert_eq!(data, before);
    }
}
