//! Contains the [`Reinsertion`] (block-shift) neighborhood: remove a contiguous block of jobs and
//! reinsert it elsewhere in the schedule.
use crate::domain::ProblemInstance;
use crate::schedule::ScheduleData;

use super::{evaluate_candidate, Neighborhood};

/// The reference block-length cap for [`Reinsertion`].
pub const DEFAULT_MAX_BLOCK_LEN: usize = 10;

/// For each block length `l` in `1..=max_block_len`, each starting position `i` with
/// `i + l <= N`, and each insertion position `j` with `j + l <= N` not overlapping the block's
/// own span, removes the block `[i, i+l)` and reinserts it starting at the adjusted position.
/// `l = 1` is single-job reinsertion.
pub struct Reinsertion {
    max_block_len: usize,
}

impl Reinsertion {
    /// Creates a [`Reinsertion`] neighborhood with the given block-length cap.
    pub fn new(max_block_len: usize) -> Reinsertion {
        Reinsertion { max_block_len }
    }
}

impl Default for Reinsertion {
    fn default() -> Self {
        Reinsertion::new(DEFAULT_MAX_BLOCK_LEN)
    }
}

impl Neighborhood for Reinsertion {
    fn apply_best_improvement(&self, schedule_data: &mut ScheduleData, instance: &ProblemInstance) -> bool {
        let n = schedule_data.schedule().len();
        debug_assert!(schedule_data.is_valid_permutation(n));
        let current_penalty = schedule_data.total_penalty();
        let max_len = self.max_block_len.min(n);

        let mut best: Option<ScheduleData> = None;

        for len in 1..=max_len {
            if len > n {
                break;
            }
            for i in 0..=(n - len) {
                for j in 0..=(n - len) {
                    if j >= i && j <= i + len - 1 {
                        continue; // overlaps the block's own span
                    }

                    let mut candidate_schedule = schedule_data.schedule().clone();
                    let block: Vec<usize> = candidate_schedule.drain(i..i + len).collect();
                    let effective = if j > i { j - len } else { j };
                    candidate_schedule.splice(effective..effective, block);

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
        "reinsertion"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighborhoods::tests::instance_4_jobs;
    use crate::schedule::evaluate;

    #[test]
    fn single_job_reinsertion_improves() {
        let instance = instance_4_jobs();
        let mut data = ScheduleData::new(vec![2, 0, 3, 1]);
        evaluate(&mut data, &instance);
        let before = data.total_penalty();

        let reinsertion = Reinsertion::new(1);
        let improved = reinsertion.apply_best_improvement(&mut data, &instance);

        if improved {
            assert!(data.total_penalty() < before);
        }
        assert!(data.is_valid_permutation(4));
    }

    #[test]
    fn block_length_never_exceeds_schedule_length() {
        let instance = instance_4_jobs();
        let mut data = ScheduleData::new(vec![0, 1, 2, 3]);
        evaluate(&mut data, &instance);

        let reinsertion = Reinsertion::new(10);
        // Must not panic despite max_block_len > n.
        reinsertion.apply_best_improvement(&mut data, &instance);
        assert!(data.is_valid_permutation(4));
    }

    #[test]
    fn reaches_fixed_point() {
        let instance = instance_4_jobs();
        let mut data = ScheduleData::new(vec![2, 0, 3, 1]);
        evaluate(&mut data, &instance);
        let reinsertion = Reinsertion::default();
        while reinsertion.apply_best_improvement(&mut data, &instance) {}
        let before = data.clone();
        assert!(!reinsertion.apply_best_improvement(&mut data, &instance));
        assert_eq!(data, before);
    }
}
