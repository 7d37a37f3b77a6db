//! Contains [`greedy_construction`], the RCL-based greedy constructor that builds an initial
//! [`Schedule`] from scratch.
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::Rng;

use crate::domain::{JobId, ProblemInstance};
use crate::schedule::Schedule;

/// The reference greediness parameter: `alpha = 0` is pure greedy, `alpha = 1` is uniform random.
pub const DEFAULT_ALPHA: f64 = 0.6;

/// `priority(o, s) = (penaltyRate(o) / (processingTime(o) + s)) * (1 / dueTime(o))`, where `s` is
/// the setup cost of appending `o` to the current schedule tail.
///
/// `dueTime = 0` is clamped to `1` before the division: the reference leaves this case undefined,
/// and a due date of zero means the job is tardy from the very first instant regardless, so the
/// clamp only affects which zero-due-date job is prioritized over another.
fn priority(instance: &ProblemInstance, job: JobId, setup: u64) -> f64 {
    let job = instance.job(job);
    let due_time = job.due_time().max(1) as f64;
    let denom = (job.processing_time() + setup) as f64;
    (job.penalty_rate() / denom) * (1.0 / due_time)
}

/// Builds a full permutation of `{0, ..., instance.number_of_jobs() - 1}` using the RCL greedy
/// heuristic described in the priority function above.
///
/// At each step, all not-yet-scheduled jobs are ranked by `priority` (recomputed against the
/// setup cost of following the job most recently appended), the top
/// `max(1, ceil(alpha * remaining))` of them form the Restricted Candidate List, and one is drawn
/// from the RCL uniformly at random via `rng`. `alpha = 0.0` always picks the single best
/// candidate; `alpha = 1.0` picks uniformly among all remaining jobs.
pub fn greedy_construction(instance: &ProblemInstance, alpha: f64, rng: &mut StdRng) -> Schedule {
    let n = instance.number_of_jobs();
    let mut unscheduled: Vec<(JobId, f64)> = (0..n)
        .map(|job| (job, priority(instance, job, instance.initial_setup_time(job))))
        .collect();

    let mut schedule = Vec::with_capacity(n);
    let mut prev_job: Option<JobId> = None;

    while !unscheduled.is_empty() {
        unscheduled = unscheduled
            .into_iter()
            .sorted_by(|a, b| b.1.partial_cmp(&a.1).expect("priorities are finite"))
            .collect_vec();

        let rcl_size = ((alpha * unscheduled.len() as f64).ceil() as usize).max(1);
        let rcl_size = rcl_size.min(unscheduled.len());
        let pick = rng.gen_range(0..rcl_size);

        let (job, _) = unscheduled.remove(pick);
        schedule.push(job);
        prev_job = Some(job);

        if let Some(prev) = prev_job {
            for (candidate, candidate_priority) in unscheduled.iter_mut() {
                *candidate_priority = priority(instance, *candidate, instance.setup_time(prev, *candidate));
            }
        }
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Job;
    use rand::SeedableRng;

    fn instance() -> ProblemInstance {
        ProblemInstance::new(
            vec![
                Job::new(0, 2, 10, 1.0),
                Job::new(1, 3, 10, 1.0),
                Job::new(2, 1, 10, 1.0),
            ],
            vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]],
            vec![1, 1, 1],
        )
    }

    #[test]
    fn produces_valid_permutation() {
        let instance = instance();
        let mut rng = StdRng::seed_from_u64(7);
        let schedule = greedy_construction(&instance, DEFAULT_ALPHA, &mut rng);
        let mut seen = vec![false; 3];
        for &job in &schedule {
            assert!(!seen[job]);
            seen[job] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn pure_greedy_is_deterministic_given_tie_free_priorities() {
        let instance = ProblemInstance::new(
            vec![Job::new(0, 1, 0, 100.0), Job::new(1, 1, 0, 10.0), Job::new(2, 1, 0, 1.0)],
            vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 0, 0]],
            vec![0, 0, 0],
        );
        let mut rng = StdRng::seed_from_u64(1);
        // alpha = 0.0 -> rcl_size always 1, so the single highest-priority job is always chosen:
        // highest penalty rate first, since processing time, setup and clamped due time all tie.
        let schedule = greedy_construction(&instance, 0.0, &mut rng);
        assert_eq!(schedule, vec![0, 1, 2]);
    }

    #[test]
    fn same_seed_same_alpha_reproduces_schedule() {
        let instance = instance();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = greedy_construction(&instance, DEFAULT_ALPHA, &mut rng_a);
        let b = greedy_construction(&instance, DEFAULT_ALPHA, &mut rng_b);
        assert_eq!(a, b);
    }

    #[test]
    fn single_job_instance() {
        let instance = ProblemInstance::new(vec![Job::new(0, 1, 1, 1.0)], vec![vec![0]], vec![0]);
        let mut rng = StdRng::seed_from_u64(0);
        let schedule = greedy_construction(&instance, DEFAULT_ALPHA, &mut rng);
        assert_eq!(schedule, vec![0]);
    }
}
