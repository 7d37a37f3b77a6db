//! Contains [`grasp`], the outer GRASP driver.
use rand::rngs::StdRng;

use crate::construction::greedy_construction;
use crate::domain::ProblemInstance;
use crate::schedule::Schedule;

use super::ils::ils;
use super::GraspConfig;

/// Runs `config.grasp_iterations()` rounds of (greedy construction, then ILS), keeping the best
/// `(Schedule, total_penalty)` pair seen. Exits early if a round reaches penalty `0.0`, since
/// penalty is never negative. `config.notify_iteration` is invoked once per round, after the
/// round's ILS call, with the 1-based iteration index and the best penalty seen so far.
pub fn grasp(instance: &ProblemInstance, config: &GraspConfig, rng: &mut StdRng) -> (Schedule, f64) {
    let mut best: Option<(Schedule, f64)> = None;

    for iteration in 1..=config.grasp_iterations() {
        let constructed = greedy_construction(instance, config.alpha(), rng);
        let (schedule, penalty) = ils(constructed, instance, config, rng);

        let improves = best.as_ref().map_or(true, |(_, best_penalty)| penalty < *best_penalty);
        if improves {
            best = Some((schedule, penalty));
        }

        let best_penalty_so_far = best.as_ref().map(|(_, p)| *p).unwrap_or(f64::INFINITY);
        config.notify_iteration(iteration, best_penalty_so_far);

        if best_penalty_so_far == 0.0 {
            break;
        }
    }

    best.expect("grasp_iterations must be at least 1")
}
