//! Contains [`ils`], the Iterated Local Search driver alternating RVND and Double-Bridge.
use rand::rngs::StdRng;

use crate::domain::ProblemInstance;
use crate::neighborhoods::{Neighborhood, Reinsertion, Swap, TwoOpt};
use crate::schedule::{evaluate, Schedule, ScheduleData};

use super::perturbation::double_bridge;
use super::rvnd::rvnd;
use super::GraspConfig;

/// Runs ILS from `initial_schedule`: evaluate, then alternate RVND and unconditional Double-Bridge
/// perturbation until `4 * N` consecutive rounds pass without a strict improvement to the best
/// schedule seen. Returns the best `(Schedule, total_penalty)` pair found.
///
/// `current` always advances to the perturbed neighbor of the last RVND fixed point, whether or
/// not that fixed point improved on `best` — only `best` uses a strict-improvement acceptance
/// rule. This keeps the search exploring even through a run of non-improving rounds, relying on
/// the no-improvement cap (rather than stagnation detection) to terminate.
pub fn ils(initial_schedule: Schedule, instance: &ProblemInstance, config: &GraspConfig, rng: &mut StdRng) -> (Schedule, f64) {
    let n = initial_schedule.len();
    let max_no_improvement = 4 * n as u32;

    let swap = Swap;
    let reinsertion = Reinsertion::new(config.reinsertion_max_block_len());
    let two_opt = TwoOpt::new(config.two_opt_max_segment_len());
    let neighborhoods: [&dyn Neighborhood; 3] = [&swap, &reinsertion, &two_opt];

    let mut current = ScheduleData::new(initial_schedule);
    evaluate(&mut current, instance);
    let mut best = current.clone();

    let mut no_improvement = 0u32;
    while no_improvement < max_no_improvement {
        rvnd(&mut current, instance, &neighborhoods, rng);

        if current.total_penalty() < best.total_penalty() {
            best = current.clone();
            no_improvement = 0;
        } else {
            no_improvement += 1;
        }

        double_bridge(current.schedule_mut(), rng);
        evaluate(&mut current, instance);
    }

    (best.schedule().clone(), best.total_penalty())
}
