//! Contains [`rvnd`], the Randomized Variable Neighborhood Descent local search.
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::domain::ProblemInstance;
use crate::neighborhoods::Neighborhood;
use crate::schedule::ScheduleData;

/// Drives `schedule_data` to a local optimum under `neighborhoods`: each round, shuffle the
/// neighborhood order, try each in turn, and restart the round immediately after the first
/// successful move. Returns once a full round (in some order) finds no improving move in any
/// neighborhood.
///
/// `neighborhoods` is a small fixed-size slice (three, in the reference: swap, reinsertion,
/// 2-opt) rather than a `Vec` of function pointers, per the "monomorphic inner loop" guidance —
/// only the *order* of indices is shuffled, not the neighborhoods themselves.
pub fn rvnd(schedule_data: &mut ScheduleData, instance: &ProblemInstance, neighborhoods: &[&dyn Neighborhood], rng: &mut StdRng) {
    let mut order: Vec<usize> = (0..neighborhoods.len()).collect();

    loop {
        order.shuffle(rng);
        let mut improved = false;

        for &idx in &order {
            if neighborhoods[idx].apply_best_improvement(schedule_data, instance) {
                improved = true;
                break;
            }
        }

        if !improved {
            return;
        }
    }
}
