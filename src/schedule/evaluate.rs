//! Contains the [`evaluate`] function, the single forward pass that turns a [`Schedule`] into a
//! fully populated [`ScheduleData`]. Every neighborhood move and every perturbation is followed by
//! a call to this function before the cached fields of its [`ScheduleData`] are trusted again.
use crate::domain::ProblemInstance;

use super::data::ScheduleData;

/// Walks the schedule left to right, accumulating machine time and tardiness penalty, and
/// populates `arrival_times`, `penalties` and `total_penalty` on `schedule_data`. Runs in `O(N)`.
///
/// No incremental delta-evaluation is attempted here: every candidate move is scored by a full
/// re-evaluation of a scratch copy (see [`crate::neighborhoods`]), favoring correctness over the
/// `O(N) -> O(1)` optimization that earlier revisions of this solver's ancestry attempted and
/// abandoned over tardiness-onset boundary bugs.
pub fn evaluate(schedule_data: &mut ScheduleData, instance: &ProblemInstance) {
    let n = schedule_data.schedule().len();
    debug_assert!(schedule_data.is_valid_permutation(n));
    let mut arrival_times = Vec::with_capacity(n);
    let mut penalties = Vec::with_capacity(n);
    let mut total_penalty = 0.0;

    let mut current_time: u64 = 0;
    let mut prev_job = None;

    for &job_id in schedule_data.schedule() {
        let job = instance.job(job_id);
        let setup = match prev_job {
            Some(prev) => instance.setup_time(prev, job_id),
            None => instance.initial_setup_time(job_id),
        };
        current_time += setup + job.processing_time();
        arrival_times.push(current_time);

        let tardiness = current_time.saturating_sub(job.due_time());
        let penalty = job.penalty_rate() * tardiness as f64;
        penalties.push(penalty);
        total_penalty += penalty;

        prev_job = Some(job_id);
    }

    schedule_data.set_evaluation(arrival_times, penalties, total_penalty);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Job;

    fn instance_from_scenario_2() -> ProblemInstance {
        ProblemInstance::new(
            vec![Job::new(0, 5, 4, 1.0), Job::new(1, 5, 4, 2.0)],
            vec![vec![0, 0], vec![0, 0]],
            vec![0, 0],
        )
    }

    #[test]
    fn scenario_2_order_1_0() {
        let instance = instance_from_scenario_2();
        let mut data = ScheduleData::new(vec![1, 0]);
        evaluate(&mut data, &instance);
        assert_eq!(data.arrival_times(), &[5, 10]);
        assert_eq!(data.penalties(), &[2.0, 6.0]);
        assert_eq!(data.total_penalty(), 8.0);
    }

    #[test]
    fn scenario_2_order_0_1() {
        let instance = instance_from_scenario_2();
        let mut data = ScheduleData::new(vec![0, 1]);
        evaluate(&mut data, &instance);
        assert_eq!(data.arrival_times(), &[5, 10]);
        assert_eq!(data.penalties(), &[1.0, 12.0]);
        assert_eq!(data.total_penalty(), 13.0);
    }

    #[test]
    fn scenario_3_single_job() {
        let instance = ProblemInstance::new(vec![Job::new(0, 10, 5, 3.0)], vec![vec![0]], vec![2]);
        let mut data = ScheduleData::new(vec![0]);
        evaluate(&mut data, &instance);
        assert_eq!(data.arrival_times(), &[12]);
        assert_eq!(data.total_penalty(), 21.0);
    }

    #[test]
    fn scenario_1_never_tardy() {
        let instance = ProblemInstance::new(
            vec![
                Job::new(0, 2, 10, 1.0),
                Job::new(1, 3, 10, 1.0),
                Job::new(2, 1, 10, 1.0),
            ],
            vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]],
            vec![1, 1, 1],
        );
        let mut data = ScheduleData::new(vec![0, 1, 2]);
        evaluate(&mut data, &instance);
        assert_eq!(data.total_penalty(), 0.0);
    }

    #[test]
    fn all_due_at_zero_penalty_equals_weighted_arrival() {
        let instance = ProblemInstance::new(
            vec![Job::new(0, 1, 0, 1.0), Job::new(1, 1, 0, 10.0)],
            vec![vec![0, 0], vec![0, 0]],
            vec![0, 0],
        );
        let mut data = ScheduleData::new(vec![0, 1]);
        evaluate(&mut data, &instance);
        let expected: f64 = data
            .arrival_times()
            .iter()
            .zip(data.schedule())
            .map(|(&t, &job)| instance.job(job).penalty_rate() * t as f64)
            .sum();
        assert_eq!(data.total_penalty(), expected);
    }
}
