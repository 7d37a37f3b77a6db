//! Contains the [`ProblemInstance`], the immutable read-only input to the solver.
use super::job::{Job, JobId};

/// An immutable SMSP-SDSTWT problem instance: a list of jobs, a setup-time matrix between every
/// ordered pair of jobs, and the setup time incurred when a job is scheduled first.
///
/// Constructed once from parsed input and shared by reference for the remainder of a solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemInstance {
    jobs: Vec<Job>,
    setup_times: Vec<Vec<u64>>,
    initial_setup_times: Vec<u64>,
}

impl ProblemInstance {
    /// Creates a new [`ProblemInstance`].
    ///
    /// # Panics
    /// Panics if `setup_times` is not `n x n` or `initial_setup_times` does not have length `n`,
    /// where `n = jobs.len()`. These are programmer errors at construction time, not runtime
    /// input errors (malformed *files* are rejected by [`crate::io::parser`] instead).
    pub fn new(
        jobs: Vec<Job>,
        setup_times: Vec<Vec<u64>>,
        initial_setup_times: Vec<u64>,
    ) -> ProblemInstance {
        let n = jobs.len();
        assert_eq!(setup_times.len(), n, "setup_times must have n rows");
        for row in &setup_times {
            assert_eq!(row.len(), n, "setup_times must have n columns");
        }
        assert_eq!(
            initial_setup_times.len(),
            n,
            "initial_setup_times must have length n"
        );
        ProblemInstance {
            jobs,
            setup_times,
            initial_setup_times,
        }
    }

    /// Returns the number of jobs, `N`.
    pub fn number_of_jobs(&self) -> usize {
        self.jobs.len()
    }

    /// Returns the [`Job`] with the given id.
    pub fn job(&self, id: JobId) -> Job {
        self.jobs[id]
    }

    /// Returns all jobs.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Returns the setup time incurred when scheduling `to` immediately after `from`.
    pub fn setup_time(&self, from: JobId, to: JobId) -> u64 {
        self.setup_times[from][to]
    }

    /// Returns the setup time incurred when `job` is scheduled first.
    pub fn initial_setup_time(&self, job: JobId) -> u64 {
        self.initial_setup_times[job]
    }
}
