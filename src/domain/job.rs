//! Contains the [`Job`] struct and the [`JobId`] type.

/// A 0-based dense index into a [`ProblemInstance`][super::instance::ProblemInstance]'s job list.
pub type JobId = usize;

/// An immutable job to be scheduled on the single machine.
/// * `processing_time` is the time the machine spends working on the job once set up.
/// * `due_time` is the deadline after which the job accrues a tardiness penalty.
/// * `penalty_rate` is the cost per unit of time the job's completion exceeds `due_time`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Job {
    id: JobId,
    processing_time: u64,
    due_time: u64,
    penalty_rate: f64,
}

impl Job {
    /// Creates a new [`Job`]. `processing_time` must be positive; `due_time` and `penalty_rate`
    /// must be non-negative.
    pub fn new(id: JobId, processing_time: u64, due_time: u64, penalty_rate: f64) -> Job {
        Job {
            id,
            processing_time,
            due_time,
            penalty_rate,
        }
    }

    /// Returns the job's id.
    pub fn id(&self) -> JobId {
        self.id
    }

    /// Returns the job's processing time.
    pub fn processing_time(&self) -> u64 {
        self.processing_time
    }

    /// Returns the job's due time.
    pub fn due_time(&self) -> u64 {
        self.due_time
    }

    /// Returns the job's penalty rate (cost per unit of tardiness).
    pub fn penalty_rate(&self) -> f64 {
        self.penalty_rate
    }
}
