#![warn(missing_docs)]
//! This library solves the single-machine scheduling problem with sequence-dependent setup times
//! and weighted tardiness (SMSP-SDSTWT): given a set of jobs, each with a processing time, a due
//! time and a per-unit-time tardiness penalty rate, and a matrix of setup times between every
//! ordered pair of jobs, find a permutation of all jobs minimizing the sum over jobs of
//! `penalty_rate * max(0, completion_time - due_time)`.
//!
//! # Overview
//! The solver is a layered metaheuristic stack, from lowest to highest:
//! - [`schedule::evaluate`] — given a permutation, computes arrival times, per-job penalties and
//!   total penalty in one `O(N)` forward pass.
//! - [`neighborhoods`] — three move families ([`neighborhoods::Swap`], [`neighborhoods::Reinsertion`],
//!   [`neighborhoods::TwoOpt`]), each scanning every legal move and applying the single
//!   best-improving one.
//! - [`search::rvnd`] — Randomized Variable Neighborhood Descent: repeatedly tries the three
//!   neighborhoods in a freshly shuffled order until none can improve the schedule.
//! - [`search::perturbation`] — Double-Bridge: an unconditional four-segment recombination used to
//!   escape RVND's local optima without destroying macro-structure.
//! - [`search::ils`] — Iterated Local Search: alternates RVND and perturbation, tracking the best
//!   schedule seen, until `4 * N` perturbation rounds pass without improvement.
//! - [`construction::greedy_construction`] — builds an initial permutation with a priority-based
//!   Restricted Candidate List (RCL) heuristic.
//! - [`search::grasp`] — the outer GRASP driver: repeats (construct, then ILS) a fixed number of
//!   times and returns the best schedule found.
//!
//! # Example
//! ```rust
//! use smsp_sdstwt_solver::domain::{Job, ProblemInstance};
//! use smsp_sdstwt_solver::search::{grasp, GraspConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let instance = ProblemInstance::new(
//!     vec![
//!         Job::new(0, 2, 10, 1.0),
//!         Job::new(1, 3, 10, 1.0),
//!         Job::new(2, 1, 10, 1.0),
//!     ],
//!     vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]],
//!     vec![1, 1, 1],
//! );
//!
//! let config = GraspConfig::new().with_grasp_iterations(10);
//! let mut rng = StdRng::seed_from_u64(0);
//! let (schedule, penalty) = grasp(&instance, &config, &mut rng);
//! assert_eq!(schedule.len(), 3);
//! assert!(penalty >= 0.0);
//! ```

pub mod construction;
pub mod domain;
pub mod io;
pub mod neighborhoods;
pub mod schedule;
pub mod search;
