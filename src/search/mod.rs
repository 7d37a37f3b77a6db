//! This module contains the full GRASP+ILS+RVND search stack: [`GraspConfig`] for tunables,
//! [`rvnd::rvnd`] for local search, [`perturbation::double_bridge`] for diversification,
//! [`ils::ils`] for the inner loop and [`grasp::grasp`] for the outer driver.

mod config;
pub mod grasp;
pub mod ils;
pub mod perturbation;
pub mod rvnd;

pub use config::GraspConfig;
pub use grasp::grasp;
