//! Simulation runner and its results.
//!
//! # Components
//! - [`run_all`] / [`run_all_parallel`] - FIFO + LRU traces and the Optimal fault count
//! - [`run_policy`] / [`run_with`] - A single policy run
//! - [`RunResult`] - Immutable outcome of one run
//! - [`SimulationReport`] - Everything one comparison produces
//! - [`FaultStats`] - Fault, hit and eviction counters
//! - [`SimConfig`] - Run configuration, loadable from JSON

mod config;
mod result;
mod runner;
mod stats;

pub use config::{OutputFormat, SimConfig};
pub use result::{RunResult, SimulationReport};
pub use runner::{run_all, run_all_parallel, run_configured, run_policy, run_with};
pub use stats::FaultStats;
