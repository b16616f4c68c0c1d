//! Immutable results handed to the reporting layer.

use serde::Serialize;

use crate::common::ReferenceStream;
use crate::frame::StepTrace;
use crate::policy::{Mark, PolicyKind};
use crate::sim::FaultStats;

/// Outcome of running one policy over one stream with one frame count.
///
/// `traces` and `marks` hold one entry per reference, in stream order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub(crate) policy: PolicyKind,
    pub(crate) frames: usize,
    pub(crate) traces: Vec<StepTrace>,
    pub(crate) marks: Vec<Mark>,
    pub(crate) stats: FaultStats,
}

impl RunResult {
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// Frame capacity the run used.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Frame contents after each reference.
    pub fn traces(&self) -> &[StepTrace] {
        &self.traces
    }

    /// Fault or hit, per reference.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn stats(&self) -> &FaultStats {
        &self.stats
    }

    pub fn references(&self) -> usize {
        self.marks.len()
    }

    pub fn faults(&self) -> usize {
        self.marks.iter().filter(|&&m| m == Mark::Fault).count()
    }

    pub fn hits(&self) -> usize {
        self.references() - self.faults()
    }

    /// Hit ratio as a percentage.
    pub fn efficiency(&self) -> f64 {
        self.stats.efficiency()
    }

    /// Positions of every faulting reference.
    pub fn fault_positions(&self) -> Vec<usize> {
        self.marks
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m == Mark::Fault)
            .map(|(i, _)| i)
            .collect()
    }

    /// Marks as a compact string, e.g. `"FFF/F"`.
    pub fn mark_string(&self) -> String {
        self.marks.iter().map(|m| m.to_string()).collect()
    }
}

/// FIFO and LRU runs plus the Optimal fault count for one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub(crate) frames: usize,
    pub(crate) references: ReferenceStream,
    pub(crate) fifo: RunResult,
    pub(crate) lru: RunResult,
    pub(crate) optimal_faults: usize,
}

impl SimulationReport {
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// The reference stream every policy consumed.
    pub fn references(&self) -> &ReferenceStream {
        &self.references
    }

    pub fn fifo(&self) -> &RunResult {
        &self.fifo
    }

    pub fn lru(&self) -> &RunResult {
        &self.lru
    }

    /// Fault count of the Optimal policy, the lower bound for this input.
    pub fn optimal_faults(&self) -> usize {
        self.optimal_faults
    }

    /// The full run for `policy`, if this report carries one.
    pub fn run(&self, policy: PolicyKind) -> Option<&RunResult> {
        match policy {
            PolicyKind::Fifo => Some(&self.fifo),
            PolicyKind::Lru => Some(&self.lru),
            PolicyKind::Optimal => None,
        }
    }
}
