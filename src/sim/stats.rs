//! Fault statistics for a simulation run.

use std::fmt;

use serde::Serialize;

use crate::policy::Access;

/// Counters collected while a policy runs.
///
/// # Example
/// ```
/// use pagesim::FaultStats;
/// use pagesim::policy::Access;
///
/// let mut stats = FaultStats::new();
/// stats.record(Access::Fault { evicted: None });
/// stats.record(Access::Hit);
/// assert_eq!(stats.hits(), 1);
/// assert_eq!(stats.efficiency(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FaultStats {
    /// Number of references processed.
    pub references: u64,

    /// Number of references whose page was not resident.
    pub faults: u64,

    /// Number of faults that pushed another page out.
    pub evictions: u64,
}

impl FaultStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one reference.
    pub fn record(&mut self, access: Access) {
        self.references += 1;
        if access.is_fault() {
            self.faults += 1;
        }
        if access.evicted().is_some() {
            self.evictions += 1;
        }
    }

    #[inline]
    pub fn hits(&self) -> u64 {
        self.references - self.faults
    }

    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits() as f64 / self.references as f64
        }
    }

    /// Hit rate as a percentage: `(references - faults) / references * 100`.
    pub fn efficiency(&self) -> f64 {
        self.hit_rate() * 100.0
    }
}

impl fmt::Display for FaultStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ references: {}, faults: {}, hits: {}, evictions: {}, efficiency: {:.2}% }}",
            self.references,
            self.faults,
            self.hits(),
            self.evictions,
            self.efficiency()
        )
    }
}
