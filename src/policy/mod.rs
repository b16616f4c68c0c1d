//! Page replacement policies.
//!
//! Currently implements:
//! - [`FifoPolicy`] - Evicts the oldest resident page (ring buffer)
//! - [`LruPolicy`] - Evicts the least recently referenced page
//! - [`OptimalPolicy`] - Evicts the page used furthest in the future
//!
//! Every policy owns a private [`FrameTable`] and is driven one reference
//! at a time through [`ReplacementPolicy::access`]. Policies never share
//! state, so separate runs are independent.

mod fifo;
pub mod lookahead;
mod lru;
mod optimal;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::config::{FAULT_LABEL, HIT_LABEL};
use crate::common::{Page, ReferenceStream};
use crate::frame::FrameTable;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;

/// A page replacement policy driven over a reference stream.
pub trait ReplacementPolicy {
    /// Which policy this is.
    fn kind(&self) -> PolicyKind;

    /// Process the reference at `stream[index]`.
    ///
    /// Callers must feed indices in order, starting at 0, always with the
    /// same stream.
    fn access(&mut self, stream: &ReferenceStream, index: usize) -> Access;

    /// Current frame contents.
    fn frames(&self) -> &FrameTable;
}

/// Outcome of a single reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was already resident.
    Hit,
    /// The page had to be loaded, possibly evicting another page.
    Fault { evicted: Option<Page> },
}

impl Access {
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, Access::Fault { .. })
    }

    /// The page this reference pushed out, if any.
    #[inline]
    pub fn evicted(&self) -> Option<Page> {
        match self {
            Access::Fault { evicted } => *evicted,
            Access::Hit => None,
        }
    }

    #[inline]
    pub fn mark(&self) -> Mark {
        if self.is_fault() {
            Mark::Fault
        } else {
            Mark::Hit
        }
    }
}

/// Per-reference fault mark, rendered as `F` or `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[serde(rename = "F")]
    Fault,
    #[serde(rename = "/")]
    Hit,
}

impl Mark {
    /// Parse a compact mark string such as `"FF/F"`, for test fixtures.
    pub fn parse_seq(marks: &str) -> Option<Vec<Mark>> {
        marks
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| match c {
                'F' => Some(Mark::Fault),
                '/' => Some(Mark::Hit),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mark::Fault => FAULT_LABEL,
            Mark::Hit => HIT_LABEL,
        })
    }
}

/// Selects a replacement policy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// First-In-First-Out.
    Fifo,
    /// Least Recently Used.
    Lru,
    /// Belady's clairvoyant policy.
    #[value(alias = "opt")]
    #[serde(alias = "opt")]
    Optimal,
}

impl PolicyKind {
    /// All policies, in report order.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Optimal];

    /// Create a fresh policy instance for `stream`.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn build(self, capacity: usize, stream: &ReferenceStream) -> Box<dyn ReplacementPolicy> {
        match self {
            PolicyKind::Fifo => Box::new(FifoPolicy::new(capacity)),
            PolicyKind::Lru => Box::new(LruPolicy::new(capacity)),
            PolicyKind::Optimal => Box::new(OptimalPolicy::new(capacity, stream)),
        }
    }

    /// Display name used in report headings.
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Optimal => "Optimal",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
