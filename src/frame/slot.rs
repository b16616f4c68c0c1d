//! Frame slots and per-step snapshots.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::common::config::EMPTY_SLOT_LABEL;
use crate::common::Page;

/// The contents of one frame in a snapshot.
///
/// Serializes as the page number, or `null` for an empty frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The frame holds a page.
    Occupied(Page),
    /// The frame has never been filled.
    Empty,
}

impl Slot {
    /// The resident page, if any.
    #[inline]
    pub fn page(&self) -> Option<Page> {
        match self {
            Slot::Occupied(page) => Some(*page),
            Slot::Empty => None,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

impl From<Option<Page>> for Slot {
    fn from(page: Option<Page>) -> Self {
        page.map_or(Slot::Empty, Slot::Occupied)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Occupied(page) => write!(f, "{}", page),
            Slot::Empty => f.write_str(EMPTY_SLOT_LABEL),
        }
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Slot::Occupied(page) => serializer.serialize_some(page),
            Slot::Empty => serializer.serialize_none(),
        }
    }
}

/// Snapshot of every frame, taken right after one reference.
///
/// Always exactly as long as the frame capacity: frames that were never
/// filled are reported as [`Slot::Empty`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StepTrace(Vec<Slot>);

impl StepTrace {
    pub(crate) fn new(slots: Vec<Slot>) -> Self {
        StepTrace(slots)
    }

    /// Build a trace from optional page ids, mostly for test fixtures.
    ///
    /// # Example
    /// ```
    /// use pagesim::StepTrace;
    ///
    /// let trace = StepTrace::from_ids([Some(3), Some(0), None]);
    /// assert_eq!(trace.to_string(), "[3, 0, -]");
    /// ```
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = Option<i64>>,
    {
        StepTrace(
            ids.into_iter()
                .map(|id| Slot::from(id.map(Page::new)))
                .collect(),
        )
    }

    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    /// Number of slots (the frame capacity).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of occupied slots.
    pub fn resident_count(&self) -> usize {
        self.0.iter().filter(|slot| !slot.is_empty()).count()
    }

    pub fn contains(&self, page: Page) -> bool {
        self.0.contains(&Slot::Occupied(page))
    }
}

impl fmt::Display for StepTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", slot)?;
        }
        f.write_str("]")
    }
}
