//! Frame table - the resident set shared by every policy.
//!
//! # Components
//! - [`FrameTable`] - Fixed-capacity ordered container of resident pages
//! - [`Slot`] - One frame as reported in a snapshot (occupied or empty)
//! - [`StepTrace`] - Snapshot of all frames after one reference

mod slot;
mod table;

pub use slot::{Slot, StepTrace};
pub use table::FrameTable;
