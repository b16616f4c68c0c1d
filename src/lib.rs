//! pagesim - A page replacement simulator.
//!
//! Runs FIFO, LRU and Optimal replacement over the same reference string
//! and frame count, recording the frame contents after every reference,
//! which references faulted, and how each policy compares with the
//! Optimal lower bound.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Input boundary (input/) + CLI (main.rs)        │   │
//! │  │      "0,1,2,3" → ReferenceStream, "3" → frame count     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │               Simulation Runner (sim/)                  │   │
//! │  │     run_all + RunResult + FaultStats + SimConfig        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Policies (policy/)                      │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │       FIFO   |   LRU   |   Optimal (lookahead)  │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │          each owns a private FrameTable (frame/)        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                  Reporter (report/)                     │   │
//! │  │          box-grid tables, summaries, JSON               │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Page, ReferenceStream, Error, config)
//! - [`frame`] - The frame table and its snapshots
//! - [`policy`] - Replacement policies
//! - [`sim`] - Simulation runner, results and configuration
//! - [`input`] - Parsing user input
//! - [`report`] - Rendering results
//!
//! # Quick Start
//! ```
//! use pagesim::input::parse_reference_string;
//! use pagesim::report::render_report;
//!
//! let stream = parse_reference_string("0,1,2,3,0,1,4").unwrap();
//! let report = pagesim::run_all(&stream, 3).unwrap();
//!
//! assert_eq!(report.lru().faults(), 7);
//! println!("{}", render_report(&report));
//! ```

pub mod common;
pub mod frame;
pub mod input;
pub mod policy;
pub mod report;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, Page, ReferenceStream, Result};

pub use frame::{FrameTable, Slot, StepTrace};
pub use policy::{Mark, PolicyKind, ReplacementPolicy};
pub use sim::{
    run_all, run_all_parallel, run_configured, run_policy, FaultStats, OutputFormat, RunResult,
    SimConfig, SimulationReport,
};
