//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Display constants and defaults
//! - Error types
//! - Identifiers and sequences (Page, ReferenceStream)

pub mod config;
pub mod error;
mod page;
mod stream;

pub use error::{Error, Result};
pub use page::Page;
pub use stream::ReferenceStream;
