//! Display constants and defaults for pagesim.

use crate::policy::PolicyKind;

/// Label rendered for a frame slot that holds no page.
pub const EMPTY_SLOT_LABEL: &str = "-";

/// Label rendered for a reference that faulted.
pub const FAULT_LABEL: &str = "F";

/// Label rendered for a reference that hit.
pub const HIT_LABEL: &str = "/";

/// Frame count used when neither the CLI nor a config file sets one.
pub const DEFAULT_FRAMES: usize = 3;

/// Policies rendered step by step when none are selected.
///
/// Optimal is always simulated for its fault count, but only rendered
/// when asked for explicitly.
pub const DEFAULT_POLICIES: [PolicyKind; 2] = [PolicyKind::Fifo, PolicyKind::Lru];
