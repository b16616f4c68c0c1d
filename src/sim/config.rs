//! Simulation configuration.
//!
//! Values come from (lowest to highest priority) built-in defaults, an
//! optional JSON file, and command-line flags.
//!
//! ```json
//! { "frames": 4, "policies": ["fifo", "lru", "optimal"], "format": "json", "parallel": true }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::config::{DEFAULT_FRAMES, DEFAULT_POLICIES};
use crate::common::{Error, Result};
use crate::policy::PolicyKind;

/// How the CLI prints results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn tables, one per policy.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Parameters of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of physical frames.
    pub frames: usize,

    /// Policies to run with full traces.
    pub policies: Vec<PolicyKind>,

    pub format: OutputFormat,

    /// Run the policies on separate threads.
    pub parallel: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            policies: DEFAULT_POLICIES.to_vec(),
            format: OutputFormat::default(),
            parallel: false,
        }
    }
}

impl SimConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// - `Error::Config` if the JSON is malformed
    /// - `Error::ZeroFrames` if `frames` is 0
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()
    }

    /// Load a config from a JSON file.
    ///
    /// # Errors
    /// - `Error::Io` if the file can't be read
    /// - anything [`SimConfig::from_json_str`] returns
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Check invariants, filling an empty policy list with the defaults.
    ///
    /// # Errors
    /// - `Error::ZeroFrames` if `frames` is 0
    pub fn validate(mut self) -> Result<Self> {
        if self.frames == 0 {
            return Err(Error::ZeroFrames);
        }
        if self.policies.is_empty() {
            self.policies = DEFAULT_POLICIES.to_vec();
        }
        let mut seen = HashSet::new();
        self.policies.retain(|kind| seen.insert(*kind));
        Ok(self)
    }
}
