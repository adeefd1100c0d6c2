use serde::{Deserialize, Serialize};

use crate::{PitchClassSet, Result, DEFAULT_BASE, DEFAULT_MULTIPLIER};

/// Defaults applied by callers that build and analyse sets on a user's
/// behalf. Every field may be omitted from a JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Modulus of constructed sets.
    pub base: u32,
    /// Multiplier for the `M` operation and the invariance vector.
    pub multiplier: i64,
    /// Inversion axis.
    pub axis: i64,
    /// Pitch class rendered as `C` when naming notes.
    pub middle_c: i64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            multiplier: DEFAULT_MULTIPLIER,
            axis: 0,
            middle_c: 0,
        }
    }
}

impl AnalysisConfig {
    /// Parses a JSON document, filling missing fields from [`Default`].
    pub fn from_json_str(document: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(document)?;
        tracing::debug!(?config, "parsed analysis config");
        Ok(config)
    }

    pub fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    /// Builds a set from integers using the configured modulus.
    pub fn build(&self, input: &[i64]) -> Result<PitchClassSet> {
        PitchClassSet::with_base(input, self.base)
    }

    /// Decodes a compact string using the configured modulus.
    pub fn decode(&self, encoded: &str) -> Result<PitchClassSet> {
        PitchClassSet::from_string(encoded, self.base)
    }
}
