//! AtomSpace configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for an [`AtomSpace`](super::AtomSpace).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtomSpaceConfig {
    /// Advisory soft cap on the number of atoms. Never enforced on insert;
    /// exceeding it only logs a warning.
    pub max_size: usize,
    /// Whether newly created atoms receive a default attention value
    pub enable_attention: bool,
}

impl Default for AtomSpaceConfig {
    fn default() -> Self {
        Self {
            max_size: 1_000_000,
            enable_attention: true,
        }
    }
}

impl AtomSpaceConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the advisory size cap.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Enable or disable default attention values on new atoms.
    pub fn with_attention(mut self, enabled: bool) -> Self {
        self.enable_attention = enabled;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values that make no sense.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(Error::config("max_size must be greater than zero"));
        }
        Ok(())
    }
}
