//! Evaluator configuration

use crate::error::Result;
use serde::Deserialize;

/// Default nesting limit for a single evaluation
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Evaluator settings
///
/// Can be loaded from TOML; missing keys keep their defaults:
///
/// ```toml
/// max_depth = 128
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvalConfig {
    /// Deepest node nesting evaluated before giving up with null
    pub max_depth: usize,
}

impl EvalConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
