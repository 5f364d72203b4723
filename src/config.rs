#[cfg(feature = "serde")]
use std::path::Path;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::errors::ComparisonError;
use crate::{accuracy::AccuracyMetric, consts::DEFAULT_CACHE_CAPACITY, tokenizer::BuiltinTokenizer};

/// Settings of a comparison. Every field has a default, so a configuration
/// file only needs to list what it overrides:
///
/// ```yaml
/// tokenizer: word            # character | word | line
/// metric: token_overlap      # token_overlap | character_levenshtein
/// max_search_depth: 10000    # omit for an exact (minimal) alignment
/// cache_capacity: 32
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComparisonConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub tokenizer: BuiltinTokenizer,

    #[cfg_attr(feature = "serde", serde(default))]
    pub metric: AccuracyMetric,

    #[cfg_attr(feature = "serde", serde(default))]
    pub max_search_depth: Option<usize>,

    #[cfg_attr(feature = "serde", serde(default = "default_cache_capacity"))]
    pub cache_capacity: usize,
}

fn default_cache_capacity() -> usize {
    debug!("Using default comparison cache capacity: {DEFAULT_CACHE_CAPACITY}");
    DEFAULT_CACHE_CAPACITY
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            tokenizer: BuiltinTokenizer::default(),
            metric: AccuracyMetric::default(),
            max_search_depth: None,
            cache_capacity: default_cache_capacity(),
        }
    }
}

#[cfg(feature = "serde")]
impl ComparisonConfig {
    /// Parse a YAML configuration, filling in defaults for missing fields.
    ///
    /// # Errors
    ///
    /// If the document is not valid YAML or has fields of the wrong type.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ComparisonError> {
        serde_yaml::from_str(contents)
            .map_err(|error| ComparisonError::InvalidConfig(format!("failed to parse YAML: {error}")))
    }

    /// Read and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// If the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, ComparisonError> {
        debug!("Loading comparison configuration from '{}'", path.display());

        let contents = std::fs::read_to_string(path).map_err(|error| {
            ComparisonError::InvalidConfig(format!(
                "cannot read configuration from {}: {error}",
                path.display()
            ))
        })?;

        Self::from_yaml_str(&contents)
    }
}
