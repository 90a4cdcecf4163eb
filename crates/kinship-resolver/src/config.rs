//! Configuration for kinship resolution
//!
//! Controls the search bound and term selection.

use crate::ResolverError;
use serde::{Deserialize, Serialize};

/// Hard ceiling for `max_depth`; simple-path enumeration grows exponentially
/// with depth in dense graphs
pub const MAX_SEARCH_DEPTH: usize = 16;

/// Configuration for the kinship resolver
///
/// # Examples
///
/// ```
/// use kinship_resolver::ResolverConfig;
///
/// // Default: depth 8 covers 2nd cousins and their in-law/step/co variants
/// let config = ResolverConfig::default();
/// assert_eq!(config.max_depth, 8);
///
/// // Neutral wording only (Parent, Sibling, Pibling, ...)
/// let config = ResolverConfig::neutral();
/// assert!(!config.gendered_terms);
/// ```
///
/// The configuration can also be read from TOML:
///
/// ```toml
/// [resolver]
/// max_depth = 8
/// max_paths = 10000
/// gendered_terms = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Maximum number of steps in an enumerated path
    /// Default: 8
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Maximum number of paths collected per member pair
    /// Default: 10000
    #[serde(default = "default_max_paths")]
    pub max_paths: usize,

    /// Use gendered terms (Mother, Uncle, ...) when the alter's gender is known
    /// Default: true
    #[serde(default = "default_gendered_terms")]
    pub gendered_terms: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_paths: default_max_paths(),
            gendered_terms: default_gendered_terms(),
        }
    }
}

impl ResolverConfig {
    /// Neutral wording regardless of gender
    pub fn neutral() -> Self {
        Self {
            gendered_terms: false,
            ..Self::default()
        }
    }

    /// Deeper search for large extended families (3rd cousins and beyond)
    pub fn exhaustive() -> Self {
        Self {
            max_depth: 12,
            max_paths: 100_000,
            ..Self::default()
        }
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), ResolverError> {
        if self.max_depth == 0 {
            return Err(ResolverError::Config("max_depth must be at least 1".to_string()));
        }
        if self.max_depth > MAX_SEARCH_DEPTH {
            return Err(ResolverError::Config(format!(
                "max_depth {} exceeds the limit of {}",
                self.max_depth, MAX_SEARCH_DEPTH
            )));
        }
        if self.max_paths == 0 {
            return Err(ResolverError::Config("max_paths must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn default_max_depth() -> usize {
    8
}

fn default_max_paths() -> usize {
    10_000
}

fn default_gendered_terms() -> bool {
    true
}
