//! Error types for kinship resolution
//!
//! Resolution itself never fails; errors only come from loading a snapshot
//! out of the relationship store or from rejected configuration.

use thiserror::Error;

/// Errors that can occur while preparing a resolution
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Relationship store error
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
