//! Scope module - the group within which relationship edges are visible

use std::fmt;

/// Scope identifier (typically a group id)
///
/// Edges recorded in one scope are never merged into another. An empty scope
/// is allowed and stands for "no scope": it resolves to an empty graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scope(String);

impl Scope {
    /// Create a new scope
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_string())
    }

    /// Get scope as string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty ("no scope") value
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Scope {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_creation() {
        let scope = Scope::new("family/smith");
        assert_eq!(scope.as_str(), "family/smith");
        assert!(!scope.is_empty());
    }

    #[test]
    fn test_blank_scope_is_empty() {
        assert!(Scope::new("   ").is_empty());
        assert!(Scope::new("").is_empty());
    }
}
