//! Relationship module - typed edges between members

use crate::{MemberId, Scope};

/// Type of relationship between two members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationshipType {
    /// Directional: `from` is the parent of `to`
    Parent,

    /// Symmetric: a married couple
    Spouse,

    /// Symmetric: an unmarried committed couple
    Partner,
}

impl RelationshipType {
    /// Get the relationship name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Parent => "parent",
            RelationshipType::Spouse => "spouse",
            RelationshipType::Partner => "partner",
        }
    }

    /// Parse a relationship type from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "parent" => Some(RelationshipType::Parent),
            "spouse" => Some(RelationshipType::Spouse),
            "partner" => Some(RelationshipType::Partner),
            _ => None,
        }
    }

    /// Whether the edge reads the same from both members
    pub fn is_symmetric(&self) -> bool {
        !matches!(self, RelationshipType::Parent)
    }
}

impl std::str::FromStr for RelationshipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid relationship type: {}", s))
    }
}

/// A relationship fact between two members within a scope
///
/// Spouse and Partner edges are logically undirected: the store may hold
/// them in either orientation (or both), consumers must treat `(a, b)` and
/// `(b, a)` as the same edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationshipEdge {
    /// Scope the edge is visible in
    pub scope: Scope,

    /// Source member (the parent for `Parent` edges)
    pub from: MemberId,

    /// Target member (the child for `Parent` edges)
    pub to: MemberId,

    /// Type of relationship
    pub relationship_type: RelationshipType,
}

impl RelationshipEdge {
    /// Create a new relationship edge
    pub fn new(
        scope: Scope,
        from: MemberId,
        to: MemberId,
        relationship_type: RelationshipType,
    ) -> Self {
        Self {
            scope,
            from,
            to,
            relationship_type,
        }
    }

    /// `parent` is a parent of `child`
    pub fn parent(scope: Scope, parent: MemberId, child: MemberId) -> Self {
        Self::new(scope, parent, child, RelationshipType::Parent)
    }

    /// `a` and `b` are married
    pub fn spouse(scope: Scope, a: MemberId, b: MemberId) -> Self {
        Self::new(scope, a, b, RelationshipType::Spouse)
    }

    /// `a` and `b` are unmarried partners
    pub fn partner(scope: Scope, a: MemberId, b: MemberId) -> Self {
        Self::new(scope, a, b, RelationshipType::Partner)
    }

    /// Whether the edge points a member at itself
    pub fn is_self_reference(&self) -> bool {
        self.from == self.to
    }

    /// Orientation-free identity of the edge
    ///
    /// Symmetric edges order their endpoints so both storage orientations
    /// produce the same key; parent edges keep their direction.
    pub fn pair_key(&self) -> (MemberId, MemberId, RelationshipType) {
        if self.relationship_type.is_symmetric() && self.to < self.from {
            (self.to, self.from, self.relationship_type)
        } else {
            (self.from, self.to, self.relationship_type)
        }
    }
}
