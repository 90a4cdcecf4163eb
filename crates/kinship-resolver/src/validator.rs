//! Edge validation before a relationship is written
//!
//! Checks a proposed edge against the current snapshot of its scope. The
//! resolver tolerates whatever reaches the store, so this only keeps
//! obviously malformed data out.

use crate::KinGraph;
use kinship_domain::{MemberId, RelationshipEdge, RelationshipType, Scope};
use std::fmt;

/// Result of edge validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the edge may be written
    pub status: ValidationStatus,

    /// Rejection reasons (if any)
    pub reasons: Vec<RejectionReason>,
}

impl ValidationResult {
    /// Whether the edge was accepted
    pub fn is_accepted(&self) -> bool {
        self.status == ValidationStatus::Accepted
    }
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Edge accepted
    Accepted,

    /// Edge rejected
    Rejected,
}

/// Reasons for rejection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Both endpoints are the same member
    SelfReference,

    /// Edge belongs to a different scope than the snapshot
    ScopeMismatch {
        /// Scope of the snapshot
        expected: Scope,
        /// Scope of the edge
        actual: Scope,
    },

    /// The same logical edge already exists
    Duplicate,

    /// The child is already an ancestor of the parent
    ParentCycle {
        /// Proposed parent
        parent: MemberId,
        /// Proposed child
        child: MemberId,
    },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::SelfReference => write!(f, "a member cannot be related to itself"),
            RejectionReason::ScopeMismatch { expected, actual } => {
                write!(f, "edge scope '{}' does not match '{}'", actual, expected)
            }
            RejectionReason::Duplicate => write!(f, "relationship already exists"),
            RejectionReason::ParentCycle { parent, child } => write!(
                f,
                "{} is already an ancestor of {}; the edge would create a parent cycle",
                child, parent
            ),
        }
    }
}

/// Validates relationship edges against a snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeValidator;

impl EdgeValidator {
    /// Create a validator
    pub fn new() -> Self {
        Self
    }

    /// Validate a proposed edge; the graph is never modified
    pub fn validate(&self, graph: &KinGraph, edge: &RelationshipEdge) -> ValidationResult {
        let mut reasons = Vec::new();

        if edge.is_self_reference() {
            reasons.push(RejectionReason::SelfReference);
        }

        if edge.scope != *graph.scope() {
            reasons.push(RejectionReason::ScopeMismatch {
                expected: graph.scope().clone(),
                actual: edge.scope.clone(),
            });
        }

        if graph.contains_edge(edge) {
            reasons.push(RejectionReason::Duplicate);
        }

        if edge.relationship_type == RelationshipType::Parent
            && !edge.is_self_reference()
            && graph.is_ancestor(edge.to, edge.from)
        {
            reasons.push(RejectionReason::ParentCycle {
                parent: edge.from,
                child: edge.to,
            });
        }

        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            tracing::debug!(
                "Rejected {} edge {} -> {}: {} reason(s)",
                edge.relationship_type.as_str(),
                edge.from,
                edge.to,
                reasons.len()
            );
            ValidationStatus::Rejected
        };

        ValidationResult { status, reasons }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphBuilder;

    fn id(value: u128) -> MemberId {
        MemberId::from_value(value)
    }

    fn scope() -> Scope {
        Scope::new("family")
    }

    /// 1 → 2 → 3 parent chain, 2 married to 4
    fn graph() -> KinGraph {
        let mut builder = GraphBuilder::new(scope());
        builder.add_edge(RelationshipEdge::parent(scope(), id(1), id(2)));
        builder.add_edge(RelationshipEdge::parent(scope(), id(2), id(3)));
        builder.add_edge(RelationshipEdge::spouse(scope(), id(2), id(4)));
        builder.build()
    }

    #[test]
    fn test_accepts_new_edges() {
        let validator = EdgeValidator::new();
        let graph = graph();

        let result = validator.validate(&graph, &RelationshipEdge::parent(scope(), id(4), id(3)));
        assert!(result.is_accepted());
        assert!(result.reasons.is_empty());

        // New members are fine too
        let result = validator.validate(&graph, &RelationshipEdge::partner(scope(), id(3), id(9)));
        assert_eq!(result.status, ValidationStatus::Accepted);
    }

    #[test]
    fn test_rejects_self_reference() {
        let result = EdgeValidator::new().validate(&graph(), &RelationshipEdge::spouse(scope(), id(1), id(1)));
        assert_eq!(result.status, ValidationStatus::Rejected);
        assert_eq!(result.reasons, vec![RejectionReason::SelfReference]);
    }

    #[test]
    fn test_rejects_scope_mismatch() {
        let edge = RelationshipEdge::spouse(Scope::new("club"), id(1), id(4));
        let result = EdgeValidator::new().validate(&graph(), &edge);
        assert_eq!(
            result.reasons,
            vec![RejectionReason::ScopeMismatch {
                expected: scope(),
                actual: Scope::new("club"),
            }]
        );
    }

    #[test]
    fn test_rejects_duplicate_in_either_orientation() {
        let result = EdgeValidator::new().validate(&graph(), &RelationshipEdge::spouse(scope(), id(4), id(2)));
        assert_eq!(result.reasons, vec![RejectionReason::Duplicate]);
    }

    #[test]
    fn test_rejects_parent_cycle() {
        let result = EdgeValidator::new().validate(&graph(), &RelationshipEdge::parent(scope(), id(3), id(1)));
        assert_eq!(
            result.reasons,
            vec![RejectionReason::ParentCycle {
                parent: id(3),
                child: id(1),
            }]
        );
        assert!(result.reasons[0].to_string().contains("parent cycle"));

        // Reversing a direct parent edge is also a cycle
        let result = EdgeValidator::new().validate(&graph(), &RelationshipEdge::parent(scope(), id(2), id(1)));
        assert!(!result.is_accepted());
    }
}
