//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{Gender, Member, MemberId, RelationshipEdge, Scope};

/// Trait for storing and retrieving members and their relationships
///
/// Implemented by the infrastructure layer (kinship-store). Kinship
/// resolution only ever calls the read methods.
pub trait RelationshipStore {
    /// Error type for store operations
    type Error;

    /// Register a member
    fn add_member(&mut self, member: Member) -> Result<MemberId, Self::Error>;

    /// Get a member by ID
    fn get_member(&self, id: MemberId) -> Result<Option<Member>, Self::Error>;

    /// Find a member by exact display name
    fn find_member_by_name(&self, name: &str) -> Result<Option<Member>, Self::Error>;

    /// List every registered member
    fn list_members(&self) -> Result<Vec<Member>, Self::Error>;

    /// Record a relationship edge
    fn add_relationship(&mut self, edge: RelationshipEdge) -> Result<(), Self::Error>;

    /// Remove a relationship edge, returning whether anything was removed
    fn remove_relationship(&mut self, edge: &RelationshipEdge) -> Result<bool, Self::Error>;

    /// List every edge recorded in a scope
    fn list_edges(&self, scope: &Scope) -> Result<Vec<RelationshipEdge>, Self::Error>;

    /// Gender of a member; unknown members are `Unspecified`
    fn get_gender(&self, id: MemberId) -> Result<Gender, Self::Error>;
}
