//! Kinship Domain Layer
//!
//! This crate contains the value types shared by every other kinship crate.
//! Apart from `uuid` (member identifiers) it has no external dependencies and
//! defines the trait boundary to the relationship store.
//!
//! ## Key Concepts
//!
//! - **Member**: a person in a community, identified by a stable [`MemberId`]
//! - **Scope**: the group within which relationship edges are visible
//! - **Relationship edge**: a typed fact between two members (parent, spouse, partner)
//! - **Relationship store**: the external collaborator that owns the edges
//!
//! ## Architecture
//!
//! - Pure data and validation only
//! - Storage lives in `kinship-store`
//! - Graph search and labelling live in `kinship-resolver`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod member;
pub mod relationship;
pub mod scope;
pub mod traits;

// Re-exports for convenience
pub use member::{Gender, Member, MemberId};
pub use relationship::{RelationshipEdge, RelationshipType};
pub use scope::Scope;
pub use traits::RelationshipStore;
