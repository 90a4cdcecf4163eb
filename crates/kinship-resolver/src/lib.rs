//! Kinship Resolver
//!
//! Computes the natural-language kinship term between two members of a
//! scoped relationship graph: blood lineage, marriage ("-in-law"), unmarried
//! partnership ("Co-") and step relations, at any generational depth, with
//! gendered or neutral wording.
//!
//! # Architecture
//!
//! ```text
//! RelationshipStore
//!     │
//!     ├──> Graph Builder       (scoped, deduplicated, immutable snapshot)
//!     │
//!     ├──> Path Enumerator     (depth-bounded BFS over simple paths)
//!     │
//!     ├──> Path Classifier  ∥  Lineage Calculator
//!     │      (Blood/Spouse/Partner/Step/Co/In-law)   (up/down, sibling sets)
//!     │
//!     ├──> Canonicalizer       (one authoritative path per pair)
//!     │
//!     └──> Label Composer      ("2nd cousin once removed", "Step-mother")
//! ```
//!
//! Resolution is a pure function of the snapshot: it never mutates the graph,
//! never fails, and can run from any number of threads at once.
//!
//! # Examples
//!
//! ```
//! use kinship_domain::{MemberId, RelationshipEdge, Scope};
//! use kinship_resolver::{GraphBuilder, KinshipResolver};
//!
//! let scope = Scope::new("family");
//! let parent = MemberId::from_value(1);
//! let child = MemberId::from_value(2);
//!
//! let mut builder = GraphBuilder::new(scope.clone());
//! builder.add_edge(RelationshipEdge::parent(scope, parent, child));
//! let graph = builder.build();
//!
//! let resolver = KinshipResolver::default_config();
//! assert_eq!(resolver.label(&graph, child, parent), "Parent");
//! assert_eq!(resolver.label(&graph, parent, child), "Child");
//! assert_eq!(resolver.label(&graph, child, child), "Self");
//! ```

#![warn(missing_docs)]

mod canonical;
mod classifier;
mod composer;
mod config;
mod error;
mod graph;
mod lineage;
mod paths;
mod resolver;
mod types;
mod validator;

pub use canonical::{canonical_order, select_canonical, Candidate};
pub use classifier::{classify, Classification};
pub use composer::{ComposedTerm, LabelComposer};
pub use config::{ResolverConfig, MAX_SEARCH_DEPTH};
pub use error::ResolverError;
pub use graph::{GraphBuilder, KinGraph, Link};
pub use lineage::{sibling_tier, Lineage, Relation, SiblingTier};
pub use paths::{find_paths, PathEnumerator, PathSet};
pub use resolver::{Kinship, KinshipResolver, Resolution};
pub use types::{Category, Direction, KinPath, Modifier, Step};
pub use validator::{EdgeValidator, RejectionReason, ValidationResult, ValidationStatus};
