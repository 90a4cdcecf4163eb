//! Canonicalizer: picks one authoritative path per member pair
//!
//! Order: category rank, then path length, then step tokens, then the
//! member ids along the path. The last key makes the choice total, so the
//! result never depends on traversal order.

use crate::{Classification, KinPath};
use std::cmp::Ordering;

/// A classified path competing to explain a pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The enumerated path
    pub path: KinPath,

    /// Its classification
    pub classification: Classification,
}

/// Total order over candidates; the smallest is canonical
pub fn canonical_order(a: &Candidate, b: &Candidate) -> Ordering {
    a.classification
        .category
        .rank()
        .cmp(&b.classification.category.rank())
        .then_with(|| a.path.len().cmp(&b.path.len()))
        .then_with(|| a.path.tokens().cmp(&b.path.tokens()))
        .then_with(|| a.path.members().cmp(b.path.members()))
}

/// Select the canonical candidate, if any
pub fn select_canonical(candidates: Vec<Candidate>) -> Option<Candidate> {
    candidates.into_iter().min_by(canonical_order)
}
