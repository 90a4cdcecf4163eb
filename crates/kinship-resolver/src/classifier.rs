//! Path Pattern Classifier
//!
//! A path is classifiable when it is a monotone blood sequence, or a single
//! spouse/partner step with blood sequences on either side:
//!
//! | Shape | Category | Example |
//! |---|---|---|
//! | `parent^a child^b` | Blood | `[parent, parent, child, child]` |
//! | `spouse` / `partner` | Spouse / Partner | `[spouse]` |
//! | `parent^a spouse child^b` | Step | `[parent, spouse]`, `[spouse, child]` |
//! | `parent^a partner child^b` | Co | `[partner, child]` |
//! | blood ending in `child`, then `spouse` | In-law | `[child, spouse]` |
//! | `spouse`, then blood starting with `parent` | In-law | `[spouse, parent]` |
//!
//! The Step/Co shape is tested before the In-law shapes. Everything else
//! (two lateral steps, zig-zag parent sequences, partner in-law shapes) is
//! left unclassified rather than guessed at.

use crate::{Category, Lineage, Step};

/// Result of classifying one path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Category of the path
    pub category: Category,

    /// Distances for the base term; `None` for direct spouse/partner paths
    pub lineage: Option<Lineage>,

    /// Member-index range `(first, last)` of the blood segment whose
    /// endpoints the sibling set rule applies to
    pub blood_span: Option<(usize, usize)>,
}

/// Classify a step sequence
pub fn classify(steps: &[Step]) -> Option<Classification> {
    let laterals: Vec<usize> = steps
        .iter()
        .enumerate()
        .filter(|(_, step)| step.is_lateral())
        .map(|(idx, _)| idx)
        .collect();

    match laterals.as_slice() {
        [] => Lineage::from_steps(steps).map(|lineage| Classification {
            category: Category::Blood,
            lineage: Some(lineage),
            blood_span: Some((0, steps.len())),
        }),
        [idx] => classify_lateral(steps, *idx),
        _ => None,
    }
}

fn classify_lateral(steps: &[Step], idx: usize) -> Option<Classification> {
    let lateral = steps[idx];
    let left = &steps[..idx];
    let right = &steps[idx + 1..];

    if left.is_empty() && right.is_empty() {
        let category = match lateral {
            Step::Spouse => Category::Spouse,
            _ => Category::Partner,
        };
        return Some(Classification {
            category,
            lineage: None,
            blood_span: None,
        });
    }

    let ascends_only = left.iter().all(|s| *s == Step::Parent);
    let descends_only = right.iter().all(|s| *s == Step::Child);
    if ascends_only && descends_only {
        let category = match lateral {
            Step::Spouse => Category::Step,
            _ => Category::Co,
        };
        return Some(Classification {
            category,
            lineage: Lineage::new(left.len() as u32, right.len() as u32),
            blood_span: None,
        });
    }

    if lateral != Step::Spouse {
        return None;
    }

    // Spouse of a blood relative
    if right.is_empty() && left.last() == Some(&Step::Child) {
        return Lineage::from_steps(left).map(|lineage| Classification {
            category: Category::InLaw,
            lineage: Some(lineage),
            blood_span: Some((0, idx)),
        });
    }

    // Blood relative of a spouse
    if left.is_empty() && right.first() == Some(&Step::Parent) {
        return Lineage::from_steps(right).map(|lineage| Classification {
            category: Category::InLaw,
            lineage: Some(lineage),
            blood_span: Some((idx + 1, steps.len())),
        });
    }

    None
}
