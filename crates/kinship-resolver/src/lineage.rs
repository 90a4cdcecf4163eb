//! Lineage Distance Calculator
//!
//! Turns a monotone blood sequence (`parent^up child^down`) into a relation
//! tier, and decides full vs half siblings from the members' parent sets
//! rather than from any single path.

use crate::{KinGraph, Step};
use kinship_domain::MemberId;

/// Generational distances from ego up to the apex of a path and down to alter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lineage {
    /// Parent steps toward ancestors
    pub up: u32,

    /// Parent steps toward descendants
    pub down: u32,
}

/// Blood relation tier named by a [`Lineage`]
///
/// `generations` counts the larger of the two distances, so a grandparent
/// is `Ancestor { generations: 2 }` and a great-aunt is
/// `Pibling { generations: 3 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Parent, grandparent, great-grandparent, ...
    Ancestor {
        /// Generations above ego
        generations: u32,
    },

    /// Child, grandchild, great-grandchild, ...
    Descendant {
        /// Generations below ego
        generations: u32,
    },

    /// Shares both parents (or an unexamined sibling link)
    Sibling,

    /// Shares exactly one parent
    HalfSibling,

    /// Aunt/uncle tier: alter is in an older generation
    Pibling {
        /// `max(up, down)`
        generations: u32,
    },

    /// Niece/nephew tier: alter is in a younger generation
    Nibling {
        /// `max(up, down)`
        generations: u32,
    },

    /// Cousin tier
    Cousin {
        /// `min(up, down) - 1`
        degree: u32,
        /// `|up - down|`
        removal: u32,
    },
}

/// Sibling status derived from the direct parent sets of two members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiblingTier {
    /// Two or more shared parents
    Full,

    /// Exactly one shared parent
    Half,

    /// No shared parent
    NotSiblings,
}

impl Lineage {
    /// Create a lineage; a zero-length lineage describes no relation
    pub fn new(up: u32, down: u32) -> Option<Self> {
        if up == 0 && down == 0 {
            return None;
        }
        Some(Self { up, down })
    }

    /// Read a step sequence of the form `parent^up child^down`
    ///
    /// Any lateral step, any `parent` after a `child`, or an empty sequence
    /// yields `None`: descending and then climbing again reaches a co-parent
    /// or an in-law of blood, never a blood relative.
    pub fn from_steps(steps: &[Step]) -> Option<Self> {
        let mut up = 0u32;
        let mut down = 0u32;

        for step in steps {
            match step {
                Step::Parent if down == 0 => up += 1,
                Step::Child => down += 1,
                _ => return None,
            }
        }

        Self::new(up, down)
    }

    /// `min(up, down)`
    pub fn min_distance(&self) -> u32 {
        self.up.min(self.down)
    }

    /// `max(up, down)`
    pub fn max_distance(&self) -> u32 {
        self.up.max(self.down)
    }

    /// The lineage seen from alter's side
    pub fn reversed(&self) -> Self {
        Self {
            up: self.down,
            down: self.up,
        }
    }

    /// Relation tier for these distances
    ///
    /// Equal distances of one are reported as `Sibling`; use
    /// [`Relation::with_sibling_tier`] to refine it from parent sets.
    pub fn relation(&self) -> Relation {
        let (up, down) = (self.up, self.down);

        match self.min_distance() {
            0 if down == 0 => Relation::Ancestor { generations: up },
            0 => Relation::Descendant { generations: down },
            1 if up == down => Relation::Sibling,
            1 if up > down => Relation::Pibling {
                generations: self.max_distance(),
            },
            1 => Relation::Nibling {
                generations: self.max_distance(),
            },
            min => Relation::Cousin {
                degree: min - 1,
                removal: up.abs_diff(down),
            },
        }
    }
}

impl Relation {
    /// The relation alter has to ego when this is what ego has to alter
    pub fn inverse(&self) -> Relation {
        match *self {
            Relation::Ancestor { generations } => Relation::Descendant { generations },
            Relation::Descendant { generations } => Relation::Ancestor { generations },
            Relation::Pibling { generations } => Relation::Nibling { generations },
            Relation::Nibling { generations } => Relation::Pibling { generations },
            other => other,
        }
    }

    /// Downgrade `Sibling` to `HalfSibling` when only one parent is shared
    pub fn with_sibling_tier(self, tier: SiblingTier) -> Relation {
        match (self, tier) {
            (Relation::Sibling, SiblingTier::Half) => Relation::HalfSibling,
            (relation, _) => relation,
        }
    }

    /// Number of "Great-" repetitions in the rendered term
    pub fn greats(&self) -> u32 {
        match *self {
            Relation::Ancestor { generations }
            | Relation::Descendant { generations }
            | Relation::Pibling { generations }
            | Relation::Nibling { generations } => generations.saturating_sub(2),
            _ => 0,
        }
    }

    /// Cousin degree, if this is a cousin relation
    pub fn degree(&self) -> Option<u32> {
        match *self {
            Relation::Cousin { degree, .. } => Some(degree),
            _ => None,
        }
    }

    /// Cousin removal, if this is a cousin relation
    pub fn removal(&self) -> Option<u32> {
        match *self {
            Relation::Cousin { removal, .. } => Some(removal),
            _ => None,
        }
    }
}

/// Compare the direct parent sets of two members
pub fn sibling_tier(graph: &KinGraph, a: MemberId, b: MemberId) -> SiblingTier {
    let parents_a = graph.parents(a);
    let parents_b = graph.parents(b);

    match parents_a.intersection(&parents_b).count() {
        0 => SiblingTier::NotSiblings,
        1 => SiblingTier::Half,
        _ => SiblingTier::Full,
    }
}
