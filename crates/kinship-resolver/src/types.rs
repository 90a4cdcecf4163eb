//! Path vocabulary shared by the resolver stages

use kinship_domain::{MemberId, RelationshipType};
use std::fmt;

/// Traversal direction of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward ancestors
    Up,

    /// Between partners, same generation
    Across,

    /// Toward descendants
    Down,
}

/// One typed step along a path, read from the ego's side
///
/// Declaration order is the order links are visited in during enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    /// Move from a child to one of its parents
    Parent,

    /// Move from a parent to one of its children
    Child,

    /// Move across a marriage
    Spouse,

    /// Move across an unmarried partnership
    Partner,
}

impl Step {
    /// Normalized token used for tie-breaking and fixtures
    pub fn token(&self) -> &'static str {
        match self {
            Step::Parent => "parent",
            Step::Child => "child",
            Step::Spouse => "spouse",
            Step::Partner => "partner",
        }
    }

    /// Parse a normalized token
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "parent" => Some(Step::Parent),
            "child" => Some(Step::Child),
            "spouse" => Some(Step::Spouse),
            "partner" => Some(Step::Partner),
            _ => None,
        }
    }

    /// Direction of travel
    pub fn direction(&self) -> Direction {
        match self {
            Step::Parent => Direction::Up,
            Step::Child => Direction::Down,
            Step::Spouse | Step::Partner => Direction::Across,
        }
    }

    /// The edge type the step walks over
    pub fn relationship_type(&self) -> RelationshipType {
        match self {
            Step::Parent | Step::Child => RelationshipType::Parent,
            Step::Spouse => RelationshipType::Spouse,
            Step::Partner => RelationshipType::Partner,
        }
    }

    /// Whether the step stays within one generation
    pub fn is_lateral(&self) -> bool {
        self.direction() == Direction::Across
    }

    /// The same edge walked the other way
    pub fn inverse(&self) -> Step {
        match self {
            Step::Parent => Step::Child,
            Step::Child => Step::Parent,
            lateral => *lateral,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A simple path from ego to alter
///
/// `members[k]` and `members[k + 1]` are joined by `steps[k]`; no member
/// appears twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KinPath {
    members: Vec<MemberId>,
    steps: Vec<Step>,
}

impl KinPath {
    /// Build a path from its member chain and steps
    ///
    /// Returns `None` unless there is exactly one more member than steps.
    pub fn new(members: Vec<MemberId>, steps: Vec<Step>) -> Option<Self> {
        if members.len() != steps.len() + 1 {
            return None;
        }
        Some(Self { members, steps })
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the path has no steps (ego is alter)
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps from ego to alter
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Members from ego to alter, both included
    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    /// First member
    pub fn ego(&self) -> MemberId {
        self.members[0]
    }

    /// Last member
    pub fn alter(&self) -> MemberId {
        self.members[self.members.len() - 1]
    }

    /// Normalized token sequence, e.g. `["parent", "parent", "child", "child"]`
    pub fn tokens(&self) -> Vec<&'static str> {
        self.steps.iter().map(Step::token).collect()
    }

    /// The same path walked from alter back to ego
    pub fn reversed(&self) -> Self {
        Self {
            members: self.members.iter().rev().copied().collect(),
            steps: self.steps.iter().rev().map(Step::inverse).collect(),
        }
    }
}

/// Category assigned to a path by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Only parent/child steps
    Blood,

    /// A single spouse step
    Spouse,

    /// A single partner step
    Partner,

    /// Through the spouse of an ancestor, or the descendants of a spouse
    Step,

    /// As `Step`, through a partner instead of a spouse
    Co,

    /// Through the spouse of a blood relative, or the blood relatives of a spouse
    InLaw,
}

impl Category {
    /// Priority used by the canonicalizer (lower wins)
    pub fn rank(&self) -> u8 {
        match self {
            Category::Blood => 0,
            Category::Spouse | Category::Partner => 1,
            Category::Step | Category::Co => 2,
            Category::InLaw => 3,
        }
    }

    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Blood => "blood",
            Category::Spouse => "spouse",
            Category::Partner => "partner",
            Category::Step => "step",
            Category::Co => "co",
            Category::InLaw => "in_law",
        }
    }

    /// Term modifier implied by the category
    pub fn modifier(&self) -> Option<Modifier> {
        match self {
            Category::Step => Some(Modifier::Step),
            Category::Co => Some(Modifier::Co),
            Category::InLaw => Some(Modifier::InLaw),
            Category::Blood | Category::Spouse | Category::Partner => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modifier attached to a base term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// "Step-" prefix
    Step,

    /// "Co-" prefix
    Co,

    /// "-in-law" suffix
    InLaw,
}

impl Modifier {
    /// Get the modifier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Step => "step",
            Modifier::Co => "co",
            Modifier::InLaw => "in_law",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for step in [Step::Parent, Step::Child, Step::Spouse, Step::Partner] {
            assert_eq!(Step::from_token(step.token()), Some(step));
        }
        assert_eq!(Step::from_token("sibling"), None);
    }

    #[test]
    fn test_path_requires_consistent_lengths() {
        let a = MemberId::from_value(1);
        let b = MemberId::from_value(2);

        assert!(KinPath::new(vec![a, b], vec![Step::Parent]).is_some());
        assert!(KinPath::new(vec![a], vec![Step::Parent]).is_none());
    }

    #[test]
    fn test_reversed_path_inverts_steps() {
        let ids: Vec<MemberId> = (1..=4).map(MemberId::from_value).collect();
        let path = KinPath::new(ids.clone(), vec![Step::Parent, Step::Spouse, Step::Child]).unwrap();

        let back = path.reversed();
        assert_eq!(back.ego(), ids[3]);
        assert_eq!(back.alter(), ids[0]);
        assert_eq!(back.tokens(), vec!["parent", "spouse", "child"]);
    }

    #[test]
    fn test_category_ranks() {
        assert!(Category::Blood.rank() < Category::Spouse.rank());
        assert_eq!(Category::Spouse.rank(), Category::Partner.rank());
        assert!(Category::Partner.rank() < Category::Step.rank());
        assert_eq!(Category::Step.rank(), Category::Co.rank());
        assert!(Category::Co.rank() < Category::InLaw.rank());
    }
}
