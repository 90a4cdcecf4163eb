//! Label Composer: relation + category + gender → kinship term

use crate::{Category, Modifier, Relation};
use kinship_domain::Gender;

/// Rendered term with its neutral base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedTerm {
    /// Neutral base term without modifiers or removal ("Great-grandparent")
    pub base_term: String,

    /// Final label ("Step-great-grandmother", "1st cousin once removed")
    pub label: String,

    /// Modifiers applied to the base term
    pub modifiers: Vec<Modifier>,
}

/// Builds kinship terms
///
/// # Examples
///
/// ```
/// use kinship_domain::Gender;
/// use kinship_resolver::{Category, LabelComposer, Relation};
///
/// let composer = LabelComposer::new(true);
/// let term = composer
///     .compose(Category::Step, Some(Relation::Ancestor { generations: 1 }), Gender::Female)
///     .unwrap();
/// assert_eq!(term.label, "Step-mother");
/// assert_eq!(term.base_term, "Parent");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LabelComposer {
    gendered: bool,
}

impl LabelComposer {
    /// Create a composer; `gendered` enables Mother/Father style variants
    pub fn new(gendered: bool) -> Self {
        Self { gendered }
    }

    /// Compose the term for a classified relation
    ///
    /// `relation` is `None` only for direct spouse/partner paths; any other
    /// combination without a relation has no term and yields `None`.
    pub fn compose(
        &self,
        category: Category,
        relation: Option<Relation>,
        gender: Gender,
    ) -> Option<ComposedTerm> {
        let Some(relation) = relation else {
            let term = match category {
                Category::Spouse => "Spouse",
                Category::Partner => "Partner",
                _ => return None,
            };
            return Some(ComposedTerm {
                base_term: term.to_string(),
                label: term.to_string(),
                modifiers: Vec::new(),
            });
        };

        let gender = if self.gendered {
            gender
        } else {
            Gender::Unspecified
        };

        let modifier = category.modifier();
        let prefix = match modifier {
            Some(Modifier::Step) => Some("step"),
            Some(Modifier::Co) => Some("co"),
            _ => None,
        };
        let in_law = modifier == Some(Modifier::InLaw);
        let removal = relation.removal().unwrap_or(0);

        Some(ComposedTerm {
            base_term: render(None, relation.greats(), &noun(relation, Gender::Unspecified), false, 0),
            label: render(prefix, relation.greats(), &noun(relation, gender), in_law, removal),
            modifiers: modifier.into_iter().collect(),
        })
    }
}

/// Noun for a relation, before "Great-" repetitions and modifiers
fn noun(relation: Relation, gender: Gender) -> String {
    let pick = |neutral: &str, male: &str, female: &str| -> String {
        match gender {
            Gender::Male => male.to_string(),
            Gender::Female => female.to_string(),
            Gender::Unspecified => neutral.to_string(),
        }
    };

    match relation {
        Relation::Ancestor { generations: 1 } => pick("Parent", "Father", "Mother"),
        Relation::Ancestor { .. } => pick("Grandparent", "Grandfather", "Grandmother"),
        Relation::Descendant { generations: 1 } => pick("Child", "Son", "Daughter"),
        Relation::Descendant { .. } => pick("Grandchild", "Grandson", "Granddaughter"),
        Relation::Sibling => pick("Sibling", "Brother", "Sister"),
        Relation::HalfSibling => pick("Half-Sibling", "Half-Brother", "Half-Sister"),
        Relation::Pibling { .. } => pick("Pibling", "Uncle", "Aunt"),
        Relation::Nibling { .. } => pick("Nibling", "Nephew", "Niece"),
        Relation::Cousin { degree, .. } => format!("{} cousin", ordinal(degree)),
    }
}

fn render(prefix: Option<&str>, greats: u32, noun: &str, in_law: bool, removal: u32) -> String {
    let mut term = String::new();

    if let Some(prefix) = prefix {
        term.push_str(prefix);
        term.push('-');
    }
    for _ in 0..greats {
        term.push_str("great-");
    }

    if term.is_empty() {
        term.push_str(noun);
    } else {
        term.push_str(&lowercase_first(noun));
    }

    if in_law {
        term.push_str("-in-law");
    }
    if removal > 0 {
        term.push(' ');
        term.push_str(&removal_phrase(removal));
    }

    capitalize_first(&term)
}

/// 1st, 2nd, 3rd, 4th, ..., 11th, 12th, 13th, ..., 21st
fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

fn removal_phrase(removal: u32) -> String {
    match removal {
        1 => "once removed".to_string(),
        2 => "twice removed".to_string(),
        n => format!("{} times removed", n),
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
