//! Kinship resolver façade
//!
//! Enumerates paths, classifies them, keeps the canonical one and composes
//! the term. Resolution is read-only over a [`KinGraph`] snapshot.

use crate::{
    classify, select_canonical, sibling_tier, Candidate, Category, GraphBuilder, KinGraph,
    LabelComposer, Modifier, PathEnumerator, PathSet, Relation, ResolverConfig, ResolverError,
    Step,
};
use kinship_domain::traits::RelationshipStore;
use kinship_domain::{Gender, MemberId, Scope};

/// Structured description of how alter is related to ego
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kinship {
    /// Category of the canonical path
    pub category: Category,

    /// Blood relation tier; `None` for direct spouse/partner
    pub relation: Option<Relation>,

    /// Neutral term without modifiers or removal ("Grandparent")
    pub base_term: String,

    /// Cousin degree
    pub degree: Option<u32>,

    /// Cousin removal
    pub removal: Option<u32>,

    /// Step / Co / In-law modifiers applied
    pub modifiers: Vec<Modifier>,

    /// Alter's recorded gender
    pub gender: Gender,

    /// Final label ("Step-great-grandmother")
    pub label: String,

    /// Steps of the canonical path from ego to alter
    pub steps: Vec<Step>,

    /// Members along the canonical path, ego and alter included
    pub via: Vec<MemberId>,

    /// Apex of the blood segment, when the path has one
    pub common_ancestor: Option<MemberId>,
}

/// Result of resolving one ordered pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Ego and alter are the same member
    Identity,

    /// No classifiable path within the search bound
    Unrelated,

    /// A kinship term was found
    Related(Kinship),
}

impl Resolution {
    /// Human-readable label: "Self", "Unrelated" or the composed term
    pub fn label(&self) -> &str {
        match self {
            Resolution::Identity => "Self",
            Resolution::Unrelated => "Unrelated",
            Resolution::Related(kinship) => &kinship.label,
        }
    }

    /// Structured kinship, if related
    pub fn kinship(&self) -> Option<&Kinship> {
        match self {
            Resolution::Related(kinship) => Some(kinship),
            _ => None,
        }
    }

    /// Whether a kinship term was found
    pub fn is_related(&self) -> bool {
        matches!(self, Resolution::Related(_))
    }
}

/// Resolves kinship terms over graph snapshots
///
/// Holds only configuration, so one resolver can serve many snapshots and
/// threads.
#[derive(Debug, Clone)]
pub struct KinshipResolver {
    config: ResolverConfig,
    enumerator: PathEnumerator,
    composer: LabelComposer,
}

impl KinshipResolver {
    /// Create a resolver, validating the configuration
    pub fn new(config: ResolverConfig) -> Result<Self, ResolverError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    /// Resolver with the default configuration
    pub fn default_config() -> Self {
        Self::with_valid_config(ResolverConfig::default())
    }

    fn with_valid_config(config: ResolverConfig) -> Self {
        Self {
            enumerator: PathEnumerator::from_config(&config),
            composer: LabelComposer::new(config.gendered_terms),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve what `alter` is to `ego`
    pub fn resolve(&self, graph: &KinGraph, ego: MemberId, alter: MemberId) -> Resolution {
        let paths = match self.enumerator.find_paths(graph, ego, alter) {
            PathSet::Identity => return Resolution::Identity,
            PathSet::Found(paths) => paths,
        };

        let total = paths.len();
        let candidates: Vec<Candidate> = paths
            .into_iter()
            .filter_map(|path| {
                classify(path.steps()).map(|classification| Candidate {
                    path,
                    classification,
                })
            })
            .collect();

        tracing::debug!(
            "{} of {} paths from {} to {} are classifiable",
            candidates.len(),
            total,
            ego,
            alter
        );

        let Some(canonical) = select_canonical(candidates) else {
            return Resolution::Unrelated;
        };

        match self.describe(graph, canonical) {
            Some(kinship) => {
                tracing::debug!("Canonical path {:?} reads as '{}'", kinship.steps, kinship.label);
                Resolution::Related(kinship)
            }
            None => Resolution::Unrelated,
        }
    }

    /// Label of [`resolve`](Self::resolve)
    pub fn label(&self, graph: &KinGraph, ego: MemberId, alter: MemberId) -> String {
        self.resolve(graph, ego, alter).label().to_string()
    }

    /// Resolve ego against every other member of the snapshot, ordered by id
    pub fn roster(&self, graph: &KinGraph, ego: MemberId) -> Vec<(MemberId, Resolution)> {
        graph
            .members()
            .into_iter()
            .filter(|member| *member != ego)
            .map(|member| (member, self.resolve(graph, ego, member)))
            .collect()
    }

    /// Resolve against a fresh snapshot of `scope` loaded from a store
    pub fn resolve_in_store<S: RelationshipStore>(
        &self,
        store: &S,
        scope: &Scope,
        ego: MemberId,
        alter: MemberId,
    ) -> Result<Resolution, ResolverError>
    where
        S::Error: std::fmt::Display,
    {
        if ego == alter {
            return Ok(Resolution::Identity);
        }
        let graph = GraphBuilder::load(store, scope)?;
        Ok(self.resolve(&graph, ego, alter))
    }

    fn describe(&self, graph: &KinGraph, canonical: Candidate) -> Option<Kinship> {
        let Candidate {
            path,
            classification,
        } = canonical;
        let members = path.members();

        let mut relation = classification.lineage.map(|lineage| lineage.relation());
        let mut common_ancestor = None;

        if let (Some(lineage), Some((first, last))) = (classification.lineage, classification.blood_span) {
            common_ancestor = members.get(first + lineage.up as usize).copied();

            if relation == Some(Relation::Sibling) {
                let tier = sibling_tier(graph, members[first], members[last]);
                relation = relation.map(|r| r.with_sibling_tier(tier));
            }
        }

        let gender = graph.gender(path.alter());
        let term = self
            .composer
            .compose(classification.category, relation, gender)?;

        Some(Kinship {
            category: classification.category,
            relation,
            base_term: term.base_term,
            degree: relation.and_then(|r| r.degree()),
            removal: relation.and_then(|r| r.removal()),
            modifiers: term.modifiers,
            gender,
            label: term.label,
            steps: path.steps().to_vec(),
            via: members.to_vec(),
            common_ancestor,
        })
    }
}

impl Default for KinshipResolver {
    fn default() -> Self {
        Self::default_config()
    }
}
