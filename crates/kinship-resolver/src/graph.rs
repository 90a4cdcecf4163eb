//! Graph Builder: an immutable, scoped snapshot of the relationship graph
//!
//! Members live in a petgraph arena and are addressed by `NodeIndex`; the
//! `MemberId -> NodeIndex` map is only used at the boundary. Parent edges are
//! stored parent → child, spouse and partner edges once per pair.

use crate::{ResolverError, Step};
use kinship_domain::traits::RelationshipStore;
use kinship_domain::{Gender, MemberId, RelationshipEdge, RelationshipType, Scope};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction as EdgeDirection;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// Node payload
#[derive(Debug, Clone)]
struct MemberNode {
    id: MemberId,
    gender: Gender,
}

/// A neighbour reachable in one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    /// Neighbouring node
    pub node: NodeIndex,

    /// How the neighbour is reached
    pub step: Step,
}

/// Read-only kinship graph for one scope
///
/// Nothing outside the builder can add to it, so a snapshot can be shared
/// across threads and reused for a batch of resolutions.
#[derive(Debug, Clone)]
pub struct KinGraph {
    scope: Scope,
    graph: DiGraph<MemberNode, RelationshipType>,
    member_index: HashMap<MemberId, NodeIndex>,
}

impl KinGraph {
    /// A graph with no members
    pub fn empty(scope: Scope) -> Self {
        Self {
            scope,
            graph: DiGraph::new(),
            member_index: HashMap::new(),
        }
    }

    /// Scope the snapshot was built for
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Get member count
    pub fn member_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get logical edge count (symmetric pairs count once)
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no members
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Whether a member takes part in any edge of the scope
    pub fn contains(&self, id: MemberId) -> bool {
        self.member_index.contains_key(&id)
    }

    /// Find node by member id
    pub fn node(&self, id: MemberId) -> Option<NodeIndex> {
        self.member_index.get(&id).copied()
    }

    /// Member id stored at a node
    pub fn member_id(&self, node: NodeIndex) -> MemberId {
        self.graph[node].id
    }

    /// Gender of a member; unknown members are `Unspecified`
    pub fn gender(&self, id: MemberId) -> Gender {
        self.node(id)
            .map(|node| self.graph[node].gender)
            .unwrap_or_default()
    }

    /// All members, ordered by id
    pub fn members(&self) -> Vec<MemberId> {
        let mut ids: Vec<MemberId> = self.member_index.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Every neighbour of a node with the step that reaches it
    ///
    /// Sorted by step, then by member id, so enumeration order never depends
    /// on insertion order.
    pub fn links(&self, node: NodeIndex) -> Vec<Link> {
        let outgoing = self
            .graph
            .edges_directed(node, EdgeDirection::Outgoing)
            .map(|e| {
                let step = match e.weight() {
                    RelationshipType::Parent => Step::Child,
                    RelationshipType::Spouse => Step::Spouse,
                    RelationshipType::Partner => Step::Partner,
                };
                Link { node: e.target(), step }
            });

        let incoming = self
            .graph
            .edges_directed(node, EdgeDirection::Incoming)
            .map(|e| {
                let step = match e.weight() {
                    RelationshipType::Parent => Step::Parent,
                    RelationshipType::Spouse => Step::Spouse,
                    RelationshipType::Partner => Step::Partner,
                };
                Link { node: e.source(), step }
            });

        let mut links: Vec<Link> = outgoing.chain(incoming).collect();
        links.sort_by_key(|link| (link.step, self.member_id(link.node)));
        links
    }

    /// Direct parents of a member
    pub fn parents(&self, id: MemberId) -> BTreeSet<MemberId> {
        let Some(node) = self.node(id) else {
            return BTreeSet::new();
        };

        self.graph
            .edges_directed(node, EdgeDirection::Incoming)
            .filter(|e| *e.weight() == RelationshipType::Parent)
            .map(|e| self.member_id(e.source()))
            .collect()
    }

    /// Whether `ancestor` can be reached from `descendant` by parent steps only
    ///
    /// Cycle-safe: every node is expanded at most once.
    pub fn is_ancestor(&self, ancestor: MemberId, descendant: MemberId) -> bool {
        let (Some(target), Some(start)) = (self.node(ancestor), self.node(descendant)) else {
            return false;
        };

        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            for edge in self.graph.edges_directed(current, EdgeDirection::Incoming) {
                if *edge.weight() != RelationshipType::Parent {
                    continue;
                }
                if edge.source() == target {
                    return true;
                }
                queue.push_back(edge.source());
            }
        }

        false
    }

    /// Whether an equivalent edge is already part of the snapshot
    pub fn contains_edge(&self, edge: &RelationshipEdge) -> bool {
        let (Some(from), Some(to)) = (self.node(edge.from), self.node(edge.to)) else {
            return false;
        };

        let connects = |a: NodeIndex, b: NodeIndex| {
            self.graph
                .edges_connecting(a, b)
                .any(|e| *e.weight() == edge.relationship_type)
        };

        connects(from, to) || (edge.relationship_type.is_symmetric() && connects(to, from))
    }
}

/// Builds a [`KinGraph`] from relationship edges
///
/// # Examples
///
/// ```
/// use kinship_domain::{MemberId, RelationshipEdge, Scope};
/// use kinship_resolver::GraphBuilder;
///
/// let scope = Scope::new("family");
/// let a = MemberId::from_value(1);
/// let b = MemberId::from_value(2);
///
/// let mut builder = GraphBuilder::new(scope.clone());
/// builder.add_edge(RelationshipEdge::spouse(scope.clone(), a, b));
/// // The reverse row of a symmetric edge is the same logical edge
/// builder.add_edge(RelationshipEdge::spouse(scope, b, a));
///
/// let graph = builder.build();
/// assert_eq!(graph.member_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
pub struct GraphBuilder {
    graph: KinGraph,
    seen: HashSet<(MemberId, MemberId, RelationshipType)>,
    skipped: usize,
}

impl GraphBuilder {
    /// Start an empty builder for a scope
    pub fn new(scope: Scope) -> Self {
        Self {
            graph: KinGraph::empty(scope),
            seen: HashSet::new(),
            skipped: 0,
        }
    }

    /// Load the snapshot for `scope` from a relationship store
    ///
    /// An empty scope yields an empty graph without touching the store.
    pub fn load<S: RelationshipStore>(store: &S, scope: &Scope) -> Result<KinGraph, ResolverError>
    where
        S::Error: std::fmt::Display,
    {
        if scope.is_empty() {
            tracing::debug!("Empty scope requested, returning an empty graph");
            return Ok(KinGraph::empty(scope.clone()));
        }

        let edges = store
            .list_edges(scope)
            .map_err(|e| ResolverError::Store(e.to_string()))?;

        let mut builder = Self::new(scope.clone());
        for edge in edges {
            builder.add_edge(edge);
        }

        for id in builder.graph.members() {
            let gender = store
                .get_gender(id)
                .map_err(|e| ResolverError::Store(e.to_string()))?;
            builder.set_gender(id, gender);
        }

        Ok(builder.build())
    }

    /// Add an edge, returning whether it changed the graph
    ///
    /// Edges from another scope, self-references and repeats of an existing
    /// logical edge are dropped.
    pub fn add_edge(&mut self, edge: RelationshipEdge) -> bool {
        if edge.scope != self.graph.scope {
            tracing::debug!(
                "Skipping edge from scope '{}' while building '{}'",
                edge.scope,
                self.graph.scope
            );
            self.skipped += 1;
            return false;
        }

        if edge.is_self_reference() {
            tracing::warn!(
                "Skipping self-referencing {} edge on member {}",
                edge.relationship_type.as_str(),
                edge.from
            );
            self.skipped += 1;
            return false;
        }

        let key = edge.pair_key();
        if !self.seen.insert(key) {
            return false;
        }

        let (from, to, relationship_type) = key;
        let from = self.ensure_member(from);
        let to = self.ensure_member(to);
        self.graph.graph.add_edge(from, to, relationship_type);
        true
    }

    /// Record the gender of a member already present in the graph
    pub fn set_gender(&mut self, id: MemberId, gender: Gender) {
        if let Some(node) = self.graph.node(id) {
            self.graph.graph[node].gender = gender;
        }
    }

    /// Finish building
    pub fn build(self) -> KinGraph {
        tracing::info!(
            "Built kinship graph for scope '{}': {} members, {} edges ({} skipped)",
            self.graph.scope,
            self.graph.member_count(),
            self.graph.edge_count(),
            self.skipped
        );
        self.graph
    }

    fn ensure_member(&mut self, id: MemberId) -> NodeIndex {
        if let Some(node) = self.graph.node(id) {
            return node;
        }
        let node = self.graph.graph.add_node(MemberNode {
            id,
            gender: Gender::Unspecified,
        });
        self.graph.member_index.insert(id, node);
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: u128) -> MemberId {
        MemberId::from_value(value)
    }

    fn scope() -> Scope {
        Scope::new("family")
    }

    #[test]
    fn test_symmetric_edges_deduplicated() {
        let mut builder = GraphBuilder::new(scope());
        assert!(builder.add_edge(RelationshipEdge::spouse(scope(), id(1), id(2))));
        assert!(!builder.add_edge(RelationshipEdge::spouse(scope(), id(2), id(1))));
        assert!(builder.add_edge(RelationshipEdge::partner(scope(), id(2), id(1))));

        let graph = builder.build();
        assert_eq!(graph.edge_count(), 2);

        let links = graph.links(graph.node(id(1)).unwrap());
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].step, Step::Spouse);
        assert_eq!(links[1].step, Step::Partner);
    }

    #[test]
    fn test_out_of_scope_and_self_edges_skipped() {
        let mut builder = GraphBuilder::new(scope());
        assert!(!builder.add_edge(RelationshipEdge::parent(Scope::new("club"), id(1), id(2))));
        assert!(!builder.add_edge(RelationshipEdge::parent(scope(), id(3), id(3))));

        let graph = builder.build();
        assert!(graph.is_empty());
        assert!(!graph.contains(id(1)));
    }

    #[test]
    fn test_parent_links_have_direction() {
        let mut builder = GraphBuilder::new(scope());
        builder.add_edge(RelationshipEdge::parent(scope(), id(1), id(2)));
        let graph = builder.build();

        let parent_links = graph.links(graph.node(id(1)).unwrap());
        assert_eq!(parent_links.len(), 1);
        assert_eq!(parent_links[0].step, Step::Child);

        let child_links = graph.links(graph.node(id(2)).unwrap());
        assert_eq!(child_links[0].step, Step::Parent);
        assert_eq!(graph.member_id(child_links[0].node), id(1));
    }

    #[test]
    fn test_parents_set() {
        let mut builder = GraphBuilder::new(scope());
        builder.add_edge(RelationshipEdge::parent(scope(), id(1), id(3)));
        builder.add_edge(RelationshipEdge::parent(scope(), id(2), id(3)));
        builder.add_edge(RelationshipEdge::spouse(scope(), id(1), id(2)));
        let graph = builder.build();

        let parents: Vec<MemberId> = graph.parents(id(3)).into_iter().collect();
        assert_eq!(parents, vec![id(1), id(2)]);
        assert!(graph.parents(id(1)).is_empty());
        assert!(graph.parents(id(42)).is_empty());
    }

    #[test]
    fn test_is_ancestor_tolerates_cycles() {
        let mut builder = GraphBuilder::new(scope());
        builder.add_edge(RelationshipEdge::parent(scope(), id(1), id(2)));
        builder.add_edge(RelationshipEdge::parent(scope(), id(2), id(3)));
        // Malformed: 3 is listed as its own grandparent
        builder.add_edge(RelationshipEdge::parent(scope(), id(3), id(1)));
        builder.add_edge(RelationshipEdge::parent(scope(), id(4), id(5)));
        let graph = builder.build();

        assert!(graph.is_ancestor(id(1), id(3)));
        assert!(graph.is_ancestor(id(3), id(2)));
        assert!(!graph.is_ancestor(id(4), id(1)));
    }

    #[test]
    fn test_contains_edge_either_orientation() {
        let mut builder = GraphBuilder::new(scope());
        builder.add_edge(RelationshipEdge::spouse(scope(), id(1), id(2)));
        builder.add_edge(RelationshipEdge::parent(scope(), id(1), id(3)));
        let graph = builder.build();

        assert!(graph.contains_edge(&RelationshipEdge::spouse(scope(), id(2), id(1))));
        assert!(graph.contains_edge(&RelationshipEdge::parent(scope(), id(1), id(3))));
        assert!(!graph.contains_edge(&RelationshipEdge::parent(scope(), id(3), id(1))));
        assert!(!graph.contains_edge(&RelationshipEdge::partner(scope(), id(1), id(2))));
    }

    #[test]
    fn test_gender_defaults_to_unspecified() {
        let mut builder = GraphBuilder::new(scope());
        builder.add_edge(RelationshipEdge::parent(scope(), id(1), id(2)));
        builder.set_gender(id(1), Gender::Female);
        builder.set_gender(id(9), Gender::Male);
        let graph = builder.build();

        assert_eq!(graph.gender(id(1)), Gender::Female);
        assert_eq!(graph.gender(id(2)), Gender::Unspecified);
        assert_eq!(graph.gender(id(9)), Gender::Unspecified);
    }
}
