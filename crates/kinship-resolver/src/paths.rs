//! Path Enumerator: every simple path from ego to alter up to a depth bound
//!
//! Breadth-first, so paths come out shortest first and truncation at
//! `max_paths` keeps the shortest ones. A path never revisits a member, which
//! also makes malformed cyclic parent data terminate.

use crate::{KinGraph, KinPath, ResolverConfig, Step};
use kinship_domain::MemberId;
use petgraph::graph::NodeIndex;
use std::collections::VecDeque;

/// Outcome of enumerating paths between two members
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSet {
    /// Ego and alter are the same member
    Identity,

    /// Simple paths found, shortest first; empty when unconnected
    Found(Vec<KinPath>),
}

impl PathSet {
    /// Whether no path connects the two members
    pub fn is_unrelated(&self) -> bool {
        matches!(self, PathSet::Found(paths) if paths.is_empty())
    }

    /// Enumerated paths (none for `Identity`)
    pub fn paths(&self) -> &[KinPath] {
        match self {
            PathSet::Identity => &[],
            PathSet::Found(paths) => paths,
        }
    }

    /// Number of enumerated paths
    pub fn len(&self) -> usize {
        self.paths().len()
    }

    /// Whether no path was enumerated
    pub fn is_empty(&self) -> bool {
        self.paths().is_empty()
    }
}

struct Frontier {
    nodes: Vec<NodeIndex>,
    steps: Vec<Step>,
}

/// Depth- and count-bounded simple path search
#[derive(Debug, Clone, Copy)]
pub struct PathEnumerator {
    max_depth: usize,
    max_paths: usize,
}

impl PathEnumerator {
    /// Create an enumerator with explicit bounds
    pub fn new(max_depth: usize, max_paths: usize) -> Self {
        Self {
            max_depth,
            max_paths,
        }
    }

    /// Create an enumerator from resolver configuration
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.max_depth, config.max_paths)
    }

    /// Enumerate simple paths from `ego` to `alter`
    ///
    /// Members absent from the graph have no paths. A path ends as soon as
    /// it reaches alter; it is never extended through alter.
    pub fn find_paths(&self, graph: &KinGraph, ego: MemberId, alter: MemberId) -> PathSet {
        if ego == alter {
            return PathSet::Identity;
        }

        let (Some(start), Some(goal)) = (graph.node(ego), graph.node(alter)) else {
            tracing::debug!("No path: {} or {} is not in scope '{}'", ego, alter, graph.scope());
            return PathSet::Found(Vec::new());
        };

        let mut found = Vec::new();
        let mut queue = VecDeque::from([Frontier {
            nodes: vec![start],
            steps: Vec::new(),
        }]);

        while let Some(entry) = queue.pop_front() {
            if entry.steps.len() >= self.max_depth {
                continue;
            }
            let Some(&current) = entry.nodes.last() else {
                continue;
            };

            for link in graph.links(current) {
                if entry.nodes.contains(&link.node) {
                    continue;
                }

                let mut nodes = entry.nodes.clone();
                nodes.push(link.node);
                let mut steps = entry.steps.clone();
                steps.push(link.step);

                if link.node != goal {
                    queue.push_back(Frontier { nodes, steps });
                    continue;
                }

                let members = nodes.iter().map(|node| graph.member_id(*node)).collect();
                if let Some(path) = KinPath::new(members, steps) {
                    found.push(path);
                }

                if found.len() >= self.max_paths {
                    tracing::warn!(
                        "Path limit of {} reached between {} and {}; keeping the shortest paths",
                        self.max_paths,
                        ego,
                        alter
                    );
                    return PathSet::Found(found);
                }
            }
        }

        tracing::debug!("Found {} paths between {} and {}", found.len(), ego, alter);
        PathSet::Found(found)
    }
}

impl Default for PathEnumerator {
    fn default() -> Self {
        Self::from_config(&ResolverConfig::default())
    }
}

/// Enumerate simple paths up to `max_depth` steps with the default path limit
pub fn find_paths(graph: &KinGraph, ego: MemberId, alter: MemberId, max_depth: usize) -> PathSet {
    let max_paths = ResolverConfig::default().max_paths;
    PathEnumerator::new(max_depth, max_paths).find_paths(graph, ego, alter)
}
