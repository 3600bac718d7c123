//! Call Graph Structures
//!
//! A directed multigraph of method identities. Each edge carries the
//! per-caller call-site sequence number assigned while parsing, which
//! doubles as the deterministic tie-break for traversal and tree merges.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use crate::domain::method::MethodRef;

/// A directed caller → callee edge.
///
/// Equality and hashing cover origin, destination, and order, so two
/// records producing literally the same tuple collapse in the adjacency
/// set while edges differing in any component stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub origin: MethodRef,
    pub destination: MethodRef,
    pub order: u32,
}

impl Edge {
    pub fn new(origin: MethodRef, destination: MethodRef, order: u32) -> Self {
        Edge {
            origin,
            destination,
            order,
        }
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    // Smallest order first; destination and origin identities keep the
    // ordering total and consistent with Eq.
    fn cmp(&self, other: &Self) -> Ordering {
        self.order
            .cmp(&other.order)
            .then_with(|| self.destination.cmp(&other.destination))
            .then_with(|| self.origin.cmp(&other.origin))
    }
}

/// The call graph itself: per-caller sets of outgoing edges.
/// Built once, then read-only for the whole search phase.
#[derive(Debug, Default)]
pub struct CallGraph {
    adjacency: HashMap<MethodRef, BTreeSet<Edge>>,
}

impl CallGraph {
    /// Construct a graph from any number of chained edge sources.
    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut graph = CallGraph::default();
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.adjacency
            .entry(edge.origin.clone())
            .or_default()
            .insert(edge);
    }

    /// Outgoing edges of a node, smallest order first. Unknown nodes
    /// yield an empty iterator.
    pub fn outgoing(&self, method: &MethodRef) -> impl Iterator<Item = &Edge> {
        self.adjacency.get(method).into_iter().flatten()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }
}
