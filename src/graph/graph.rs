//! Directed graphs given as adjacency lists. This module provides the
//! [`Graph`] struct.

use crate::graph::NodeId;
use itertools::Itertools;
use std::{
    collections::HashMap,
    fmt::{Display, Formatter},
};

/// A directed graph stored as adjacency lists.
///
/// Both the nodes and the neighbours of each node keep the order in which they
/// were declared, since the traversal order of the search engines depends on
/// it. Every neighbour is itself a node of the graph: adding an edge to an
/// unknown node declares that node with an empty adjacency list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<NodeId>,
    adjacency: HashMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(node, neighbours)` pairs, in declaration order.
    pub fn from_adjacency<I, N, M>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, Vec<M>)>,
        N: Into<NodeId>,
        M: Into<NodeId>,
    {
        let mut graph = Self::new();
        for (node, neighbours) in adjacency {
            let node = node.into();
            graph.add_node(node);
            for neighbour in neighbours {
                graph.add_edge(node, neighbour.into());
            }
        }
        graph
    }

    /// Declare a node. Declaring an existing node is a no-op.
    pub fn add_node(&mut self, node: NodeId) {
        if !self.adjacency.contains_key(&node) {
            self.nodes.push(node);
            self.adjacency.insert(node, vec![]);
        }
    }

    /// Append `to` to the adjacency list of `from`, declaring both nodes if
    /// needed.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.add_node(from);
        self.add_node(to);
        self.adjacency
            .get_mut(&from)
            .expect("node was declared above")
            .push(to);
    }

    /// The neighbours of `node` in declared order. Unknown nodes have none.
    pub fn neighbours(&self, node: &NodeId) -> &[NodeId] {
        self.adjacency
            .get(node)
            .map(|neighbours| neighbours.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.adjacency.contains_key(node)
    }

    /// All nodes in declaration order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.iter().flat_map(move |from| {
            self.neighbours(from)
                .iter()
                .map(move |to| (*from, *to))
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{}: [{}]", node, self.neighbours(node).iter().join(", "))?;
        }
        Ok(())
    }
}
