use crate::graph::{GraphError, NodeId};
use std::collections::HashMap;

/// Weight used for every edge that has no explicit entry.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.;

/// Costs of directed edges. Edges without an entry cost
/// [`DEFAULT_EDGE_WEIGHT`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeWeights {
    weights: HashMap<(NodeId, NodeId), f64>,
}

impl EdgeWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cost of the edge `from -> to`. Weights must be finite and
    /// non-negative.
    pub fn insert(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<(), GraphError> {
        if !weight.is_finite() || weight < 0. {
            return Err(GraphError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }
        self.weights.insert((from, to), weight);
        Ok(())
    }

    /// Parse an edge key of the form `"u->v"` and set its weight.
    pub fn insert_keyed(&mut self, key: &str, weight: f64) -> Result<(), GraphError> {
        let (from, to) = parse_edge_key(key)?;
        self.insert(from, to, weight)
    }

    pub fn get(&self, from: &NodeId, to: &NodeId) -> f64 {
        self.weights
            .get(&(*from, *to))
            .copied()
            .unwrap_or(DEFAULT_EDGE_WEIGHT)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(NodeId, NodeId), &f64)> {
        self.weights.iter()
    }
}

/// Split `"u->v"` into its two endpoints. Whitespace around the names is
/// ignored.
pub fn parse_edge_key(key: &str) -> Result<(NodeId, NodeId), GraphError> {
    match key.split_once("->") {
        Some((from, to)) if !from.trim().is_empty() && !to.trim().is_empty() => {
            Ok((NodeId::new(from.trim()), NodeId::new(to.trim())))
        }
        _ => Err(GraphError::MalformedEdgeKey(key.to_string())),
    }
}
