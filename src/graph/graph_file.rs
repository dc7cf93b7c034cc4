//! Graph files describe a search exercise: the graph, its start and goal and,
//! optionally, edge weights and heuristic values. They can be written as TOML
//! or JSON:
//!
//! ```toml
//! start = "A"
//! goal = "D"
//!
//! [graph]
//! A = ["B", "C"]
//! B = ["D"]
//! C = ["D"]
//!
//! [weights]
//! "A->B" = 1
//! "A->C" = 4
//!
//! [heuristic]
//! A = 2
//! ```
//!
//! When `heuristic` is absent but `coordinates` are given, the heuristic is the
//! straight-line distance of each node to the goal.

use crate::graph::{EdgeWeights, Graph, GraphError, NodeId};
use crate::search::heuristics::TableHeuristic;
use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::{collections::BTreeMap, fmt, fs, path::Path};

/// Adjacency lists in the order they appear in the file. A plain map would
/// lose the declaration order, which decides the order of traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency(pub Vec<(String, Vec<String>)>);

impl Serialize for Adjacency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (node, neighbours) in &self.0 {
            map.serialize_entry(node, neighbours)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Adjacency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AdjacencyVisitor;

        impl<'de> Visitor<'de> for AdjacencyVisitor {
            type Value = Adjacency;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map from node names to lists of neighbour names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((node, neighbours)) = access.next_entry::<String, Vec<String>>()? {
                    entries.push((node, neighbours));
                }
                Ok(Adjacency(entries))
            }
        }

        deserializer.deserialize_map(AdjacencyVisitor)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct GraphFile {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    pub graph: Adjacency,
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,
    #[serde(default)]
    pub heuristic: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub coordinates: BTreeMap<String, (f64, f64)>,
}

impl GraphFile {
    /// Load a graph file, choosing the format by extension: `.json` files are
    /// read as JSON, everything else as TOML.
    pub fn from_path(path: &Path) -> Result<Self, GraphError> {
        let contents = fs::read_to_string(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            _ => Self::from_toml_str(&contents),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, GraphError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_toml_string(&self) -> Result<String, GraphError> {
        Ok(toml::to_string(self)?)
    }

    pub fn start(&self) -> NodeId {
        NodeId::new(&self.start)
    }

    pub fn goal(&self) -> Option<NodeId> {
        self.goal.as_deref().map(NodeId::new)
    }

    pub fn graph(&self) -> Graph {
        Graph::from_adjacency(
            self.graph
                .0
                .iter()
                .map(|(node, neighbours)| {
                    (
                        node.as_str(),
                        neighbours.iter().map(String::as_str).collect::<Vec<&str>>(),
                    )
                }),
        )
    }

    pub fn weights(&self) -> Result<EdgeWeights, GraphError> {
        let mut weights = EdgeWeights::new();
        for (key, &weight) in &self.weights {
            weights.insert_keyed(key, weight)?;
        }
        Ok(weights)
    }

    /// The heuristic table of the file. Explicit values win over coordinates;
    /// with neither, every node estimates 0.
    pub fn heuristic(&self) -> Result<TableHeuristic, GraphError> {
        if !self.heuristic.is_empty() {
            let mut table = TableHeuristic::new();
            for (node, &value) in &self.heuristic {
                table.insert(NodeId::new(node), value)?;
            }
            return Ok(table);
        }
        match (&self.goal, self.coordinates.is_empty()) {
            (Some(goal), false) => {
                let coordinates = self
                    .coordinates
                    .iter()
                    .map(|(node, &point)| (NodeId::new(node), point));
                TableHeuristic::from_coordinates(coordinates, &NodeId::new(goal))
            }
            _ => Ok(TableHeuristic::new()),
        }
    }
}
