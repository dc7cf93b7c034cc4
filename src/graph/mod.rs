mod edge_weights;
#[allow(clippy::module_inception)]
mod graph;
mod graph_file;
mod node_id;
pub mod samples;

pub use edge_weights::{parse_edge_key, EdgeWeights, DEFAULT_EDGE_WEIGHT};
pub use graph::Graph;
pub use graph_file::{Adjacency, GraphFile};
pub use node_id::NodeId;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("edge {from}->{to} has weight {weight}, weights must be finite and non-negative")]
    InvalidWeight { from: String, to: String, weight: f64 },
    #[error("node {node} has heuristic value {value}, values must be finite and non-negative")]
    InvalidHeuristic { node: String, value: f64 },
    #[error("malformed edge key {0:?}, expected \"u->v\"")]
    MalformedEdgeKey(String),
    #[error("no coordinates given for node {0}")]
    MissingCoordinates(String),
    #[error("unknown sample graph {0:?}")]
    UnknownSample(String),
    #[error("failed to read graph file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML graph file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to write TOML graph file: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("invalid JSON graph file: {0}")]
    Json(#[from] serde_json::Error),
}
