pub mod heuristics;
pub mod problem_formulations;
mod reconstruct;
mod replay;
mod runner;
pub mod search_engines;
mod validate;
mod verbosity;

pub use heuristics::{Heuristic, HeuristicValue, MazeHeuristicName, TableHeuristic};
pub use problem_formulations::{GraphProblem, MazeProblem, SearchProblem};
pub use reconstruct::reconstruct_path;
pub use replay::{ReplayError, ReplayMode, StepOutcome, StepReplay};
pub use runner::{
    search_graph, search_graph_observed, search_maze, search_maze_observed, SearchOptions,
};
pub use search_engines::{
    CancellationToken, NoObserver, NodeScores, PacedObserver, ParentPolicy, SearchEngineName,
    SearchObserver, SearchResult, SearchSettings, SearchStatus,
};
pub use validate::{validate_path, validate_traversal, PathError};
pub use verbosity::Verbosity;

use crate::graph::NodeId;
use crate::maze::Position;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("node {0} is not in the graph")]
    UnknownNode(NodeId),
    #[error("the maze has no {0} cell")]
    MissingEndpoint(&'static str),
    #[error("endpoint {0} is a wall")]
    BlockedEndpoint(Position),
}
