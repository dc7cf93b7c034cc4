mod astar;
mod bfs;
mod dfs;
mod observer;
mod search_engine;
mod search_node;
mod search_result;
mod search_space;
mod search_statistics;
mod termination_condition;

pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use observer::{NoObserver, PacedObserver, SearchObserver};
pub use search_engine::{ParentPolicy, SearchEngine, SearchEngineName, SearchSettings};
pub use search_node::{SearchNode, SearchNodeStatus};
pub use search_result::{NodeScores, SearchResult, SearchStatus};
pub use search_space::{SearchSpace, StateId, NO_STATE};
pub use search_statistics::SearchStatistics;
pub use termination_condition::{CancellationToken, TerminationCondition};
