//! Entry points that set up a problem, run an engine on it and log what
//! happened.

use crate::graph::{EdgeWeights, Graph, GraphError, GraphFile, NodeId};
use crate::maze::{Maze, Position};
use crate::search::{
    heuristics::{MazeHeuristicName, TableHeuristic},
    search_engines::{
        NoObserver, SearchEngineName, SearchObserver, SearchResult, SearchSettings,
    },
    GraphProblem, MazeProblem, SearchError, SearchProblem,
};
use tracing::info;

/// Edge weights and heuristic values for a graph search. Both default to
/// empty tables: unit weights and a zero heuristic.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub weights: EdgeWeights,
    pub heuristic: TableHeuristic,
}

impl SearchOptions {
    pub fn from_graph_file(file: &GraphFile) -> Result<Self, GraphError> {
        Ok(Self {
            weights: file.weights()?,
            heuristic: file.heuristic()?,
        })
    }
}

pub fn search_graph(
    engine: SearchEngineName,
    graph: &Graph,
    start: NodeId,
    goal: Option<NodeId>,
    options: &SearchOptions,
    settings: &SearchSettings,
) -> Result<SearchResult<NodeId>, SearchError> {
    search_graph_observed(engine, graph, start, goal, options, settings, &mut NoObserver)
}

/// [`search_graph`] with an observer that sees every expansion.
pub fn search_graph_observed(
    engine: SearchEngineName,
    graph: &Graph,
    start: NodeId,
    goal: Option<NodeId>,
    options: &SearchOptions,
    settings: &SearchSettings,
    observer: &mut dyn SearchObserver<NodeId>,
) -> Result<SearchResult<NodeId>, SearchError> {
    let problem = GraphProblem::new(graph, start, goal, &options.weights, &options.heuristic)?;
    info!(%engine, %start, ?goal, nodes = graph.len());
    Ok(run(engine, &problem, settings, observer))
}

pub fn search_maze(
    engine: SearchEngineName,
    maze: &Maze,
    heuristic: MazeHeuristicName,
    settings: &SearchSettings,
) -> Result<SearchResult<Position>, SearchError> {
    search_maze_observed(engine, maze, heuristic, settings, &mut NoObserver)
}

/// [`search_maze`] with an observer that sees every expansion.
pub fn search_maze_observed(
    engine: SearchEngineName,
    maze: &Maze,
    heuristic: MazeHeuristicName,
    settings: &SearchSettings,
    observer: &mut dyn SearchObserver<Position>,
) -> Result<SearchResult<Position>, SearchError> {
    let end = maze.end().ok_or(SearchError::MissingEndpoint("end"))?;
    let heuristic = heuristic.create(end);
    let problem = MazeProblem::new(maze, heuristic.as_ref())?;
    info!(%engine, size = maze.size(), open_cells = maze.open_cell_count());
    Ok(run(engine, &problem, settings, observer))
}

fn run<P: SearchProblem>(
    engine: SearchEngineName,
    problem: &P,
    settings: &SearchSettings,
    observer: &mut dyn SearchObserver<P::State>,
) -> SearchResult<P::State> {
    let (result, statistics) = engine.search(problem, settings, observer);
    statistics.finalise_search();
    info!(
        status = %result.status,
        trace_length = result.trace.len(),
        path_length = result.path_length(),
        cost = result.cost,
    );
    result
}
