//! A* search

use crate::search::{
    heuristics::HeuristicValue,
    search_engines::{
        SearchEngine, SearchNodeStatus, SearchObserver, SearchResult, SearchSpace,
        SearchStatistics, SearchStatus, StateId, TerminationCondition,
    },
    SearchProblem,
};
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use tracing::{debug, info};

/// A* search. The open list is ordered by `f = g + h`; among equal `f` the
/// node discovered first wins. Expanded nodes are never reopened, so paths
/// are optimal when the heuristic is consistent.
#[derive(Debug, Default)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for AStar {
    fn search<P: SearchProblem>(
        &mut self,
        problem: &P,
        termination: &mut TerminationCondition,
        observer: &mut dyn SearchObserver<P::State>,
    ) -> (SearchResult<P::State>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut open_list: PriorityQueue<StateId, Reverse<(HeuristicValue, StateId)>> =
            PriorityQueue::new();
        let initial_state = problem.initial_state();
        let mut search_space = SearchSpace::new(initial_state);
        let root_node = search_space.get_root_node_mut();
        root_node.open(OrderedFloat(0.), problem.heuristic(&initial_state));
        info!(initial_heuristic_value = root_node.get_h().into_inner());
        open_list.push(
            root_node.get_state_id(),
            Reverse((root_node.get_f(), root_node.get_state_id())),
        );
        let mut trace = vec![];

        while let Some((sid, _)) = open_list.pop() {
            if let Some(status) = termination.should_terminate() {
                return (search_space.into_result(status, trace, None), statistics);
            }
            let node = search_space.get_node_mut(sid);
            node.close();
            let g_value = node.get_g();
            let state = *search_space.get_state(sid);
            trace.push(state);
            statistics.increment_expanded_nodes();
            termination.register_expansion();
            debug!(?state, step = trace.len(), "expanding");
            observer.on_expand(&state, trace.len());

            if problem.is_goal(&state) {
                return (
                    search_space.into_result(SearchStatus::GoalReached, trace, Some(sid)),
                    statistics,
                );
            }

            for (successor, cost) in problem.successors(&state) {
                let child_node = search_space.insert_or_get_node(successor);
                let tentative_g = g_value + cost;
                match child_node.get_status() {
                    SearchNodeStatus::Closed => continue,
                    SearchNodeStatus::New => {
                        statistics.increment_generated_nodes(1);
                        child_node.open(tentative_g, problem.heuristic(&successor));
                    }
                    SearchNodeStatus::Open => {
                        if tentative_g >= child_node.get_g() {
                            continue;
                        }
                        statistics.increment_improved_nodes();
                        child_node.open(tentative_g, child_node.get_h());
                    }
                }
                child_node.set_parent(sid);
                let child_id = child_node.get_state_id();
                open_list.push(child_id, Reverse((child_node.get_f(), child_id)));
            }
        }

        let status = if problem.has_goal() {
            SearchStatus::Unreachable
        } else {
            SearchStatus::Exhausted
        };
        (search_space.into_result(status, trace, None), statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeWeights, Graph, GraphFile, NodeId};
    use crate::search::{
        heuristics::TableHeuristic, search_engines::NoObserver, CancellationToken, GraphProblem,
    };
    use crate::test_utils::*;

    fn names(nodes: &[NodeId]) -> Vec<&str> {
        nodes.iter().map(|node| node.as_str()).collect()
    }

    fn run_with_statistics(
        graph: &Graph,
        weights: &EdgeWeights,
        heuristic: &TableHeuristic,
        start: &str,
        goal: Option<&str>,
    ) -> (SearchResult<NodeId>, SearchStatistics) {
        let problem =
            GraphProblem::new(graph, start.into(), goal.map(Into::into), weights, heuristic)
                .unwrap();
        let mut termination = TerminationCondition::new(CancellationToken::new(), None, None);
        AStar::new().search(&problem, &mut termination, &mut NoObserver)
    }

    fn run(
        graph: &Graph,
        weights: &EdgeWeights,
        heuristic: &TableHeuristic,
        start: &str,
        goal: &str,
    ) -> SearchResult<NodeId> {
        run_with_statistics(graph, weights, heuristic, start, Some(goal)).0
    }

    fn sample(text: &str) -> (Graph, EdgeWeights, TableHeuristic) {
        let file = GraphFile::from_toml_str(text).unwrap();
        (
            file.graph(),
            file.weights().unwrap(),
            file.heuristic().unwrap(),
        )
    }

    #[test]
    fn diamond_prefers_cheap_branch() {
        let (graph, weights, heuristic) = diamond();
        let result = run(&graph, &weights, &heuristic, "A", "D");
        assert_eq!(result.status, SearchStatus::GoalReached);
        assert_eq!(names(&result.path), vec!["A", "B", "D"]);
        assert_eq!(result.cost, 2.);
        assert_eq!(result.scores[&NodeId::from("D")].g, 2.);
    }

    #[test]
    fn improves_open_nodes() {
        // C is first reached at cost 5, then at cost 2 through B
        let graph = Graph::from_adjacency([
            ("A", vec!["C", "B"]),
            ("B", vec!["C"]),
            ("C", vec!["D"]),
        ]);
        let mut weights = EdgeWeights::new();
        weights.insert_keyed("A->C", 5.).unwrap();
        let heuristic = TableHeuristic::new();
        let (result, statistics) =
            run_with_statistics(&graph, &weights, &heuristic, "A", Some("D"));
        assert_eq!(names(&result.path), vec!["A", "B", "C", "D"]);
        assert_eq!(result.cost, 3.);
        assert_eq!(result.parents[&NodeId::from("C")], NodeId::from("B"));
        assert_eq!(statistics.improved_nodes(), 1);
        assert_eq!(statistics.generated_nodes(), 3);
        assert_eq!(statistics.expanded_nodes(), 4);
    }

    #[test]
    fn exhausts_without_goal() {
        let (graph, weights, heuristic) = sample(BINARY_TREE_GRAPH_TEXT);
        let (result, statistics) = run_with_statistics(&graph, &weights, &heuristic, "A", None);
        assert_eq!(result.status, SearchStatus::Exhausted);
        assert_eq!(
            names(&result.trace),
            vec!["A", "B", "C", "D", "E", "F", "G", "H"]
        );
        assert!(result.path.is_empty());
        assert!(result.cost.is_infinite());
        assert_eq!(statistics.expanded_nodes(), 8);
        assert_eq!(statistics.improved_nodes(), 0);
    }

    #[test]
    fn unreachable_goal() {
        let (graph, weights, heuristic) = sample(DISCONNECTED_GRAPH_TEXT);
        let result = run(&graph, &weights, &heuristic, "A", "H");
        assert_eq!(result.status, SearchStatus::Unreachable);
        assert_eq!(names(&result.trace), vec!["A", "B", "C", "D"]);
        assert!(result.path.is_empty());
        assert!(result.cost.is_infinite());
        assert!(!result.found_goal());
        assert_eq!(result.path_length(), 0);
        assert_eq!(result.path_to(NodeId::from("H")), None);
        assert_eq!(
            result.path_to(NodeId::from("D")),
            Some(vec![NodeId::from("A"), NodeId::from("B"), NodeId::from("D")])
        );
    }

    #[test]
    fn ties_go_to_earliest_discovered() {
        let graph = Graph::from_adjacency([("A", vec!["B", "C"]), ("B", vec!["D"]), ("C", vec!["D"])]);
        let weights = EdgeWeights::new();
        let heuristic = TableHeuristic::new();
        let result = run(&graph, &weights, &heuristic, "A", "D");
        assert_eq!(names(&result.trace), vec!["A", "B", "C", "D"]);
        assert_eq!(names(&result.path), vec!["A", "B", "D"]);
    }

    #[test]
    fn fork_sample() {
        let (graph, weights, heuristic) = sample(FORK_GRAPH_TEXT);
        let result = run(&graph, &weights, &heuristic, "A", "H");
        assert_eq!(names(&result.trace), vec!["A", "B", "C", "D", "F", "G", "H"]);
        assert_eq!(names(&result.path), vec!["A", "C", "F", "H"]);
        assert_eq!(result.cost, 7.);
    }
}
