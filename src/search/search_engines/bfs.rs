//! Breadth first search

use crate::search::{
    search_engines::{
        SearchEngine, SearchNodeStatus, SearchObserver, SearchResult, SearchSpace,
        SearchStatistics, SearchStatus, TerminationCondition,
    },
    SearchProblem,
};
use ordered_float::OrderedFloat;
use std::collections::VecDeque;
use tracing::debug;

/// Breadth first search. A node counts as visited as soon as it is
/// enqueued, and its parent is fixed at that point, so the recorded path has
/// the fewest possible edges.
#[derive(Debug, Default)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for BFS {
    fn search<P: SearchProblem>(
        &mut self,
        problem: &P,
        termination: &mut TerminationCondition,
        observer: &mut dyn SearchObserver<P::State>,
    ) -> (SearchResult<P::State>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut queue = VecDeque::new();
        let mut search_space = SearchSpace::new(problem.initial_state());
        let root_node = search_space.get_root_node_mut();
        root_node.open(OrderedFloat(0.), OrderedFloat(0.));
        queue.push_back(root_node.get_state_id());
        let mut trace = vec![];

        while let Some(sid) = queue.pop_front() {
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
                if child_node.get_status() == SearchNodeStatus::New {
                    child_node.open(g_value + cost, OrderedFloat(0.));
                    child_node.set_parent(sid);
                    statistics.increment_generated_nodes(1);
                    queue.push_back(child_node.get_state_id());
                }
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
