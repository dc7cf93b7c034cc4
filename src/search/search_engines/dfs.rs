//! Depth first search with an explicit stack

use crate::search::{
    search_engines::{
        ParentPolicy, SearchEngine, SearchNodeStatus, SearchObserver, SearchResult, SearchSpace,
        SearchStatistics, SearchStatus, TerminationCondition,
    },
    SearchProblem,
};
use ordered_float::OrderedFloat;
use tracing::debug;

/// Depth first search. Neighbours are pushed in reverse so that the first
/// declared neighbour is expanded first. Nodes may sit on the stack several
/// times; only the first pop expands them.
#[derive(Debug)]
pub struct DFS {
    parent_policy: ParentPolicy,
}

impl DFS {
    pub fn new(parent_policy: ParentPolicy) -> Self {
        Self { parent_policy }
    }
}

impl SearchEngine for DFS {
    fn search<P: SearchProblem>(
        &mut self,
        problem: &P,
        termination: &mut TerminationCondition,
        observer: &mut dyn SearchObserver<P::State>,
    ) -> (SearchResult<P::State>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(problem.initial_state());
        let root_node = search_space.get_root_node_mut();
        root_node.open(OrderedFloat(0.), OrderedFloat(0.));
        let mut stack = vec![root_node.get_state_id()];
        let mut trace = vec![];

        while let Some(sid) = stack.pop() {
            let node = search_space.get_node_mut(sid);
            if node.get_status() == SearchNodeStatus::Closed {
                statistics.increment_skipped_nodes();
                continue;
            }
            if let Some(status) = termination.should_terminate() {
                return (search_space.into_result(status, trace, None), statistics);
            }
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

            for (successor, cost) in problem.successors(&state).into_iter().rev() {
                let child_node = search_space.insert_or_get_node(successor);
                match child_node.get_status() {
                    SearchNodeStatus::Closed => continue,
                    SearchNodeStatus::New => {
                        statistics.increment_generated_nodes(1);
                    }
                    SearchNodeStatus::Open => {
                        if self.parent_policy == ParentPolicy::FirstPush {
                            stack.push(child_node.get_state_id());
                            continue;
                        }
                    }
                }
                child_node.open(g_value + cost, OrderedFloat(0.));
                child_node.set_parent(sid);
                stack.push(child_node.get_state_id());
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
