use crate::graph::{EdgeWeights, Graph, NodeId};
use crate::search::{
    heuristics::{Heuristic, HeuristicValue},
    SearchError, SearchProblem,
};

/// Search on an adjacency list graph. Moving along `u -> v` costs the weight
/// of that edge.
#[derive(Debug)]
pub struct GraphProblem<'a> {
    graph: &'a Graph,
    start: NodeId,
    goal: Option<NodeId>,
    weights: &'a EdgeWeights,
    heuristic: &'a dyn Heuristic<NodeId>,
}

impl<'a> GraphProblem<'a> {
    /// Fails if the start or the goal is not a node of the graph.
    pub fn new(
        graph: &'a Graph,
        start: NodeId,
        goal: Option<NodeId>,
        weights: &'a EdgeWeights,
        heuristic: &'a dyn Heuristic<NodeId>,
    ) -> Result<Self, SearchError> {
        for node in std::iter::once(start).chain(goal) {
            if !graph.contains(&node) {
                return Err(SearchError::UnknownNode(node));
            }
        }
        Ok(Self {
            graph,
            start,
            goal,
            weights,
            heuristic,
        })
    }
}

impl SearchProblem for GraphProblem<'_> {
    type State = NodeId;

    fn initial_state(&self) -> NodeId {
        self.start
    }

    fn has_goal(&self) -> bool {
        self.goal.is_some()
    }

    fn is_goal(&self, state: &NodeId) -> bool {
        self.goal.as_ref() == Some(state)
    }

    fn successors(&self, state: &NodeId) -> Vec<(NodeId, f64)> {
        self.graph
            .neighbours(state)
            .iter()
            .map(|&neighbour| (neighbour, self.weights.get(state, &neighbour)))
            .collect()
    }

    fn heuristic(&self, state: &NodeId) -> HeuristicValue {
        self.heuristic.evaluate(state)
    }
}
