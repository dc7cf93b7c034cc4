use crate::search::heuristics::HeuristicValue;
use std::{fmt::Debug, hash::Hash};

/// What an engine needs to know about the space it searches: where to
/// start, when to stop and how to move.
pub trait SearchProblem {
    type State: Copy + Eq + Hash + Ord + Debug;

    fn initial_state(&self) -> Self::State;

    /// Whether the problem has a goal at all. Without one the engines run
    /// until the frontier is empty.
    fn has_goal(&self) -> bool;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Neighbours of `state` in declared order, each with the cost of the
    /// edge leading to it.
    fn successors(&self, state: &Self::State) -> Vec<(Self::State, f64)>;

    fn heuristic(&self, state: &Self::State) -> HeuristicValue;
}
