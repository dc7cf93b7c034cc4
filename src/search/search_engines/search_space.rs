use crate::search::search_engines::{
    NodeScores, SearchNode, SearchNodeStatus, SearchResult, SearchStatus,
};
use segvec::{Linear, SegVec};
use std::{
    collections::{BTreeMap, HashMap},
    hash::Hash,
};

/// Index of a state in its [`SearchSpace`]. Ids are handed out in discovery
/// order, so comparing them compares when states were first seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(usize);

impl StateId {
    pub fn id(&self) -> usize {
        self.0
    }
}

pub const NO_STATE: StateId = StateId(usize::MAX);

/// A [`SearchSpace`] owns the states and nodes seen during one search. States
/// are registered once; asking for a state again returns its existing node.
#[derive(Debug)]
pub struct SearchSpace<S> {
    root_state_id: StateId,
    nodes: SegVec<SearchNode, Linear>,
    states: SegVec<S, Linear>,
    registered_states: HashMap<S, StateId>,
}

impl<S: Copy + Eq + Hash + Ord> SearchSpace<S> {
    pub fn new(initial_state: S) -> Self {
        let mut search_space = Self {
            root_state_id: StateId(0),
            nodes: SegVec::new(),
            states: SegVec::new(),
            registered_states: HashMap::new(),
        };
        search_space.insert_or_get_node(initial_state);
        search_space
    }

    pub fn insert_or_get_node(&mut self, state: S) -> &mut SearchNode {
        let state_id = match self.registered_states.get(&state) {
            Some(&state_id) => state_id,
            None => {
                let state_id = StateId(self.nodes.len());
                self.nodes.push(SearchNode::new(state_id));
                self.states.push(state);
                self.registered_states.insert(state, state_id);
                state_id
            }
        };
        self.get_node_mut(state_id)
    }

    #[inline(always)]
    pub fn get_root_node_mut(&mut self) -> &mut SearchNode {
        self.get_node_mut(self.root_state_id)
    }

    #[inline(always)]
    pub fn get_node(&self, state_id: StateId) -> &SearchNode {
        self.nodes.get(state_id.id()).expect("Invalid state id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, state_id: StateId) -> &mut SearchNode {
        self.nodes.get_mut(state_id.id()).expect("Invalid state id")
    }

    #[inline(always)]
    pub fn get_state(&self, state_id: StateId) -> &S {
        self.states.get(state_id.id()).expect("Invalid state id")
    }

    /// Number of states seen so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// States from the root to `goal_id` along the parent chain.
    pub fn extract_path(&self, goal_id: StateId) -> Vec<S> {
        let mut path = vec![];
        let mut current_id = goal_id;
        while current_id != NO_STATE {
            path.push(*self.get_state(current_id));
            current_id = self.get_node(current_id).get_parent_id();
        }
        path.reverse();
        path
    }

    fn parents(&self) -> BTreeMap<S, S> {
        (0..self.len())
            .map(StateId)
            .filter_map(|state_id| {
                let parent_id = self.get_node(state_id).get_parent_id();
                (parent_id != NO_STATE)
                    .then(|| (*self.get_state(state_id), *self.get_state(parent_id)))
            })
            .collect()
    }

    fn scores(&self) -> BTreeMap<S, NodeScores> {
        (0..self.len())
            .map(StateId)
            .filter_map(|state_id| {
                let node = self.get_node(state_id);
                (node.get_status() != SearchNodeStatus::New).then(|| {
                    let scores = NodeScores {
                        g: node.get_g().into_inner(),
                        h: node.get_h().into_inner(),
                        f: node.get_f().into_inner(),
                    };
                    (*self.get_state(state_id), scores)
                })
            })
            .collect()
    }

    /// Package the search space into a [`SearchResult`]. A path and its cost
    /// are only filled in when `goal_id` is given.
    pub fn into_result(
        self,
        status: SearchStatus,
        trace: Vec<S>,
        goal_id: Option<StateId>,
    ) -> SearchResult<S> {
        let (path, cost) = match goal_id {
            Some(goal_id) => (
                self.extract_path(goal_id),
                self.get_node(goal_id).get_g().into_inner(),
            ),
            None => (vec![], f64::INFINITY),
        };
        SearchResult {
            status,
            trace,
            parents: self.parents(),
            path,
            cost,
            scores: self.scores(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_registered_once() {
        let mut search_space = SearchSpace::new('a');
        let b = search_space.insert_or_get_node('b').get_state_id();
        let b_again = search_space.insert_or_get_node('b').get_state_id();
        assert_eq!(b, b_again);
        assert_eq!(search_space.len(), 2);
        assert!(search_space.get_node(StateId(0)).get_state_id() < b);
    }

    #[test]
    fn path_follows_parents() {
        let mut search_space = SearchSpace::new('a');
        search_space.get_root_node_mut().open(0.0.into(), 0.0.into());
        let b = search_space.insert_or_get_node('b');
        b.open(1.0.into(), 0.0.into());
        b.set_parent(StateId(0));
        let b = b.get_state_id();
        let c = search_space.insert_or_get_node('c');
        c.open(3.0.into(), 0.0.into());
        c.set_parent(b);
        let c = c.get_state_id();

        assert_eq!(search_space.extract_path(c), vec!['a', 'b', 'c']);
        let result = search_space.into_result(SearchStatus::GoalReached, vec!['a', 'b', 'c'], Some(c));
        assert_eq!(result.cost, 3.);
        assert_eq!(result.parents, BTreeMap::from([('b', 'a'), ('c', 'b')]));
        assert_eq!(result.scores[&'c'].g, 3.);
    }

    #[test]
    fn unreached_goal_has_no_path() {
        let mut search_space = SearchSpace::new(1);
        search_space.get_root_node_mut().open(0.0.into(), 0.0.into());
        // seen but never opened, so it has no scores
        search_space.insert_or_get_node(2);
        let result = search_space.into_result(SearchStatus::Unreachable, vec![1], None);
        assert!(result.path.is_empty());
        assert!(result.cost.is_infinite());
        assert_eq!(result.scores.len(), 1);
    }
}
