use crate::search::heuristics::HeuristicValue;
use crate::search::search_engines::{StateId, NO_STATE};
use ordered_float::Float;

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is on the frontier
    Open,
    /// Node has been expanded
    Closed,
}

/// A [`SearchNode`] holds what a search knows about one state: its costs,
/// its status and the node it was reached from.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Unique identifier of the state, also its discovery order
    state_id: StateId,
    status: SearchNodeStatus,
    /// F-value of the node, `g + h`
    f: HeuristicValue,
    /// G-value of the node, i.e. the cost to reach this node along the
    /// recorded parent chain
    g: HeuristicValue,
    /// H-value of the node, 0 for searches that ignore heuristics
    h: HeuristicValue,
    parent_id: StateId,
}

impl SearchNode {
    pub fn new(state_id: StateId) -> Self {
        Self {
            state_id,
            status: SearchNodeStatus::New,
            f: HeuristicValue::infinity(),
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
            parent_id: NO_STATE,
        }
    }

    pub fn open(&mut self, g: HeuristicValue, h: HeuristicValue) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
        self.f = g + h;
    }

    pub fn set_parent(&mut self, parent_id: StateId) {
        self.parent_id = parent_id;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_state_id(&self) -> StateId {
        self.state_id
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_parent_id(&self) -> StateId {
        self.parent_id
    }
}
