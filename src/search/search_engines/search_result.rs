use crate::search::reconstruct_path;
use serde::{Serialize, Serializer};
use std::{collections::BTreeMap, fmt::Debug, hash::Hash};

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchStatus {
    /// The goal was expanded
    GoalReached,
    /// No goal was given and every reachable node was expanded
    Exhausted,
    /// A goal was given but the frontier ran empty before reaching it
    Unreachable,
    /// The cancellation token was triggered
    Cancelled,
    /// The configured maximum number of expansions was hit
    ExpansionLimitReached,
    /// The configured time limit ran out
    TimeLimitExceeded,
}

impl SearchStatus {
    /// Whether the search ran to its natural end rather than being stopped.
    pub fn is_complete(&self) -> bool {
        matches!(
            self,
            SearchStatus::GoalReached | SearchStatus::Exhausted | SearchStatus::Unreachable
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeScores {
    /// Cost of the best known route from the start
    pub g: f64,
    /// Heuristic estimate to the goal, 0 for uninformed searches
    pub h: f64,
    /// `g + h`
    pub f: f64,
}

/// Everything a run produced. `trace` lists nodes in the order they were
/// expanded; `path` is empty and `cost` infinite unless the goal was reached.
/// `scores` holds every node that was given a finite cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<S: Ord> {
    pub status: SearchStatus,
    pub trace: Vec<S>,
    pub parents: BTreeMap<S, S>,
    pub path: Vec<S>,
    #[serde(serialize_with = "serialize_cost")]
    pub cost: f64,
    pub scores: BTreeMap<S, NodeScores>,
}

// JSON has no infinity, an unreached goal is written as null.
fn serialize_cost<Ser: Serializer>(cost: &f64, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
    if cost.is_finite() {
        serializer.serialize_some(cost)
    } else {
        serializer.serialize_none()
    }
}

impl<S: Copy + Ord + Hash + Debug> SearchResult<S> {
    pub fn found_goal(&self) -> bool {
        self.status == SearchStatus::GoalReached
    }

    /// Number of edges on the path, 0 when no path was found.
    pub fn path_length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The route the search recorded to any node it reached, following the
    /// parent map back to the start.
    pub fn path_to(&self, node: S) -> Option<Vec<S>> {
        if !self.scores.contains_key(&node) {
            return None;
        }
        Some(reconstruct_path(&self.parents, node))
    }
}
