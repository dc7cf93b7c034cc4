use crate::search::{
    search_engines::{
        AStar, CancellationToken, SearchObserver, SearchResult, SearchStatistics,
        TerminationCondition, BFS, DFS,
    },
    SearchProblem,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub trait SearchEngine {
    fn search<P: SearchProblem>(
        &mut self,
        problem: &P,
        termination: &mut TerminationCondition,
        observer: &mut dyn SearchObserver<P::State>,
    ) -> (SearchResult<P::State>, SearchStatistics);
}

/// Which parent DFS records for a node that is pushed more than once before
/// it is expanded.
#[derive(
    clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ParentPolicy {
    /// Every push overwrites the parent, so the parent is the node whose
    /// exploration actually reached it
    #[default]
    LastPush,
    /// The parent set by the first push is kept
    FirstPush,
}

/// Knobs shared by all engines.
#[derive(Debug, Clone, Default)]
pub struct SearchSettings {
    pub parent_policy: ParentPolicy,
    pub max_expansions: Option<usize>,
    pub time_limit: Option<Duration>,
    pub cancellation: CancellationToken,
}

impl SearchSettings {
    pub fn termination_condition(&self) -> TerminationCondition {
        TerminationCondition::new(
            self.cancellation.clone(),
            self.max_expansions,
            self.time_limit,
        )
    }
}

#[derive(
    clap::ValueEnum,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Depth-first search, goes deep before backtracking.")]
    Dfs,
    #[clap(help = "Breadth-first search, finds paths with the fewest edges.")]
    Bfs,
    #[clap(help = "A* search, finds cheapest paths when the heuristic is admissible.")]
    Astar,
}

impl SearchEngineName {
    pub fn full_name(&self) -> &'static str {
        match self {
            SearchEngineName::Dfs => "Depth-First Search",
            SearchEngineName::Bfs => "Breadth-First Search",
            SearchEngineName::Astar => "A* Search",
        }
    }

    /// Whether the engine reads edge weights and heuristic values when
    /// choosing what to expand next.
    pub fn is_informed(&self) -> bool {
        matches!(self, SearchEngineName::Astar)
    }

    pub fn search<P: SearchProblem>(
        &self,
        problem: &P,
        settings: &SearchSettings,
        observer: &mut dyn SearchObserver<P::State>,
    ) -> (SearchResult<P::State>, SearchStatistics) {
        let mut termination = settings.termination_condition();
        let outcome = match self {
            SearchEngineName::Dfs => {
                DFS::new(settings.parent_policy).search(problem, &mut termination, observer)
            }
            SearchEngineName::Bfs => BFS::new().search(problem, &mut termination, observer),
            SearchEngineName::Astar => AStar::new().search(problem, &mut termination, observer),
        };
        termination.finalise();
        outcome
    }
}
