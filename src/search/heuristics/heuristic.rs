use crate::maze::Position;
use crate::search::heuristics::{ManhattanHeuristic, ZeroHeuristic};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic<S>: Debug {
    /// Estimate the cost of reaching the goal from the given state.
    fn evaluate(&self, state: &S) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum MazeHeuristicName {
    #[default]
    #[clap(help = "Manhattan distance to the end cell.")]
    Manhattan,
    #[clap(help = "The zero heuristic, turns A* into uniform cost search.")]
    Zero,
}

impl MazeHeuristicName {
    pub fn create(&self, end: Position) -> Box<dyn Heuristic<Position>> {
        match self {
            MazeHeuristicName::Manhattan => Box::new(ManhattanHeuristic::new(end)),
            MazeHeuristicName::Zero => Box::new(ZeroHeuristic::new()),
        }
    }
}
