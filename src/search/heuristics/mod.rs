mod heuristic;
mod manhattan;
mod table_heuristic;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicValue, MazeHeuristicName};
pub use manhattan::ManhattanHeuristic;
pub use table_heuristic::TableHeuristic;
pub use zero_heuristic::ZeroHeuristic;
