mod graph_problem;
mod maze_problem;
mod search_problem;

pub use graph_problem::GraphProblem;
pub use maze_problem::MazeProblem;
pub use search_problem::SearchProblem;
