mod cell;
pub mod generator;
#[allow(clippy::module_inception)]
mod maze;
mod position;

pub use cell::Cell;
pub use generator::{DEFAULT_MAZE_SIZE, MIN_MAZE_SIZE};
pub use maze::{Maze, Neighbours};
pub(crate) use maze::DIRECTIONS;
pub use position::Position;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze size {size} is too small, mazes are at least {min}x{min}")]
    TooSmall { size: usize, min: usize },
    #[error("position {0} is outside the maze")]
    OutOfBounds(Position),
    #[error("cell {0} is a wall")]
    NotOpen(Position),
    #[error("the maze still holds the state of an earlier search, reset it first")]
    StaleSearchState,
    #[error("malformed position {0:?}, expected \"x,y\"")]
    MalformedPosition(String),
}
