//! Maze generation with the recursive backtracker (randomised depth first
//! search with an explicit stack):
//!
//! 1. Start with every cell a wall, open `(1, 1)` and push it.
//! 2. While the stack is not empty, look at the cell on top:
//!    - if it has walled neighbours two steps away, pick one at random, open
//!      it and the wall between, and push it;
//!    - otherwise pop.
//!
//! Cells at odd coordinates are rooms, the cells between them are walls that
//! get knocked out. Every opened cell is attached to exactly one earlier
//! opened cell, so the open cells form a tree: the maze is perfect.

use crate::maze::{Maze, MazeError, Position, DIRECTIONS};
use rand::Rng;
use smallvec::SmallVec;
use tracing::debug;

/// The maze size used when none is given.
pub const DEFAULT_MAZE_SIZE: usize = 25;

/// The smallest maze that has distinct start and end cells.
pub const MIN_MAZE_SIZE: usize = 5;

/// Mazes need an odd side length so that both the first and the last room
/// sit inside the outer wall. Even sizes are clamped down.
pub fn clamp_size(size: usize) -> Result<usize, MazeError> {
    let size = if size % 2 == 0 { size.saturating_sub(1) } else { size };
    if size < MIN_MAZE_SIZE {
        return Err(MazeError::TooSmall {
            size,
            min: MIN_MAZE_SIZE,
        });
    }
    Ok(size)
}

/// Generate a perfect maze of side `size` (clamped, see [`clamp_size`]) with
/// the start at `(1, 1)` and the end at `(size - 2, size - 2)`.
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Maze, MazeError> {
    let size = clamp_size(size)?;
    let mut maze = Maze::walled(size);

    let origin = Position::new(1, 1);
    maze.carve(origin, 0);
    let mut stack = vec![origin];

    while let Some(&current) = stack.last() {
        let candidates = walled_rooms_around(&maze, current);
        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let next = candidates[rng.random_range(0..candidates.len())];
        let between = Position::new((current.x + next.x) / 2, (current.y + next.y) / 2);
        maze.carve(between, 1);
        maze.carve(next, 1);
        stack.push(next);
    }

    maze.set_default_endpoints()?;
    debug!(
        size,
        open_cells = maze.open_cell_count(),
        passages = maze.passage_count(),
        "generated maze"
    );
    Ok(maze)
}

/// Rooms two steps away from `position` that are still walls, listed up,
/// right, down, left.
fn walled_rooms_around(maze: &Maze, position: Position) -> SmallVec<[Position; 4]> {
    DIRECTIONS
        .iter()
        .filter_map(|&(dx, dy)| position.offset(2 * dx, 2 * dy))
        .filter(|&room| maze.cell(room).is_some_and(|cell| cell.is_wall()))
        .collect()
}
