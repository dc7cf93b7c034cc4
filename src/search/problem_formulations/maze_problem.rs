use crate::maze::{Maze, Position};
use crate::search::{
    heuristics::{Heuristic, HeuristicValue},
    SearchError, SearchProblem,
};

/// Search from the start cell of a maze to its end cell. Every step to an
/// open neighbour costs 1.
#[derive(Debug)]
pub struct MazeProblem<'a> {
    maze: &'a Maze,
    start: Position,
    end: Position,
    heuristic: &'a dyn Heuristic<Position>,
}

impl<'a> MazeProblem<'a> {
    pub fn new(maze: &'a Maze, heuristic: &'a dyn Heuristic<Position>) -> Result<Self, SearchError> {
        let start = maze.start().ok_or(SearchError::MissingEndpoint("start"))?;
        let end = maze.end().ok_or(SearchError::MissingEndpoint("end"))?;
        for position in [start, end] {
            if !maze.is_open(position) {
                return Err(SearchError::BlockedEndpoint(position));
            }
        }
        Ok(Self {
            maze,
            start,
            end,
            heuristic,
        })
    }

    pub fn end(&self) -> Position {
        self.end
    }
}

impl SearchProblem for MazeProblem<'_> {
    type State = Position;

    fn initial_state(&self) -> Position {
        self.start
    }

    fn has_goal(&self) -> bool {
        true
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.end
    }

    fn successors(&self, state: &Position) -> Vec<(Position, f64)> {
        self.maze
            .open_neighbours(*state)
            .into_iter()
            .map(|neighbour| (neighbour, 1.))
            .collect()
    }

    fn heuristic(&self, state: &Position) -> HeuristicValue {
        self.heuristic.evaluate(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::heuristics::ManhattanHeuristic;
    use crate::test_utils::maze_from_rows;

    #[test]
    fn needs_both_endpoints() {
        let mut maze = maze_from_rows(&["#####", "#S  #", "### #", "#  E#", "#####"]);
        let heuristic = ManhattanHeuristic::new(Position::new(3, 3));
        assert!(MazeProblem::new(&maze, &heuristic).is_ok());
        maze.clear_endpoints();
        assert!(matches!(
            MazeProblem::new(&maze, &heuristic),
            Err(SearchError::MissingEndpoint("start"))
        ));
    }

    #[test]
    fn unit_steps_to_open_cells() {
        let maze = maze_from_rows(&["#####", "#S  #", "### #", "#  E#", "#####"]);
        let heuristic = ManhattanHeuristic::new(Position::new(3, 3));
        let problem = MazeProblem::new(&maze, &heuristic).unwrap();
        assert_eq!(
            problem.successors(&Position::new(3, 1)),
            vec![(Position::new(3, 2), 1.), (Position::new(2, 1), 1.)]
        );
        assert_eq!(problem.heuristic(&Position::new(1, 1)), 4.);
    }
}
