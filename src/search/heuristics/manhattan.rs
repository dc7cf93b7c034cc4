use crate::maze::Position;
use crate::search::heuristics::{Heuristic, HeuristicValue};

/// Grid distance to a fixed goal cell. Admissible and consistent for mazes
/// with unit step costs and no diagonal moves.
#[derive(Clone, Debug)]
pub struct ManhattanHeuristic {
    goal: Position,
}

impl ManhattanHeuristic {
    pub fn new(goal: Position) -> Self {
        Self { goal }
    }
}

impl Heuristic<Position> for ManhattanHeuristic {
    fn evaluate(&self, state: &Position) -> HeuristicValue {
        (state.manhattan_distance(&self.goal) as f64).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_goal() {
        let heuristic = ManhattanHeuristic::new(Position::new(3, 3));
        assert_eq!(heuristic.evaluate(&Position::new(1, 1)), 4.);
        assert_eq!(heuristic.evaluate(&Position::new(3, 1)), 2.);
        assert_eq!(heuristic.evaluate(&Position::new(3, 3)), 0.);
    }
}
