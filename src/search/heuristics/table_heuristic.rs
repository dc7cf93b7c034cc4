use crate::graph::{GraphError, NodeId};
use crate::search::heuristics::{Heuristic, HeuristicValue};
use std::collections::HashMap;

/// Per-node estimates read from a graph file. Nodes without an entry are
/// estimated at 0. Whether the table is admissible is up to whoever wrote it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableHeuristic {
    values: HashMap<NodeId, f64>,
}

impl TableHeuristic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: NodeId, value: f64) -> Result<(), GraphError> {
        if !value.is_finite() || value < 0. {
            return Err(GraphError::InvalidHeuristic {
                node: node.to_string(),
                value,
            });
        }
        self.values.insert(node, value);
        Ok(())
    }

    /// Straight-line distance from every node with coordinates to the goal.
    pub fn from_coordinates<I>(coordinates: I, goal: &NodeId) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (NodeId, (f64, f64))>,
    {
        let coordinates: HashMap<NodeId, (f64, f64)> = coordinates.into_iter().collect();
        let &(goal_x, goal_y) = coordinates
            .get(goal)
            .ok_or_else(|| GraphError::MissingCoordinates(goal.to_string()))?;

        let mut table = Self::new();
        for (node, (x, y)) in coordinates {
            table.insert(node, (x - goal_x).hypot(y - goal_y))?;
        }
        Ok(table)
    }

    pub fn get(&self, node: &NodeId) -> f64 {
        self.values.get(node).copied().unwrap_or(0.)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Heuristic<NodeId> for TableHeuristic {
    fn evaluate(&self, state: &NodeId) -> HeuristicValue {
        self.get(state).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn missing_entries_are_zero() {
        let mut table = TableHeuristic::new();
        table.insert("A".into(), 3.).unwrap();
        assert_eq!(table.get(&"A".into()), 3.);
        assert_eq!(table.get(&"B".into()), 0.);
        assert_eq!(table.evaluate(&"A".into()), 3.);
    }

    #[test]
    fn rejects_negative_and_nan() {
        let mut table = TableHeuristic::new();
        assert!(matches!(
            table.insert("A".into(), -1.),
            Err(GraphError::InvalidHeuristic { .. })
        ));
        assert!(table.insert("A".into(), f64::NAN).is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn straight_line_distance() {
        let goal = NodeId::from("G");
        let table = TableHeuristic::from_coordinates(
            [
                ("A".into(), (0., 0.)),
                ("B".into(), (3., 0.)),
                (goal, (3., 4.)),
            ],
            &goal,
        )
        .unwrap();
        assert_approx_eq!(table.get(&"A".into()), 5.);
        assert_approx_eq!(table.get(&"B".into()), 4.);
        assert_approx_eq!(table.get(&goal), 0.);
    }

    #[test]
    fn goal_needs_coordinates() {
        let result = TableHeuristic::from_coordinates([("A".into(), (0., 0.))], &"G".into());
        assert!(matches!(result, Err(GraphError::MissingCoordinates(_))));
    }
}
