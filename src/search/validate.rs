use crate::search::{ReplayError, ReplayMode, SearchProblem, StepOutcome, StepReplay};
use std::fmt::{Debug, Display};
use thiserror::Error;

/// Compare a claimed traversal order against the expected one. Reports the
/// first differing step, or a length mismatch if one sequence is a prefix of
/// the other.
pub fn validate_traversal<S>(claimed: &[S], expected: &[S]) -> Result<(), ReplayError<S>>
where
    S: Copy + PartialEq + Debug + Display,
{
    let mut replay = StepReplay::new(expected.to_vec(), ReplayMode::StopOnMismatch);
    for &node in claimed {
        match replay.submit(node) {
            Ok(StepOutcome::Mismatch {
                step,
                expected,
                got,
            }) => return Err(ReplayError::Mismatch { step, expected, got }),
            Ok(_) => {}
            Err(ReplayError::Finished) => break,
            Err(error) => return Err(error),
        }
    }
    if claimed.len() != expected.len() {
        return Err(ReplayError::LengthMismatch {
            expected: expected.len(),
            got: claimed.len(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError<S: Debug + Display> {
    #[error("the path is empty")]
    Empty,
    #[error("the path starts at {0}, not at the start node")]
    WrongStart(S),
    #[error("step {step}: {to} is not a neighbour of {from}")]
    NotANeighbour { step: usize, from: S, to: S },
    #[error("the path ends at {0}, which is not the goal")]
    NotAGoal(S),
}

/// Check that `path` is a walk from the initial state of `problem` to a goal
/// along its edges, and return its cost.
pub fn validate_path<P>(problem: &P, path: &[P::State]) -> Result<f64, PathError<P::State>>
where
    P: SearchProblem,
    P::State: Display,
{
    let (&first, _) = path.split_first().ok_or(PathError::Empty)?;
    if first != problem.initial_state() {
        return Err(PathError::WrongStart(first));
    }

    let mut cost = 0.;
    for (step, pair) in path.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        let edge_cost = problem
            .successors(&from)
            .into_iter()
            .find(|&(successor, _)| successor == to)
            .map(|(_, edge_cost)| edge_cost)
            .ok_or(PathError::NotANeighbour {
                step: step + 1,
                from,
                to,
            })?;
        cost += edge_cost;
    }

    let last = path[path.len() - 1];
    if !problem.is_goal(&last) {
        return Err(PathError::NotAGoal(last));
    }
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphFile, NodeId};
    use crate::search::GraphProblem;
    use crate::test_utils::*;

    fn nodes(names: &[&str]) -> Vec<NodeId> {
        names.iter().map(|&name| NodeId::from(name)).collect()
    }

    #[test]
    fn matching_traversal_ok() {
        let expected = nodes(&["A", "B", "C", "D"]);
        assert_eq!(validate_traversal(&expected, &expected), Ok(()));
    }

    #[test]
    fn reports_first_difference() {
        let expected = nodes(&["A", "B", "C", "D"]);
        let claimed = nodes(&["A", "C", "B", "D"]);
        assert_eq!(
            validate_traversal(&claimed, &expected),
            Err(ReplayError::Mismatch {
                step: 2,
                expected: "B".into(),
                got: "C".into(),
            })
        );
    }

    #[test]
    fn reports_length_difference() {
        let expected = nodes(&["A", "B", "C"]);
        assert_eq!(
            validate_traversal(&expected[..2], &expected),
            Err(ReplayError::LengthMismatch {
                expected: 3,
                got: 2
            })
        );
        assert_eq!(
            validate_traversal(&nodes(&["A", "B", "C", "D"]), &expected),
            Err(ReplayError::LengthMismatch {
                expected: 3,
                got: 4
            })
        );
    }

    fn validate_diamond_path(path: &[&str]) -> Result<f64, PathError<NodeId>> {
        let file = GraphFile::from_toml_str(DIAMOND_GRAPH_TEXT).unwrap();
        let graph = file.graph();
        let weights = file.weights().unwrap();
        let heuristic = file.heuristic().unwrap();
        let problem =
            GraphProblem::new(&graph, file.start(), file.goal(), &weights, &heuristic).unwrap();
        validate_path(&problem, &nodes(path))
    }

    #[test]
    fn validate_good_path_ok() {
        assert_eq!(validate_diamond_path(&["A", "B", "D"]), Ok(2.));
        assert_eq!(validate_diamond_path(&["A", "C", "D"]), Ok(5.));
    }

    #[test]
    fn validate_bad_path_not_an_edge() {
        assert!(matches!(
            validate_diamond_path(&["A", "D"]),
            Err(PathError::NotANeighbour { step: 1, .. })
        ));
    }

    #[test]
    fn validate_bad_path_incomplete() {
        assert_eq!(
            validate_diamond_path(&["A", "B"]),
            Err(PathError::NotAGoal("B".into()))
        );
        assert_eq!(validate_diamond_path(&[]), Err(PathError::Empty));
        assert_eq!(
            validate_diamond_path(&["B", "D"]),
            Err(PathError::WrongStart("B".into()))
        );
    }
}
