//! Step by step checking of a user's guesses against the order a search
//! actually produced, as in the tutorial exercises where the learner clicks
//! nodes in the order they think an algorithm visits them.

use std::fmt::{Debug, Display};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayMode {
    /// The first wrong step ends the attempt
    #[default]
    StopOnMismatch,
    /// Wrong steps are reported and counted, and the learner may try the
    /// same step again
    Retry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome<S> {
    /// The step matched and more steps are expected
    Correct { step: usize },
    /// The step matched and was the last one
    Completed,
    /// The step did not match
    Mismatch { step: usize, expected: S, got: S },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError<S: Debug + Display> {
    #[error("step {step}: expected {expected}, got {got}")]
    Mismatch { step: usize, expected: S, got: S },
    #[error("expected {expected} steps, got {got}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("the replay is already finished")]
    Finished,
}

/// Tracks progress through an expected sequence of nodes.
#[derive(Debug, Clone)]
pub struct StepReplay<S> {
    expected: Vec<S>,
    mode: ReplayMode,
    /// Number of steps matched so far
    position: usize,
    mistakes: usize,
    failed: bool,
}

impl<S: Copy + PartialEq + Debug + Display> StepReplay<S> {
    pub fn new(expected: Vec<S>, mode: ReplayMode) -> Self {
        Self {
            expected,
            mode,
            position: 0,
            mistakes: 0,
            failed: false,
        }
    }

    /// Check the next step. Steps are counted from 1.
    pub fn submit(&mut self, node: S) -> Result<StepOutcome<S>, ReplayError<S>> {
        if self.is_finished() {
            return Err(ReplayError::Finished);
        }
        let expected = self.expected[self.position];
        let step = self.position + 1;
        if node != expected {
            debug!(step, %expected, got = %node, "mismatch");
            self.mistakes += 1;
            if self.mode == ReplayMode::StopOnMismatch {
                self.failed = true;
            }
            return Ok(StepOutcome::Mismatch {
                step,
                expected,
                got: node,
            });
        }
        self.position += 1;
        if self.position == self.expected.len() {
            Ok(StepOutcome::Completed)
        } else {
            Ok(StepOutcome::Correct { step })
        }
    }

    /// The node expected next, if any.
    pub fn hint(&self) -> Option<&S> {
        if self.failed {
            return None;
        }
        self.expected.get(self.position)
    }

    /// Steps matched so far and the total number of steps.
    pub fn progress(&self) -> (usize, usize) {
        (self.position, self.expected.len())
    }

    /// The steps matched so far.
    pub fn accepted(&self) -> &[S] {
        &self.expected[..self.position]
    }

    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub fn is_complete(&self) -> bool {
        self.position == self.expected.len()
    }

    pub fn is_finished(&self) -> bool {
        self.failed || self.is_complete()
    }

    pub fn restart(&mut self) {
        self.position = 0;
        self.mistakes = 0;
        self.failed = false;
    }
}
