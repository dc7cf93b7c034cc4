use crate::search::search_engines::SearchStatus;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};
use tracing::info;

/// A flag shared between a running search and whoever may want to stop it.
/// Clones refer to the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Checked once per expansion. Reports the status the search should stop
/// with, if any.
#[derive(Debug)]
pub struct TerminationCondition {
    cancellation: CancellationToken,
    max_expansions: Option<usize>,
    time_limit: Option<Duration>,
    start_time: Instant,
    expansions: usize,
    last_log_time: Instant,
}

impl TerminationCondition {
    pub fn new(
        cancellation: CancellationToken,
        max_expansions: Option<usize>,
        time_limit: Option<Duration>,
    ) -> Self {
        info!(
            max_expansions = max_expansions,
            time_limit = time_limit.map(|d| d.as_secs_f64()),
        );
        Self {
            cancellation,
            max_expansions,
            time_limit,
            start_time: Instant::now(),
            expansions: 0,
            last_log_time: Instant::now(),
        }
    }

    pub fn register_expansion(&mut self) {
        self.expansions += 1;
        self.log_if_needed();
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&self) {
        info!(
            expansions = self.expansions,
            time_elapsed = self.start_time.elapsed().as_secs_f64(),
        );
    }

    pub fn finalise(&self) {
        info!(
            total_expansions = self.expansions,
            total_time_used = self.start_time.elapsed().as_secs_f64(),
        );
    }

    pub fn should_terminate(&self) -> Option<SearchStatus> {
        if self.cancellation.is_cancelled() {
            return Some(SearchStatus::Cancelled);
        }
        if let Some(max_expansions) = self.max_expansions {
            if self.expansions >= max_expansions {
                return Some(SearchStatus::ExpansionLimitReached);
            }
        }
        if let Some(time_limit) = self.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(SearchStatus::TimeLimitExceeded);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellation_is_shared_between_clones() {
        let token = CancellationToken::new();
        let condition = TerminationCondition::new(token.clone(), None, None);
        assert_eq!(condition.should_terminate(), None);
        token.cancel();
        assert_eq!(condition.should_terminate(), Some(SearchStatus::Cancelled));
    }

    #[test]
    fn expansion_limit() {
        let mut condition = TerminationCondition::new(CancellationToken::new(), Some(2), None);
        condition.register_expansion();
        assert_eq!(condition.should_terminate(), None);
        condition.register_expansion();
        assert_eq!(
            condition.should_terminate(),
            Some(SearchStatus::ExpansionLimitReached)
        );
    }

    #[test]
    fn zero_time_limit_stops_immediately() {
        let condition = TerminationCondition::new(
            CancellationToken::new(),
            None,
            Some(Duration::from_nanos(0)),
        );
        std::thread::sleep(Duration::from_millis(1));
        assert_eq!(
            condition.should_terminate(),
            Some(SearchStatus::TimeLimitExceeded)
        );
    }
}
