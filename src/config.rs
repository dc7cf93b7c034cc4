//! Solver settings read from a TOML file, for example:
//!
//! ```toml
//! engine = "astar"
//! parent-policy = "first-push"
//! step-delay = "50ms"
//! time-limit = "10s"
//! max-expansions = 10000
//! maze-size = 31
//! seed = 7
//! maze-heuristic = "manhattan"
//! ```
//!
//! Every key is optional. Command line flags take precedence over the file.

use crate::maze::DEFAULT_MAZE_SIZE;
use crate::search::{
    CancellationToken, MazeHeuristicName, ParentPolicy, SearchEngineName, SearchSettings,
};
use serde::{Deserialize, Deserializer};
use std::{fs, path::Path, path::PathBuf, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SolverConfig {
    pub engine: SearchEngineName,
    pub parent_policy: ParentPolicy,
    /// Pause after every expansion when animating
    #[serde(deserialize_with = "deserialize_duration")]
    pub step_delay: Option<Duration>,
    #[serde(deserialize_with = "deserialize_duration")]
    pub time_limit: Option<Duration>,
    pub max_expansions: Option<usize>,
    pub maze_size: usize,
    pub seed: Option<u64>,
    pub maze_heuristic: MazeHeuristicName,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            engine: SearchEngineName::Astar,
            parent_policy: ParentPolicy::default(),
            step_delay: None,
            time_limit: None,
            max_expansions: None,
            maze_size: DEFAULT_MAZE_SIZE,
            seed: None,
            maze_heuristic: MazeHeuristicName::default(),
        }
    }
}

fn deserialize_duration<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Duration>, D::Error> {
    let text = String::deserialize(deserializer)?;
    humantime::parse_duration(&text)
        .map(Some)
        .map_err(serde::de::Error::custom)
}

impl SolverConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Engine settings for one run, stopped early through `cancellation`.
    pub fn search_settings(&self, cancellation: CancellationToken) -> SearchSettings {
        SearchSettings {
            parent_policy: self.parent_policy,
            max_expansions: self.max_expansions,
            time_limit: self.time_limit,
            cancellation,
        }
    }
}
