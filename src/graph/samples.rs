//! Sample graphs bundled with the crate. The traversal samples exercise DFS
//! and BFS orderings (trees, cycles, disconnected components); the weighted
//! samples carry edge weights and coordinates for A*.

use crate::graph::{GraphError, GraphFile};
use once_cell::sync::Lazy;
use rand::Rng;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SampleFamily {
    /// Unweighted graphs for DFS and BFS exercises
    Traversal,
    /// Weighted graphs with coordinates for A* exercises
    Weighted,
}

#[derive(Debug)]
pub struct Sample {
    pub name: &'static str,
    pub family: SampleFamily,
    pub file: GraphFile,
}

const SAMPLE_SOURCES: &[(&str, SampleFamily, &str)] = &[
    (
        "binary-tree",
        SampleFamily::Traversal,
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/samples/traversal/binary_tree.toml"
        )),
    ),
    (
        "unbalanced",
        SampleFamily::Traversal,
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/samples/traversal/unbalanced.toml"
        )),
    ),
    (
        "cycle",
        SampleFamily::Traversal,
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/samples/traversal/cycle.toml"
        )),
    ),
    (
        "disconnected",
        SampleFamily::Traversal,
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/samples/traversal/disconnected.toml"
        )),
    ),
    (
        "diamond",
        SampleFamily::Traversal,
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/samples/traversal/diamond.toml"
        )),
    ),
    (
        "fork",
        SampleFamily::Weighted,
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/samples/weighted/fork.toml"
        )),
    ),
    (
        "ladder",
        SampleFamily::Weighted,
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/samples/weighted/ladder.toml"
        )),
    ),
    (
        "detour",
        SampleFamily::Weighted,
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/samples/weighted/detour.toml"
        )),
    ),
    (
        "merge",
        SampleFamily::Weighted,
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/samples/weighted/merge.toml"
        )),
    ),
];

static SAMPLES: Lazy<Vec<Sample>> = Lazy::new(|| {
    SAMPLE_SOURCES
        .iter()
        .map(|&(name, family, text)| Sample {
            name,
            family,
            file: GraphFile::from_toml_str(text)
                .unwrap_or_else(|e| panic!("Bundled sample {} is invalid: {}", name, e)),
        })
        .collect()
});

pub fn samples() -> &'static [Sample] {
    &SAMPLES
}

pub fn sample(name: &str) -> Result<&'static Sample, GraphError> {
    SAMPLES
        .iter()
        .find(|sample| sample.name == name)
        .ok_or_else(|| GraphError::UnknownSample(name.to_string()))
}

/// Pick a sample of the given family uniformly at random.
pub fn random_sample<R: Rng + ?Sized>(family: SampleFamily, rng: &mut R) -> &'static Sample {
    let candidates: Vec<&Sample> = SAMPLES
        .iter()
        .filter(|sample| sample.family == family)
        .collect();
    candidates[rng.random_range(0..candidates.len())]
}
