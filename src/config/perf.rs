//! Benchmark harness configuration.

use serde::Deserialize;

use super::ConfigError;

/// Default number of nodes for the insert and delete benches.
pub const DEFAULT_NODES: usize = 100_000;
/// Default number of operations between two timing lines.
pub const DEFAULT_REPORT_EVERY: usize = 10_000;
/// Default tree size reached by the replace bench.
pub const DEFAULT_REPLACE_NODES: usize = 100;
/// Default replace round trips timed per tree size.
pub const DEFAULT_REPLACE_ROUNDS: usize = 10_000;

/// A benchmark the harness can run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bench {
    /// Insert fresh keys into a growing tree.
    Insert,
    /// Delete every node in insertion order.
    Delete,
    /// Swap a member with a spare node and back.
    Replace,
}

impl Bench {
    pub const ALL: [Bench; 3] = [Bench::Insert, Bench::Delete, Bench::Replace];

    /// Title line printed above the bench's timings.
    pub fn title(self) -> &'static str {
        match self {
            Bench::Insert => "insert",
            Bench::Delete => "delete_node",
            Bench::Replace => "replace_node",
        }
    }
}

/// Settings for the `rbkit-perf` binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PerfConfig {
    /// Nodes inserted by the insert and delete benches.
    pub nodes: usize,
    /// Operations per timing line.
    pub report_every: usize,
    /// Largest tree the replace bench grows to.
    pub replace_nodes: usize,
    /// Replace round trips per tree size.
    pub replace_rounds: usize,
    /// Fixed RNG seed for reproducible keys. Random when absent.
    pub seed: Option<u64>,
    /// Benches to run, in order.
    pub benches: Vec<Bench>,
    /// Run the consistency checker after every phase.
    pub verify: bool,
}

impl Default for PerfConfig {
    fn default() -> Self {
        Self {
            nodes: DEFAULT_NODES,
            report_every: DEFAULT_REPORT_EVERY,
            replace_nodes: DEFAULT_REPLACE_NODES,
            replace_rounds: DEFAULT_REPLACE_ROUNDS,
            seed: None,
            benches: Bench::ALL.to_vec(),
            verify: false,
        }
    }
}

impl PerfConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("perf.nodes", self.nodes),
            ("perf.report_every", self.report_every),
            ("perf.replace_nodes", self.replace_nodes),
            ("perf.replace_rounds", self.replace_rounds),
        ];
        for (key, value) in positive {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{key} must be positive")));
            }
        }
        if self.report_every > self.nodes {
            return Err(ConfigError::Invalid(format!(
                "perf.report_every ({}) exceeds perf.nodes ({})",
                self.report_every, self.nodes
            )));
        }
        Ok(())
    }
}
