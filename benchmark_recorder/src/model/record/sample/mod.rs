//!
//! One CI run's result set, tied to a specific source commit.
//!

pub mod commit;
pub mod metric;
pub mod tool;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use self::commit::Commit;
use self::metric::Metric;
use self::tool::Tool;

///
/// One CI run's result set, tied to a specific source commit.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// The measured commit.
    pub commit: Commit,
    /// Unix-epoch milliseconds of the run.
    pub date: u64,
    /// Comparison direction tag.
    pub tool: Tool,
    /// Measurements taken during the run.
    pub benches: Vec<Metric>,
}

impl Sample {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(commit: Commit, date: u64, tool: Tool, benches: Vec<Metric>) -> Self {
        Self {
            commit,
            date,
            tool,
            benches,
        }
    }

    ///
    /// Returns the sample's metrics keyed by name.
    ///
    /// Later duplicates of a name shadow earlier ones.
    ///
    pub fn metrics_by_name(&self) -> BTreeMap<&str, &Metric> {
        self.benches
            .iter()
            .map(|metric| (metric.name.as_str(), metric))
            .collect()
    }
}
