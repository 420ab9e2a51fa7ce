//!
//! One named, unit-labeled numeric observation within a sample.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// One named, unit-labeled numeric observation within a sample.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Metric label, recurring across samples of one suite.
    pub name: String,
    /// Measured value.
    pub value: f64,
    /// Unit string, e.g. "Mbits/sec" or "ms". Never interpreted.
    pub unit: String,
    /// Free-text annotation attached by the report producer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl Metric {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, value: f64, unit: String, extra: Option<String>) -> Self {
        Self {
            name,
            value,
            unit,
            extra,
        }
    }
}
