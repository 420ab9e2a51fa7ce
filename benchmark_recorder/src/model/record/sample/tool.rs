//!
//! Comparison direction of a benchmark suite.
//!

use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

///
/// Comparison direction of a benchmark suite.
///
/// The tag is stored verbatim in the data file and tells the dashboard and
/// the alerting logic whether a growing value is an improvement (throughput)
/// or a regression (latency).
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    /// Larger values are better, e.g. throughput in Mbits/sec.
    #[default]
    #[serde(rename = "customBiggerIsBetter")]
    BiggerIsBetter,
    /// Smaller values are better, e.g. latency in ms.
    #[serde(rename = "customSmallerIsBetter")]
    SmallerIsBetter,
}

impl Tool {
    ///
    /// Returns the regression ratio of `current` against `previous`.
    ///
    /// The ratio is normalized so that values above 1 always mean the metric
    /// got worse, regardless of the comparison direction. Equal values yield
    /// exactly 1. A zero divisor yields an infinite ratio.
    ///
    pub fn regression_ratio(self, previous: f64, current: f64) -> f64 {
        if previous == current {
            return 1.0;
        }
        match self {
            Self::BiggerIsBetter => previous / current,
            Self::SmallerIsBetter => current / previous,
        }
    }
}

impl FromStr for Tool {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "customBiggerIsBetter" => Ok(Self::BiggerIsBetter),
            "customSmallerIsBetter" => Ok(Self::SmallerIsBetter),
            _ => Err(anyhow::anyhow!(
                "Unknown tool tag `{}`. Supported tags: {}",
                string,
                vec![Self::BiggerIsBetter, Self::SmallerIsBetter]
                    .into_iter()
                    .map(|tool| tool.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            )),
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tool::BiggerIsBetter => write!(f, "customBiggerIsBetter"),
            Tool::SmallerIsBetter => write!(f, "customSmallerIsBetter"),
        }
    }
}
