//!
//! Benchmark input report format.
//!

pub mod error;
pub mod iperf3;

use std::path::Path;

use crate::model::record::sample::metric::Metric;
use crate::model::record::sample::tool::Tool;
use crate::model::record::Record;

use self::error::Error as InputError;
use self::iperf3::Iperf3Report;

///
/// Benchmark input report format.
///
#[derive(Debug, serde::Deserialize)]
pub struct Input {
    /// The original report.
    pub data: Report,

    /// Suite the report's sample is appended to.
    /// Ignored for native records, which carry their own suite names.
    #[serde(default)]
    pub suite: String,
    /// Comparison direction for the suite.
    #[serde(default)]
    pub tool: Tool,
}

///
/// Enum representing various benchmark report formats from tooling.
///
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum Report {
    /// A whole record of another dashboard, merged suite by suite.
    Native(Record),
    /// The unmodified `iperf3 --json` output.
    Iperf3(Iperf3Report),
    /// The generic CI form: an array of metrics measured for one commit.
    Custom(Vec<Metric>),
}

impl From<Record> for Report {
    fn from(record: Record) -> Self {
        Self::Native(record)
    }
}

impl From<Record> for Input {
    fn from(record: Record) -> Self {
        Self {
            data: Report::Native(record),
            suite: String::new(),
            tool: Tool::default(),
        }
    }
}

impl From<Iperf3Report> for Report {
    fn from(iperf3_report: Iperf3Report) -> Self {
        Self::Iperf3(iperf3_report)
    }
}

impl From<Vec<Metric>> for Report {
    fn from(metrics: Vec<Metric>) -> Self {
        Self::Custom(metrics)
    }
}

impl TryFrom<&Path> for Input {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        if Record::strip_assignment(text.as_str()).is_some() {
            let record = Record::parse(text.as_str()).map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
            return Ok(Self::from(record));
        }
        match serde_json::from_str::<Self>(text.as_str()) {
            Ok(json) => Ok(json),
            Err(error) => match Record::parse(text.as_str()) {
                Ok(record) => Ok(Self::from(record)),
                Err(_) => Err(InputError::Parsing {
                    error,
                    path: path.to_path_buf(),
                }),
            },
        }
    }
}
