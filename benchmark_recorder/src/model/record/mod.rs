//!
//! The benchmark record representation.
//!

pub mod sample;

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::input::Input;
use crate::input::Report;
use crate::model::context::Context;

use self::sample::Sample;

///
/// The benchmark record representation.
///
/// This is the whole data file behind the benchmark dashboard: a time series
/// of samples per suite, appended to once per CI run.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// Unix-epoch milliseconds of the most recent append.
    #[serde(rename = "lastUpdate")]
    pub last_update: u64,
    /// URL of the repository the measurements track.
    #[serde(rename = "repoUrl", default)]
    pub repo_url: String,
    /// Samples per suite name, each suite ordered by non-decreasing date.
    pub entries: BTreeMap<String, Vec<Sample>>,
}

impl Record {
    /// The JS variable the dashboard data file assigns the record to.
    pub const DATA_VARIABLE: &'static str = "window.BENCHMARK_DATA";

    ///
    /// Strips the JS assignment wrapper of the dashboard data file, returning
    /// the inner JSON text. Returns `None` if the text is not wrapped.
    ///
    pub fn strip_assignment(text: &str) -> Option<&str> {
        let rest = text.trim_start().strip_prefix(Self::DATA_VARIABLE)?;
        let rest = rest.trim_start().strip_prefix('=')?;
        let rest = rest.trim();
        Some(rest.strip_suffix(';').map(str::trim_end).unwrap_or(rest))
    }

    ///
    /// Parses a record from either the raw JSON object or the JS assignment
    /// form of the dashboard data file.
    ///
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let json = Self::strip_assignment(text).unwrap_or_else(|| text.trim());
        serde_json::from_str(json)
    }

    ///
    /// Extend the record with a generic input report.
    ///
    /// Reports that produce a fresh sample require a commit context.
    ///
    pub fn extend(&mut self, input: Input, context: Option<&Context>) -> anyhow::Result<()> {
        let suite = input.suite;
        let tool = input.tool;
        match input.data {
            Report::Native(record) => {
                self.extend_with_record(record)?;
            }
            Report::Iperf3(report) => {
                let context = context.ok_or_else(|| {
                    anyhow::anyhow!("Suite '{suite}': iperf3 reports require a commit context")
                })?;
                self.append_sample(
                    suite,
                    Sample::new(
                        context.commit.clone(),
                        context.date(),
                        tool,
                        report.into_metrics(),
                    ),
                )?;
            }
            Report::Custom(benches) => {
                let context = context.ok_or_else(|| {
                    anyhow::anyhow!("Suite '{suite}': metric reports require a commit context")
                })?;
                self.append_sample(
                    suite,
                    Sample::new(context.commit.clone(), context.date(), tool, benches),
                )?;
            }
        }
        Ok(())
    }

    ///
    /// Extend the record with another record, folding in every suite.
    ///
    pub fn extend_with_record(&mut self, other: Record) -> anyhow::Result<()> {
        if self.repo_url.is_empty() {
            self.repo_url = other.repo_url;
        }
        for (suite, samples) in other.entries.into_iter() {
            for sample in samples.into_iter() {
                self.append_sample(suite.clone(), sample)?;
            }
        }
        Ok(())
    }

    ///
    /// Appends a sample to a suite, keeping the suite ordered by
    /// non-decreasing date and its comparison direction constant.
    ///
    pub fn append_sample(&mut self, suite: String, sample: Sample) -> anyhow::Result<()> {
        let samples = self.entries.entry(suite.clone()).or_default();
        if let Some(first) = samples.first() {
            if first.tool != sample.tool {
                anyhow::bail!(
                    "Suite '{suite}' is tagged `{}`, but the appended sample is tagged `{}`",
                    first.tool,
                    sample.tool,
                );
            }
        }
        self.last_update = self.last_update.max(sample.date);
        let position = samples
            .iter()
            .rposition(|existing| existing.date <= sample.date)
            .map(|position| position + 1)
            .unwrap_or_default();
        samples.insert(position, sample);
        Ok(())
    }

    ///
    /// Per-suite retention: drops the oldest samples of every suite until at
    /// most `max` remain. The dashboard caps chart length, so dropped history
    /// is not recoverable from the data file.
    ///
    pub fn retain_recent(&mut self, max: usize) {
        for samples in self.entries.values_mut() {
            let excess = samples.len().saturating_sub(max);
            samples.drain(..excess);
        }
    }

    ///
    /// Advisory validation of a loaded record.
    ///
    /// Foreign data files are accepted as-is; violations of the expected
    /// shape are reported as warnings and never abort processing.
    ///
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for (suite, samples) in self.entries.iter() {
            if samples
                .windows(2)
                .any(|window| window[0].date > window[1].date)
            {
                warnings.push(format!("Suite '{suite}': samples are out of date order"));
            }
            if let Some(first) = samples.first() {
                if samples.iter().any(|sample| sample.tool != first.tool) {
                    warnings.push(format!(
                        "Suite '{suite}': comparison direction varies between samples"
                    ));
                }
            }
            if let [.., previous, current] = samples.as_slice() {
                let previous_names: BTreeSet<&str> = previous
                    .benches
                    .iter()
                    .map(|metric| metric.name.as_str())
                    .collect();
                let current_names: BTreeSet<&str> = current
                    .benches
                    .iter()
                    .map(|metric| metric.name.as_str())
                    .collect();
                if previous_names != current_names {
                    warnings.push(format!(
                        "Suite '{suite}': metric names changed between the two latest samples"
                    ));
                }
            }
        }
        warnings
    }
}

impl TryFrom<PathBuf> for Record {
    type Error = anyhow::Error;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path.as_path())
            .map_err(|error| anyhow::anyhow!("Record file {path:?} reading: {error}"))?;
        let record = Self::parse(text.as_str())
            .map_err(|error| anyhow::anyhow!("Record file {path:?} parsing: {error}"))?;
        Ok(record)
    }
}
