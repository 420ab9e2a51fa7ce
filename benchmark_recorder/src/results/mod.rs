//!
//! The suite comparison results.
//!

pub mod run_description;

use std::cmp;

use colored::Colorize;
use regex::Regex;

use crate::model::record::sample::tool::Tool;
use crate::model::record::sample::Sample;
use crate::model::record::Record;
use crate::util::btreemap::intersect_keys;

use self::run_description::RunDescription;

///
/// The comparison of one suite's latest sample against its predecessor.
///
#[derive(Debug)]
pub struct Comparison<'a> {
    /// Name of the compared suite.
    pub suite: &'a str,
    /// Comparison direction of the suite.
    pub tool: Tool,
    /// The previous sample.
    pub previous: &'a Sample,
    /// The latest sample.
    pub current: &'a Sample,
    /// Normalized regression ratios per metric, above 1 means worse.
    pub entries: Vec<(f64, RunDescription<'a>)>,
}

///
/// The suite comparison results.
///
#[derive(Debug)]
pub struct Results<'a> {
    /// Alert threshold for the normalized regression ratio.
    pub threshold: f64,
    /// Per-suite comparisons.
    pub comparisons: Vec<Comparison<'a>>,
}

impl<'a> Results<'a> {
    ///
    /// Compares the latest sample of each suite against its predecessor.
    ///
    /// Suites with fewer than two samples are skipped, as are suites not
    /// matching the filter. Metrics are matched by name; names present in
    /// only one of the two samples are ignored.
    ///
    pub fn compare(record: &'a Record, threshold: f64, filter: Option<&Regex>) -> Self {
        let mut comparisons = Vec::with_capacity(record.entries.len());
        for (suite, samples) in record.entries.iter() {
            if let Some(filter) = filter {
                if !filter.is_match(suite.as_str()) {
                    continue;
                }
            }
            let [.., previous, current] = samples.as_slice() else {
                continue;
            };
            let entries = intersect_keys(previous.metrics_by_name(), current.metrics_by_name())
                .map(|(_, previous_metric, current_metric)| {
                    let ratio = current
                        .tool
                        .regression_ratio(previous_metric.value, current_metric.value);
                    (
                        ratio,
                        RunDescription {
                            suite: suite.as_str(),
                            previous: previous_metric,
                            current: current_metric,
                        },
                    )
                })
                .collect();
            comparisons.push(Comparison {
                suite: suite.as_str(),
                tool: current.tool,
                previous,
                current,
                entries,
            });
        }
        Self {
            threshold,
            comparisons,
        }
    }

    ///
    /// Sorts each suite's entries so the worst regressions come first.
    ///
    pub fn sort_worst(&mut self) {
        for comparison in self.comparisons.iter_mut() {
            comparison.entries.sort_by(|a, b| {
                b.0.partial_cmp(&a.0).unwrap_or(cmp::Ordering::Equal)
            });
        }
    }

    ///
    /// Iterates over the entries whose ratio exceeds the alert threshold.
    ///
    pub fn alerts(&self) -> impl Iterator<Item = &(f64, RunDescription<'a>)> {
        self.comparisons
            .iter()
            .flat_map(|comparison| comparison.entries.iter())
            .filter(|(ratio, _)| *ratio > self.threshold)
    }

    ///
    /// Whether any compared metric regressed past the alert threshold.
    ///
    pub fn has_alerts(&self) -> bool {
        self.alerts().next().is_some()
    }

    ///
    /// Prints the results to a writer.
    ///
    pub fn write_all<W>(&self, w: &mut W) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        for comparison in self.comparisons.iter() {
            let commits = format!(
                "{} vs {}",
                comparison.current.commit.short_id(),
                comparison.previous.commit.short_id(),
            );
            writeln!(
                w,
                "╔═╡ {} ╞{}╡ {} ╞═╗",
                comparison.suite.bright_white(),
                "═".repeat(
                    48usize.saturating_sub(comparison.suite.len() + commits.len())
                ),
                commits.bright_white(),
            )?;
            for (ratio, description) in comparison.entries.iter() {
                writeln!(
                    w,
                    "║ {:50} {} ║",
                    description.to_string(),
                    Self::format_ratio(*ratio),
                )?;
            }
            writeln!(w, "╚{}╝", "═".repeat(60))?;
        }

        for (ratio, description) in self.alerts() {
            writeln!(
                w,
                "{} {}::{description}: ratio {ratio:.3} exceeds threshold {:.2}",
                "Performance alert:".bright_red(),
                description.suite,
                self.threshold,
            )?;
        }

        Ok(())
    }

    ///
    /// Formats and colorizes a normalized regression ratio.
    ///
    fn format_ratio(ratio: f64) -> colored::ColoredString {
        if ratio > 1.0 {
            format!("{ratio:7.3}").bright_red()
        } else if ratio == 1.0 {
            format!("{ratio:7.3}").white()
        } else {
            format!("{ratio:7.3}").green()
        }
    }
}
