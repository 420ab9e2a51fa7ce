//!
//! Markdown summary of the record, one file per suite.
//!

use std::fmt::Write as _;

use crate::model::record::sample::Sample;
use crate::model::record::Record;
use crate::output::file::File;
use crate::util;
use crate::util::btreemap::intersect_keys;

///
/// Markdown summary of the record, one file per suite.
///
/// Each file shows the latest sample next to its predecessor with the
/// normalized regression ratio, which is the commit-comment form of the
/// original pipeline.
///
#[derive(Default)]
pub struct Markdown {
    /// One summary file per suite.
    pub files: Vec<File>,
}

impl TryFrom<&Record> for Markdown {
    type Error = std::fmt::Error;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        let mut files = Vec::with_capacity(record.entries.len());
        for (suite, samples) in record.entries.iter() {
            let content = match samples.as_slice() {
                [] => continue,
                [.., previous, current] => comparison_markdown(suite, previous, current)?,
                [only] => single_sample_markdown(suite, only)?,
            };
            files.push(File::new(suite_slug(suite), "md", content));
        }
        Ok(Self { files })
    }
}

///
/// Renders the latest sample of a suite next to its predecessor.
///
fn comparison_markdown(
    suite: &str,
    previous: &Sample,
    current: &Sample,
) -> Result<String, std::fmt::Error> {
    let mut content = String::new();
    writeln!(&mut content, "# {suite}")?;
    writeln!(&mut content)?;
    writeln!(
        &mut content,
        "[`{}`]({}) at {}, compared against [`{}`]({}).",
        current.commit.short_id(),
        current.commit.url,
        util::format_timestamp_ms(current.date),
        previous.commit.short_id(),
        previous.commit.url,
    )?;
    writeln!(&mut content)?;
    writeln!(&mut content, "| Metric | Previous | Current | Ratio |")?;
    writeln!(&mut content, "|:-------|---------:|--------:|------:|")?;
    for (name, previous_metric, current_metric) in
        intersect_keys(previous.metrics_by_name(), current.metrics_by_name())
    {
        let ratio = current
            .tool
            .regression_ratio(previous_metric.value, current_metric.value);
        writeln!(
            &mut content,
            "| {name} ({}) | {} | {} | {ratio:.3} |",
            current_metric.unit, previous_metric.value, current_metric.value,
        )?;
    }
    Ok(content)
}

///
/// Renders the only sample of a suite.
///
fn single_sample_markdown(suite: &str, sample: &Sample) -> Result<String, std::fmt::Error> {
    let mut content = String::new();
    writeln!(&mut content, "# {suite}")?;
    writeln!(&mut content)?;
    writeln!(
        &mut content,
        "[`{}`]({}) at {}.",
        sample.commit.short_id(),
        sample.commit.url,
        util::format_timestamp_ms(sample.date),
    )?;
    writeln!(&mut content)?;
    writeln!(&mut content, "| Metric | Value | Unit |")?;
    writeln!(&mut content, "|:-------|------:|:-----|")?;
    for metric in sample.benches.iter() {
        writeln!(
            &mut content,
            "| {} | {} | {} |",
            metric.name, metric.value, metric.unit,
        )?;
    }
    Ok(content)
}

///
/// Turns a suite name into a file name stem.
///
fn suite_slug(suite: &str) -> String {
    let slug: String = suite
        .to_lowercase()
        .chars()
        .map(|character| {
            if character.is_ascii_alphanumeric() {
                character
            } else {
                '-'
            }
        })
        .collect();
    let slug = slug.trim_matches('-').to_owned();
    if slug.is_empty() {
        "suite".to_owned()
    } else {
        slug
    }
}
