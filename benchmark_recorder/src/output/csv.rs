//!
//! Serializing the record to CSV.
//!

use std::fmt::Write as _;

use crate::model::record::Record;

///
/// Serialize the record to CSV in the following format:
/// "suite", "commit", "date", "name", "value", "unit"
///
#[derive(Default)]
pub struct Csv {
    /// Serialized CSV.
    pub content: String,
}

impl TryFrom<&Record> for Csv {
    type Error = std::fmt::Error;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        let mut content = String::with_capacity(estimate_csv_size(record));
        content.push_str(r#""suite", "commit", "date", "name", "value", "unit""#);
        content.push('\n');
        for (suite, samples) in record.entries.iter() {
            for sample in samples.iter() {
                for metric in sample.benches.iter() {
                    writeln!(
                        &mut content,
                        r#""{}", "{}", {}, "{}", {}, "{}""#,
                        suite, sample.commit.id, sample.date, metric.name, metric.value, metric.unit,
                    )?;
                }
            }
        }
        Ok(Self { content })
    }
}

///
/// Upper-bound estimate of the CSV size to avoid reallocations.
///
fn estimate_csv_size(record: &Record) -> usize {
    let line_estimate = 128;
    record
        .entries
        .iter()
        .map(|(suite, samples)| {
            samples
                .iter()
                .map(|sample| sample.benches.len() * (suite.len() + line_estimate))
                .sum::<usize>()
        })
        .sum::<usize>()
        + line_estimate
}
