//!
//! An entry in the suite comparison results table.
//!

use crate::model::record::sample::metric::Metric;

///
/// An entry in the suite comparison results table: one metric of the latest
/// sample next to its predecessor.
///
#[derive(Clone, Debug)]
pub struct RunDescription<'a> {
    /// Name of the suite the metric belongs to.
    pub suite: &'a str,
    /// The metric in the previous sample.
    pub previous: &'a Metric,
    /// The metric in the latest sample.
    pub current: &'a Metric,
}

impl std::fmt::Display for RunDescription<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let RunDescription {
            previous, current, ..
        } = self;

        f.write_fmt(format_args!(
            "{} ({}): {} -> {}",
            current.name, current.unit, previous.value, current.value,
        ))
    }
}
