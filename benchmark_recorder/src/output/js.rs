//!
//! The dashboard data file format.
//!

use crate::model::record::Record;

///
/// The dashboard data file format: the record pretty-printed as JSON and
/// assigned to the JS variable the charting page reads.
///
#[derive(Default)]
pub struct Js {
    /// Serialized data file.
    pub content: String,
}

impl From<&Record> for Js {
    fn from(record: &Record) -> Self {
        let json = serde_json::to_string_pretty(record).expect("Always valid");
        let content = format!("{} = {json}", Record::DATA_VARIABLE);
        Self { content }
    }
}
