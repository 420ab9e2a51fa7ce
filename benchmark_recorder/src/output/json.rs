//!
//! Native JSON format that corresponds to the inner record data model.
//!

use crate::model::record::Record;

///
/// Native JSON format that corresponds to the inner record data model.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl From<&Record> for Json {
    fn from(record: &Record) -> Self {
        let content = serde_json::to_string_pretty(record).expect("Always valid");
        Self { content }
    }
}
