//!
//! XLSX output format for the benchmark record.
//!

pub mod worksheet;

use std::collections::BTreeSet;

use crate::model::record::Record;

use self::worksheet::Worksheet;

///
/// XLSX output format for the benchmark record.
///
#[derive(Default)]
pub struct Xlsx {
    /// One worksheet per suite.
    pub worksheets: Vec<Worksheet>,
}

impl Xlsx {
    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        for worksheet in self.worksheets.into_iter() {
            workbook.push_worksheet(worksheet.into_inner());
        }
        workbook
    }
}

impl TryFrom<&Record> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        let mut worksheets = Vec::with_capacity(record.entries.len());
        let mut taken_names = BTreeSet::new();
        for (suite, samples) in record.entries.iter() {
            let sheet_name = Worksheet::sheet_name(suite.as_str(), &taken_names);
            taken_names.insert(sheet_name.clone());
            let metrics = samples
                .last()
                .map(|sample| {
                    sample
                        .benches
                        .iter()
                        .map(|metric| (metric.name.clone(), metric.unit.clone()))
                        .collect::<Vec<(String, String)>>()
                })
                .unwrap_or_default();
            let mut worksheet = Worksheet::new(sheet_name, metrics)?;
            for sample in samples.iter() {
                worksheet.write_sample(sample)?;
            }
            worksheets.push(worksheet);
        }
        Ok(Self { worksheets })
    }
}
