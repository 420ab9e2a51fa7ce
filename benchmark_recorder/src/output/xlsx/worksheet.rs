//!
//! XLSX worksheet for one benchmark suite.
//!

use std::collections::BTreeSet;

use crate::model::record::sample::Sample;
use crate::util;

///
/// XLSX worksheet for one benchmark suite.
///
/// One row per sample; fixed columns for the commit and date, then one
/// column per metric of the suite.
///
#[derive(Default)]
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// Metric names allocated to value columns, left to right.
    pub columns: Vec<String>,
    /// Next free data row.
    pub next_row: u32,
}

impl Worksheet {
    /// Fixed leading headers and their column widths.
    const FIXED_HEADERS: [(&'static str, usize); 2] = [("Commit", 12), ("Date", 24)];

    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: usize = 14;

    /// Maximum worksheet name length imposed by the XLSX format.
    const MAX_SHEET_NAME_LENGTH: usize = 31;

    ///
    /// Creates a new worksheet with the given metric columns.
    ///
    /// The sheet name must already be valid and unique within the workbook,
    /// see [`Self::sheet_name`].
    ///
    pub fn new(name: String, metrics: Vec<(String, String)>) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;

        for (header_index, (header_name, column_width)) in
            Self::FIXED_HEADERS.into_iter().enumerate()
        {
            worksheet.write_with_format(
                0,
                header_index as u16,
                header_name,
                &Self::caption_format(),
            )?;
            worksheet.set_column_width(header_index as u16, column_width as f64)?;
        }

        let mut columns = Vec::with_capacity(metrics.len());
        for (column_index, (name, unit)) in metrics.into_iter().enumerate() {
            let column = (Self::FIXED_HEADERS.len() + column_index) as u16;
            worksheet.write_with_format(
                0,
                column,
                format!("{name}\n({unit})"),
                &Self::caption_format(),
            )?;
            worksheet.set_column_width(column, Self::VALUE_COLUMN_WIDTH as f64)?;
            columns.push(name);
        }

        Ok(Self {
            worksheet,
            columns,
            next_row: 1,
        })
    }

    ///
    /// Appends a row with a sample's values.
    ///
    /// Metrics missing from the sample leave their cells empty.
    ///
    pub fn write_sample(&mut self, sample: &Sample) -> anyhow::Result<()> {
        let row = self.next_row;
        self.next_row += 1;

        self.worksheet.write_with_format(
            row,
            0,
            sample.commit.short_id(),
            &Self::row_header_format(),
        )?;
        self.worksheet.write_with_format(
            row,
            1,
            util::format_timestamp_ms(sample.date),
            &Self::row_header_format(),
        )?;

        for metric in sample.benches.iter() {
            if let Some(position) = self.columns.iter().position(|name| name == &metric.name) {
                self.worksheet.write_with_format(
                    row,
                    (Self::FIXED_HEADERS.len() + position) as u16,
                    metric.value,
                    &Self::value_format(),
                )?;
            }
        }

        Ok(())
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Produces a sheet name the XLSX format accepts, distinct from the
    /// names already taken by other suites of the workbook.
    ///
    /// Colliding names, whether from sanitized characters or from
    /// truncation, get a numeric suffix.
    ///
    pub fn sheet_name(suite: &str, taken: &BTreeSet<String>) -> String {
        let name = Self::sanitize(suite, Self::MAX_SHEET_NAME_LENGTH);
        if !taken.contains(name.as_str()) {
            return name;
        }
        let mut ordinal: u32 = 2;
        loop {
            let suffix = format!(" ({ordinal})");
            let mut name = Self::sanitize(
                suite,
                Self::MAX_SHEET_NAME_LENGTH.saturating_sub(suffix.len()),
            );
            name.push_str(suffix.as_str());
            if !taken.contains(name.as_str()) {
                return name;
            }
            ordinal += 1;
        }
    }

    ///
    /// Replaces the characters the XLSX format forbids in sheet names and
    /// cuts the name down to `max_length` bytes on a character boundary.
    ///
    fn sanitize(suite: &str, max_length: usize) -> String {
        let mut name = String::with_capacity(max_length);
        for character in suite.chars() {
            let character = match character {
                '[' | ']' | ':' | '*' | '?' | '/' | '\\' => ' ',
                _ => character,
            };
            if name.len() + character.len_utf8() > max_length {
                break;
            }
            name.push(character);
        }
        name
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn caption_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#EEF3FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Top);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#DDE6FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Left);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#000000");
        let format = format.set_background_color("#FFFFFF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Right);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }
}
