//!
//! Benchmark record output.
//!

pub mod csv;
pub mod file;
pub mod format;
pub mod js;
pub mod json;
pub mod markdown;
pub mod xlsx;

use std::path::PathBuf;

use crate::model::record::Record;
use crate::output::format::Format;

use self::csv::Csv;
use self::file::File;
use self::js::Js;
use self::json::Json;
use self::markdown::Markdown;
use self::xlsx::Xlsx;

///
/// Serialized record ready to be written out.
///
pub enum Output {
    /// Record output is a single unnamed file.
    SingleFile(String),
    /// Record output is a single unnamed XLSX workbook.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
    /// Record output is structured as a file tree, relative to some
    /// user-provided output directory.
    MultipleFiles(Vec<File>),
}

impl Output {
    ///
    /// Writes the record to a file using a provided serializer.
    ///
    pub fn write_to_file(self, path: PathBuf) -> anyhow::Result<()> {
        match self {
            Output::SingleFile(content) => {
                std::fs::write(path.as_path(), content)
                    .map_err(|error| anyhow::anyhow!("Record file {path:?} writing: {error}"))?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path.as_path())
                    .map_err(|error| anyhow::anyhow!("Record file {path:?} writing: {error}"))?;
            }
            Output::MultipleFiles(files) => {
                if !files.is_empty() {
                    std::fs::create_dir_all(&path)?;
                }
                for File {
                    path: relative_path,
                    content,
                } in files
                {
                    let file_path = path.join(relative_path);
                    std::fs::write(file_path.as_path(), content).map_err(|error| {
                        anyhow::anyhow!("Record file {file_path:?} writing: {error}")
                    })?;
                }
            }
        }
        Ok(())
    }
}

impl TryFrom<(Record, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((record, output_format): (Record, Format)) -> Result<Self, Self::Error> {
        Ok(match output_format {
            Format::Js => Js::from(&record).into(),
            Format::Json => Json::from(&record).into(),
            Format::Csv => Csv::try_from(&record)?.into(),
            Format::Md => Markdown::try_from(&record)?.into(),
            Format::Xlsx => Xlsx::try_from(&record)?.into(),
        })
    }
}

impl From<Js> for Output {
    fn from(value: Js) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Markdown> for Output {
    fn from(value: Markdown) -> Self {
        Output::MultipleFiles(value.files)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}
