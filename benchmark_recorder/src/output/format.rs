//!
//! Output record format.
//!

///
/// Output record format.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Format {
    /// The dashboard data file: a JS assignment around pretty-printed JSON.
    #[default]
    Js,
    /// Pretty-printed raw JSON of the record.
    Json,
    /// Flat table with one row per metric observation.
    Csv,
    /// Markdown summary, one file per suite.
    Md,
    /// Excel spreadsheet with one worksheet per suite.
    Xlsx,
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "js" | "data-js" => Ok(Self::Js),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "md" | "markdown" => Ok(Self::Md),
            "xlsx" => Ok(Self::Xlsx),
            string => anyhow::bail!(
                "Unknown record format `{string}`. Supported formats: {}",
                vec![Self::Js, Self::Json, Self::Csv, Self::Md, Self::Xlsx]
                    .into_iter()
                    .map(|element| element.to_string().to_lowercase())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Js => write!(f, "js"),
            Format::Json => write!(f, "json"),
            Format::Csv => write!(f, "csv"),
            Format::Md => write!(f, "md"),
            Format::Xlsx => write!(f, "xlsx"),
        }
    }
}
