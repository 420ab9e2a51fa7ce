//!
//! The benchmark recorder library.
//!

pub mod input;
pub mod model;
pub mod output;
pub mod results;
pub mod util;

pub use crate::input::error::Error as InputReportError;
pub use crate::input::iperf3::Iperf3Report;
pub use crate::input::Input as InputReport;
pub use crate::input::Report;
pub use crate::model::context::Context as CommitContext;
pub use crate::model::record::sample::commit::Commit;
pub use crate::model::record::sample::commit::GitUser;
pub use crate::model::record::sample::metric::Metric;
pub use crate::model::record::sample::tool::Tool;
pub use crate::model::record::sample::Sample;
pub use crate::model::record::Record;
pub use crate::output::csv::Csv as CsvOutput;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::js::Js as JsOutput;
pub use crate::output::json::Json as JsonOutput;
pub use crate::output::markdown::Markdown as MarkdownOutput;
pub use crate::output::xlsx::Xlsx as XlsxOutput;
pub use crate::output::Output;
pub use crate::results::run_description::RunDescription;
pub use crate::results::Comparison;
pub use crate::results::Results;
