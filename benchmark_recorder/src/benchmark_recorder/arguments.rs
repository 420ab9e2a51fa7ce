//!
//! The benchmark recorder arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark recorder arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses warnings and the comparison report.
    #[arg(short, long)]
    pub quiet: bool,

    /// Input report files.
    /// If only one path is provided and it is a directory, it is globbed for JSON files.
    pub input_paths: Vec<PathBuf>,

    /// Existing record to load and extend. An absent file starts an empty record.
    #[arg(long = "record-path")]
    pub record_path: Option<PathBuf>,

    /// Commit context JSON, required whenever an input produces a new sample.
    #[arg(long = "commit-path")]
    pub commit_path: Option<PathBuf>,

    /// Sets the record's repository URL.
    #[arg(long = "repo-url")]
    pub repo_url: Option<String>,

    /// Per-suite retention cap applied after appending.
    #[arg(long = "max-items")]
    pub max_items: Option<usize>,

    /// Alert threshold for the normalized regression ratio.
    #[arg(long = "alert-threshold", default_value_t = 2.0)]
    pub alert_threshold: f64,

    /// Exits with an error if any metric regressed past the alert threshold.
    #[arg(long = "fail-on-alert")]
    pub fail_on_alert: bool,

    /// Regular expression restricting which suites are compared and printed.
    #[arg(long = "suite-filter")]
    pub suite_filter: Option<regex::Regex>,

    /// Record output format: `js`, `json`, `csv`, `md`, or `xlsx`.
    #[arg(long = "output-format", default_value_t = benchmark_recorder::OutputFormat::Js)]
    pub output_format: benchmark_recorder::OutputFormat,

    /// Output file, or output directory for multi-file formats.
    #[arg(long = "output-path")]
    pub output_path: PathBuf,
}
