//!
//! The benchmark recorder binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use clap::Parser;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let mut record = match arguments.record_path {
        Some(path) if path.exists() => benchmark_recorder::Record::try_from(path)?,
        _ => benchmark_recorder::Record::default(),
    };
    if let Some(repo_url) = arguments.repo_url {
        record.repo_url = repo_url;
    }

    let context = arguments
        .commit_path
        .map(benchmark_recorder::CommitContext::try_from_path)
        .transpose()?;

    let input_paths: Vec<std::path::PathBuf> =
        if arguments.input_paths.len() == 1 && arguments.input_paths[0].is_dir() {
            let resolution_pattern =
                format!("{}/**/*.json", arguments.input_paths[0].to_string_lossy());
            glob::glob(resolution_pattern.as_str())?
                .filter_map(Result::ok)
                .collect()
        } else {
            arguments.input_paths
        };
    if input_paths.is_empty() && record.entries.is_empty() {
        anyhow::bail!(
            "No input files provided and the record is empty. Pass input files or `--record-path`."
        );
    }
    for path in input_paths.into_iter() {
        match benchmark_recorder::InputReport::try_from(path.as_path()) {
            Ok(input) => record.extend(input, context.as_ref())?,
            Err(benchmark_recorder::InputReportError::EmptyFile { path }) => {
                if !arguments.quiet {
                    eprintln!("Warning: Input file {path:?} is empty and will be skipped.");
                }
                continue;
            }
            Err(error) => Err(error)?,
        }
    }

    if let Some(max_items) = arguments.max_items {
        record.retain_recent(max_items);
    }
    if !arguments.quiet {
        for warning in record.lint() {
            eprintln!("Warning: {warning}");
        }
    }

    let has_alerts = {
        let mut results = benchmark_recorder::Results::compare(
            &record,
            arguments.alert_threshold,
            arguments.suite_filter.as_ref(),
        );
        results.sort_worst();
        if !arguments.quiet {
            results.write_all(&mut std::io::stdout())?;
        }
        results.has_alerts()
    };

    let output: benchmark_recorder::Output = (record, arguments.output_format).try_into()?;
    output.write_to_file(arguments.output_path)?;

    if arguments.fail_on_alert && has_alerts {
        anyhow::bail!("Performance alert: at least one metric regressed past the threshold");
    }

    Ok(())
}
