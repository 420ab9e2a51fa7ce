//!
//! Tests for the benchmark recorder.
//!

#![cfg(test)]

use chrono::DateTime;

fn commit(id: &str) -> benchmark_recorder::Commit {
    benchmark_recorder::Commit {
        author: benchmark_recorder::GitUser {
            name: "Alice Doe".to_owned(),
            username: "alice".to_owned(),
            email: None,
        },
        committer: benchmark_recorder::GitUser {
            name: "Alice Doe".to_owned(),
            username: "alice".to_owned(),
            email: Some("alice@example.com".to_owned()),
        },
        id: id.to_owned(),
        message: "net: tune virtio queue sizes".to_owned(),
        timestamp: DateTime::parse_from_rfc3339("2024-05-10T12:00:00+00:00")
            .expect("Always valid"),
        url: format!("https://github.com/acme/libos/commit/{id}"),
    }
}

fn sample(
    id: &str,
    date: u64,
    tool: benchmark_recorder::Tool,
    benches: Vec<benchmark_recorder::Metric>,
) -> benchmark_recorder::Sample {
    benchmark_recorder::Sample::new(commit(id), date, tool, benches)
}

fn metric(name: &str, value: f64, unit: &str) -> benchmark_recorder::Metric {
    benchmark_recorder::Metric::new(name.to_owned(), value, unit.to_owned(), None)
}

#[test]
fn convert() {
    let context = serde_json::from_str::<benchmark_recorder::CommitContext>(
        r#"
    { "commit": {
        "author": { "name": "Alice Doe", "username": "alice" },
        "committer": { "name": "Alice Doe", "username": "alice", "email": "alice@example.com" },
        "id": "0123456789abcdef0123456789abcdef01234567",
        "message": "net: tune virtio queue sizes",
        "timestamp": "2024-05-10T12:00:00+00:00",
        "url": "https://github.com/acme/libos/commit/0123456789abcdef"
    }, "date": 1715342400000 }"#,
    )
    .expect("Failed to parse the commit context");
    context.validate().expect("Failed to validate the context");

    let sysbench_report = r#"
    { "suite": "Sysbench Benchmark", "tool": "customSmallerIsBetter", "data": [
        { "name": "average latency", "value": 1.27, "unit": "ms" },
        { "name": "95th percentile latency", "value": 2.18, "unit": "ms", "extra": "sysbench oltp_read_only" }
    ] }"#;
    let input_1 = serde_json::from_str::<benchmark_recorder::InputReport>(sysbench_report)
        .expect("Failed to parse a metrics report");

    let iperf3_report = r#"
    { "suite": "Iperf3 Benchmark", "data": {
        "start": { "version": "iperf 3.16" },
        "intervals": [],
        "end": {
            "sum_sent": { "bits_per_second": 9410000000, "bytes": 11762500000, "seconds": 10.0 },
            "sum_received": { "bits_per_second": 9380000000, "bytes": 11725000000, "seconds": 10.0 },
            "cpu_utilization_percent": { "host_total": 12.3, "remote_total": 48.9 }
        }
    } }"#;
    let input_2 = serde_json::from_str::<benchmark_recorder::InputReport>(iperf3_report)
        .expect("Failed to parse an iperf3 report");

    let mut record = benchmark_recorder::Record::default();
    record.repo_url = "https://github.com/acme/libos".to_owned();
    record
        .extend(input_1, Some(&context))
        .expect("Failed to extend the record with a metrics report");
    record
        .extend(input_2, Some(&context))
        .expect("Failed to extend the record with an iperf3 report");

    assert_eq!(record.entries.len(), 2);
    assert_eq!(record.last_update, 1715342400000);

    let iperf3_samples = record
        .entries
        .get("Iperf3 Benchmark")
        .expect("Always exists");
    assert_eq!(iperf3_samples.len(), 1);
    assert_eq!(iperf3_samples[0].tool, benchmark_recorder::Tool::BiggerIsBetter);
    assert_eq!(iperf3_samples[0].benches[0].name, "sender throughput");
    assert_eq!(iperf3_samples[0].benches[0].value, 9410000000.0 / 1e6);
    assert_eq!(iperf3_samples[0].benches[0].unit, "Mbits/sec");
    assert_eq!(
        iperf3_samples[0].benches[0].extra.as_deref(),
        Some("host CPU: 12.3 %")
    );

    let sysbench_samples = record
        .entries
        .get("Sysbench Benchmark")
        .expect("Always exists");
    assert_eq!(
        sysbench_samples[0].tool,
        benchmark_recorder::Tool::SmallerIsBetter
    );
    assert_eq!(sysbench_samples[0].benches.len(), 2);

    let output: benchmark_recorder::Output = (record.clone(), benchmark_recorder::OutputFormat::Js)
        .try_into()
        .expect("Failed to convert the record to output");
    let contents = match output {
        benchmark_recorder::Output::SingleFile(file) => file,
        _ => unimplemented!(),
    };
    assert!(contents.starts_with("window.BENCHMARK_DATA = {"));

    let reparsed =
        benchmark_recorder::Record::parse(contents.as_str()).expect("Failed to reparse the record");
    assert_eq!(reparsed, record);
}

#[test]
fn merge_native_record() {
    let native_report = r#"
    { "data": {
        "lastUpdate": 1715342400000,
        "repoUrl": "https://github.com/acme/libos",
        "entries": { "Iperf3 Benchmark": [ {
            "commit": {
                "author": { "name": "Alice Doe", "username": "alice" },
                "committer": { "name": "Alice Doe", "username": "alice" },
                "id": "0123456789abcdef0123456789abcdef01234567",
                "message": "net: tune virtio queue sizes",
                "timestamp": "2024-05-10T12:00:00+00:00",
                "url": "https://github.com/acme/libos/commit/0123456789abcdef"
            },
            "date": 1715342400000,
            "tool": "customBiggerIsBetter",
            "benches": [
                { "name": "sender throughput", "value": 9410.0, "unit": "Mbits/sec" }
            ]
        } ] }
    } }"#;
    let input = serde_json::from_str::<benchmark_recorder::InputReport>(native_report)
        .expect("Failed to parse a native record report");
    assert!(matches!(input.data, benchmark_recorder::Report::Native(_)));

    let mut record = benchmark_recorder::Record::default();
    record
        .extend(input, None)
        .expect("Failed to merge a native record");
    assert_eq!(record.repo_url, "https://github.com/acme/libos");
    assert_eq!(record.entries["Iperf3 Benchmark"].len(), 1);
    assert_eq!(record.last_update, 1715342400000);
}

#[test]
fn strip_assignment() {
    assert_eq!(
        benchmark_recorder::Record::strip_assignment("window.BENCHMARK_DATA = {\"a\": 1}"),
        Some("{\"a\": 1}")
    );
    assert_eq!(
        benchmark_recorder::Record::strip_assignment("  window.BENCHMARK_DATA = {\"a\": 1};\n"),
        Some("{\"a\": 1}")
    );
    assert_eq!(
        benchmark_recorder::Record::strip_assignment("{\"a\": 1}"),
        None
    );
}

#[test]
fn append_keeps_date_order() {
    let mut record = benchmark_recorder::Record::default();
    let suite = "Iperf3 Benchmark".to_owned();
    let tool = benchmark_recorder::Tool::BiggerIsBetter;
    record
        .append_sample(
            suite.clone(),
            sample("a1", 2000, tool, vec![metric("sender throughput", 9410.0, "Mbits/sec")]),
        )
        .expect("Always valid");
    record
        .append_sample(
            suite.clone(),
            sample("b2", 1000, tool, vec![metric("sender throughput", 9360.0, "Mbits/sec")]),
        )
        .expect("Always valid");
    record
        .append_sample(
            suite.clone(),
            sample("c3", 3000, tool, vec![metric("sender throughput", 9500.0, "Mbits/sec")]),
        )
        .expect("Always valid");

    let dates: Vec<u64> = record.entries[&suite]
        .iter()
        .map(|sample| sample.date)
        .collect();
    assert_eq!(dates, vec![1000, 2000, 3000]);
    assert_eq!(record.last_update, 3000);
    assert!(record.lint().is_empty());
}

#[test]
fn append_rejects_tool_mismatch() {
    let mut record = benchmark_recorder::Record::default();
    let suite = "Sysbench Benchmark".to_owned();
    record
        .append_sample(
            suite.clone(),
            sample(
                "a1",
                1000,
                benchmark_recorder::Tool::SmallerIsBetter,
                vec![metric("average latency", 1.27, "ms")],
            ),
        )
        .expect("Always valid");
    let result = record.append_sample(
        suite,
        sample(
            "b2",
            2000,
            benchmark_recorder::Tool::BiggerIsBetter,
            vec![metric("average latency", 1.31, "ms")],
        ),
    );
    assert!(result.is_err());
}

#[test]
fn retention_drops_oldest() {
    let mut record = benchmark_recorder::Record::default();
    let suite = "Iperf3 Benchmark".to_owned();
    let tool = benchmark_recorder::Tool::BiggerIsBetter;
    for (id, date) in [("a1", 1000), ("b2", 2000), ("c3", 3000)] {
        record
            .append_sample(
                suite.clone(),
                sample(id, date, tool, vec![metric("sender throughput", 9410.0, "Mbits/sec")]),
            )
            .expect("Always valid");
    }
    record.retain_recent(2);
    let dates: Vec<u64> = record.entries[&suite]
        .iter()
        .map(|sample| sample.date)
        .collect();
    assert_eq!(dates, vec![2000, 3000]);
}

#[test]
fn lint_reports_metric_name_drift() {
    let mut record = benchmark_recorder::Record::default();
    let suite = "Iperf3 Benchmark".to_owned();
    let tool = benchmark_recorder::Tool::BiggerIsBetter;
    record
        .append_sample(
            suite.clone(),
            sample("a1", 1000, tool, vec![metric("sender throughput", 9410.0, "Mbits/sec")]),
        )
        .expect("Always valid");
    record
        .append_sample(
            suite,
            sample("b2", 2000, tool, vec![metric("receiver throughput", 9380.0, "Mbits/sec")]),
        )
        .expect("Always valid");
    let warnings = record.lint();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("metric names changed"));
}

#[test]
fn alerts_respect_comparison_direction() {
    let mut record = benchmark_recorder::Record::default();
    let latency = "Sysbench Benchmark".to_owned();
    let throughput = "Iperf3 Benchmark".to_owned();
    record
        .append_sample(
            latency.clone(),
            sample(
                "a1",
                1000,
                benchmark_recorder::Tool::SmallerIsBetter,
                vec![metric("average latency", 1.0, "ms")],
            ),
        )
        .expect("Always valid");
    record
        .append_sample(
            latency,
            sample(
                "b2",
                2000,
                benchmark_recorder::Tool::SmallerIsBetter,
                vec![metric("average latency", 2.5, "ms")],
            ),
        )
        .expect("Always valid");
    record
        .append_sample(
            throughput.clone(),
            sample(
                "a1",
                1000,
                benchmark_recorder::Tool::BiggerIsBetter,
                vec![metric("sender throughput", 9000.0, "Mbits/sec")],
            ),
        )
        .expect("Always valid");
    record
        .append_sample(
            throughput,
            sample(
                "b2",
                2000,
                benchmark_recorder::Tool::BiggerIsBetter,
                vec![metric("sender throughput", 9500.0, "Mbits/sec")],
            ),
        )
        .expect("Always valid");

    let results = benchmark_recorder::Results::compare(&record, 2.0, None);
    assert_eq!(results.comparisons.len(), 2);
    let alerts: Vec<_> = results.alerts().collect();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].1.current.name, "average latency");
    assert_eq!(alerts[0].0, 2.5);
    assert!(results.has_alerts());

    let filter = regex::Regex::new("^Iperf3").expect("Always valid");
    let filtered = benchmark_recorder::Results::compare(&record, 2.0, Some(&filter));
    assert_eq!(filtered.comparisons.len(), 1);
    assert!(!filtered.has_alerts());
}

#[test]
fn markdown_compares_latest_samples() {
    let mut record = benchmark_recorder::Record::default();
    let suite = "Iperf3 Benchmark".to_owned();
    let tool = benchmark_recorder::Tool::BiggerIsBetter;
    record
        .append_sample(
            suite.clone(),
            sample("a1", 1000, tool, vec![metric("sender throughput", 9500.0, "Mbits/sec")]),
        )
        .expect("Always valid");
    record
        .append_sample(
            suite,
            sample("b2", 2000, tool, vec![metric("sender throughput", 9025.0, "Mbits/sec")]),
        )
        .expect("Always valid");

    let markdown = benchmark_recorder::MarkdownOutput::try_from(&record)
        .expect("Failed to render the markdown summary");
    assert_eq!(markdown.files.len(), 1);
    assert_eq!(
        markdown.files[0].path.to_string_lossy(),
        "iperf3-benchmark.md"
    );
    assert!(markdown.files[0].content.contains("# Iperf3 Benchmark"));
    assert!(markdown.files[0]
        .content
        .contains("| sender throughput (Mbits/sec) | 9500 | 9025 | 1.053 |"));
}

#[test]
fn csv_flattens_observations() {
    let mut record = benchmark_recorder::Record::default();
    record
        .append_sample(
            "Sysbench Benchmark".to_owned(),
            sample(
                "a1",
                1000,
                benchmark_recorder::Tool::SmallerIsBetter,
                vec![
                    metric("average latency", 1.27, "ms"),
                    metric("95th percentile latency", 2.18, "ms"),
                ],
            ),
        )
        .expect("Always valid");

    let csv = benchmark_recorder::CsvOutput::try_from(&record)
        .expect("Failed to render the CSV output");
    let lines: Vec<&str> = csv.content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        r#""suite", "commit", "date", "name", "value", "unit""#
    );
    assert!(lines[1].contains(r#""average latency", 1.27, "ms""#));
}

#[test]
fn xlsx_allocates_one_worksheet_per_suite() {
    let mut record = benchmark_recorder::Record::default();
    record
        .append_sample(
            "Iperf3 Benchmark".to_owned(),
            sample(
                "a1",
                1000,
                benchmark_recorder::Tool::BiggerIsBetter,
                vec![metric("sender throughput", 9410.0, "Mbits/sec")],
            ),
        )
        .expect("Always valid");
    record
        .append_sample(
            "Sysbench Benchmark".to_owned(),
            sample(
                "a1",
                1000,
                benchmark_recorder::Tool::SmallerIsBetter,
                vec![metric("average latency", 1.27, "ms")],
            ),
        )
        .expect("Always valid");

    let xlsx = benchmark_recorder::XlsxOutput::try_from(&record)
        .expect("Failed to render the XLSX output");
    assert_eq!(xlsx.worksheets.len(), 2);
}

#[test]
fn xlsx_sheet_names_stay_on_char_boundaries() {
    use benchmark_recorder::output::xlsx::worksheet::Worksheet;

    let suite = format!("{}漢", "a".repeat(30));
    let name = Worksheet::sheet_name(suite.as_str(), &std::collections::BTreeSet::new());
    assert_eq!(name, "a".repeat(30));

    let mut record = benchmark_recorder::Record::default();
    record
        .append_sample(
            suite,
            sample(
                "a1",
                1000,
                benchmark_recorder::Tool::BiggerIsBetter,
                vec![metric("sender throughput", 9410.0, "Mbits/sec")],
            ),
        )
        .expect("Always valid");
    let xlsx = benchmark_recorder::XlsxOutput::try_from(&record)
        .expect("Failed to render the XLSX output");
    assert_eq!(xlsx.worksheets.len(), 1);
}

#[test]
fn xlsx_sheet_names_stay_unique() {
    use benchmark_recorder::output::xlsx::worksheet::Worksheet;

    let taken = std::collections::BTreeSet::from(["A B".to_owned()]);
    assert_eq!(Worksheet::sheet_name("A/B", &taken), "A B (2)");

    let mut record = benchmark_recorder::Record::default();
    for suite in ["A/B", "A B"] {
        record
            .append_sample(
                suite.to_owned(),
                sample(
                    "a1",
                    1000,
                    benchmark_recorder::Tool::BiggerIsBetter,
                    vec![metric("sender throughput", 9410.0, "Mbits/sec")],
                ),
            )
            .expect("Always valid");
    }
    let xlsx = benchmark_recorder::XlsxOutput::try_from(&record)
        .expect("Failed to render the XLSX output");
    assert_eq!(xlsx.worksheets.len(), 2);
}
