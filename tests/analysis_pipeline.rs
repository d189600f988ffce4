use std::fs;
use std::path::Path;
use std::process::Command;

use csv_insight::{AnalyzeOptions, DomainLabel, WarningCode, analyze_file};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn write_fixture(path: &Path, content: &str) {
    fs::write(path, content).expect("fixture should be written");
}

#[test]
fn analyzes_a_restaurant_csv_end_to_end() {
    let dir = tempdir().expect("tempdir should be created");
    let input = dir.path().join("orders.csv");
    write_fixture(
        &input,
        "menu_item,price,order_date\nburger,9.50,2024-01-15\nsalad,7,2024-01-16\n",
    );

    let analysis =
        analyze_file(&input, &AnalyzeOptions::default()).expect("analysis should succeed");

    assert_eq!(analysis.result.row_count, 2);
    assert_eq!(analysis.result.columns, vec!["menu_item", "price", "order_date"]);
    assert_eq!(analysis.result.numeric_columns, vec!["price"]);
    assert_eq!(analysis.result.datetime_columns, vec!["order_date"]);
    assert_eq!(analysis.result.domain, DomainLabel::Restaurant);
    assert_eq!(analysis.result.confidence, 0.85);
}

#[test]
fn ragged_rows_degrade_to_warnings_not_errors() {
    let dir = tempdir().expect("tempdir should be created");
    let input = dir.path().join("ragged.csv");
    write_fixture(&input, "a,b\n1\n\n3,4,5\n");

    let analysis =
        analyze_file(&input, &AnalyzeOptions::default()).expect("analysis should succeed");

    // Blank line skipped: two rows, one padded and one truncated.
    assert_eq!(analysis.table.rows, vec![vec!["1", ""], vec!["3", "4"]]);
    let codes = analysis
        .warnings
        .iter()
        .map(|warning| warning.code)
        .collect::<Vec<_>>();
    assert!(codes.contains(&WarningCode::ShortRowPadded));
    assert!(codes.contains(&WarningCode::LongRowTruncated));
}

#[test]
fn windows_1252_file_decodes_without_error() {
    let dir = tempdir().expect("tempdir should be created");
    let input = dir.path().join("latin1.csv");
    // "café" in latin1 bytes in the data row.
    fs::write(&input, [b"name,price\ncaf".as_slice(), &[0xE9], b",4\n".as_slice()].concat())
        .expect("fixture should be written");

    let analysis =
        analyze_file(&input, &AnalyzeOptions::default()).expect("analysis should succeed");
    assert_eq!(analysis.table.rows, vec![vec!["café", "4"]]);
}

#[test]
fn cli_prints_domain_in_the_report() {
    let dir = tempdir().expect("tempdir should be created");
    let input = dir.path().join("subs.csv");
    write_fixture(&input, "user,plan,trial\nu1,pro,yes\nu2,free,no\n");

    let output = Command::new(env!("CARGO_BIN_EXE_csvinsight"))
        .args(["analyze", "-i", &input.to_string_lossy()])
        .output()
        .expect("CLI should run");

    assert!(output.status.success(), "stderr: {:?}", output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SaaS"), "stdout: {stdout}");
}

#[test]
fn cli_json_output_is_parseable() {
    let dir = tempdir().expect("tempdir should be created");
    let input = dir.path().join("sales.csv");
    write_fixture(&input, "product,revenue\nwidget,100\ngadget,250\n");

    let output = Command::new(env!("CARGO_BIN_EXE_csvinsight"))
        .args(["analyze", "--json", "-i", &input.to_string_lossy()])
        .output()
        .expect("CLI should run");

    assert!(output.status.success(), "stderr: {:?}", output.stderr);
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(parsed["domain"], "E-commerce");
    assert_eq!(parsed["row_count"], 2);
    assert_eq!(parsed["numeric_columns"], serde_json::json!(["revenue"]));
}

#[test]
fn cli_exits_with_code_2_when_no_data_rows() {
    let dir = tempdir().expect("tempdir should be created");
    let input = dir.path().join("empty.csv");
    write_fixture(&input, "a,b,c\n");

    let status = Command::new(env!("CARGO_BIN_EXE_csvinsight"))
        .args(["analyze", "-i", &input.to_string_lossy()])
        .status()
        .expect("CLI should run");

    assert_eq!(status.code(), Some(2));
}

#[test]
fn cli_rejects_non_csv_extension_before_parsing() {
    let dir = tempdir().expect("tempdir should be created");
    let input = dir.path().join("data.txt");
    write_fixture(&input, "a,b\n1,2\n");

    let output = Command::new(env!("CARGO_BIN_EXE_csvinsight"))
        .args(["analyze", "-i", &input.to_string_lossy()])
        .output()
        .expect("CLI should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(".csv"), "stderr: {stderr}");
}

#[test]
fn cli_export_round_trips_through_a_quoting_writer() {
    let dir = tempdir().expect("tempdir should be created");
    let input = dir.path().join("in.csv");
    let exported = dir.path().join("out.csv");
    write_fixture(&input, "a,b\n 1 , 2 \n");

    let status = Command::new(env!("CARGO_BIN_EXE_csvinsight"))
        .args([
            "analyze",
            "-i",
            &input.to_string_lossy(),
            "--export",
            &exported.to_string_lossy(),
        ])
        .status()
        .expect("CLI should run");

    assert!(status.success());
    let csv = fs::read_to_string(&exported).expect("export should be readable");
    assert_eq!(csv, "a,b\n1,2\n");
}

#[test]
fn cli_ask_answers_with_real_statistics() {
    let dir = tempdir().expect("tempdir should be created");
    let input = dir.path().join("prices.csv");
    write_fixture(&input, "item,price\na,10\nb,20\nc,30\n");

    let output = Command::new(env!("CARGO_BIN_EXE_csvinsight"))
        .args([
            "ask",
            "-i",
            &input.to_string_lossy(),
            "-q",
            "what is the average price?",
        ])
        .output()
        .expect("CLI should run");

    assert!(output.status.success(), "stderr: {:?}", output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("20.00"), "stdout: {stdout}");
}
