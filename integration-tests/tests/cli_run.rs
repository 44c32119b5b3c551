use clap::Parser;
use integration_tests::harness::{LogDir, SAMPLE_LINES};
use logscope_core::cli::{Cli, run};
use std::fs;

#[test]
fn markdown_report_is_written_to_output() {
    // Arrange
    let logs = LogDir::new();
    logs.write("access.log", SAMPLE_LINES);
    let output = logs.path().join("report.md");
    let pattern = logs.pattern("*.log");
    let cli = Cli::parse_from([
        "logscope",
        "--path",
        pattern.as_str(),
        "--format",
        "markdown",
        "--output",
        output.to_str().unwrap(),
    ]);

    // Act
    run(cli).unwrap();

    // Assert
    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("| Total Requests | 3 |"));
    assert!(report.contains("| Start Date | 12.12.2021 |"));
    assert!(report.contains("| End Date | 13.12.2021 |"));
}

#[test]
fn flags_override_config_file() {
    // Arrange
    let logs = LogDir::new();
    logs.write("access.log", SAMPLE_LINES);
    let output = logs.path().join("report.json");
    let config = logs.path().join("logscope.toml");
    fs::write(
        &config,
        format!(
            "path = {:?}\nformat = \"json\"\noutput = {:?}\nfilter_field = \"ip\"\nfilter_value = \"192.*\"\n",
            logs.pattern("*.log"),
            output.to_str().unwrap(),
        ),
    )
    .unwrap();
    let cli = Cli::parse_from([
        "logscope",
        "--config",
        config.to_str().unwrap(),
        "--filter-value",
        "127.*",
    ]);

    // Act
    run(cli).unwrap();

    // Assert
    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("\"total_requests\": 2"));
    assert!(report.contains("\"unique_clients\": 1"));
}

#[test]
fn invalid_bound_fails_the_run() {
    // Arrange
    let logs = LogDir::new();
    logs.write("access.log", SAMPLE_LINES);
    let pattern = logs.pattern("*.log");
    let cli = Cli::parse_from([
        "logscope",
        "--path",
        pattern.as_str(),
        "--from",
        "last week",
    ]);

    // Act
    let err = run(cli).unwrap_err();

    // Assert
    assert!(err.to_string().contains("'from'"));
}

#[test]
fn missing_path_fails_the_run() {
    // Act
    let err = run(Cli::parse_from(["logscope"])).unwrap_err();

    // Assert
    assert!(err.to_string().contains("path"));
}
