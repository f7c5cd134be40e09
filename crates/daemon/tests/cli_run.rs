//! CLI integration tests for the queuesim binary

use std::process::Command;

fn queuesim() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_queuesim"));
    // Ignore any QUEUESIM_* settings from the surrounding environment
    for (key, _) in std::env::vars() {
        if key.starts_with("QUEUESIM_") || key == "RUST_LOG" {
            cmd.env_remove(key);
        }
    }
    cmd
}

#[test]
fn scripted_run_reports_balanced_queue() {
    let output = queuesim()
        .args([
            "--run-for",
            "0.4",
            "--seed",
            "2432",
            "--producer-pause-min",
            "0.01",
            "--producer-pause-max",
            "0.03",
            "--consumer-pause-min",
            "0.01",
            "--consumer-pause-max",
            "0.02",
            "--processing-min",
            "0.01",
            "--processing-max",
            "0.02",
            "--log-format",
            "json",
            "--json-report",
        ])
        .output()
        .expect("failed to run queuesim binary");

    assert!(
        output.status.success(),
        "queuesim exited with non-zero status: {:?}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ADDED: Request(id=1"), "first request never logged");
    assert!(stdout.contains("Done"), "completion line missing");

    // Final line is the machine-readable report
    let report_line = stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .last()
        .expect("no output");
    let report: serde_json::Value =
        serde_json::from_str(report_line).expect("last line should be the JSON report");
    assert_eq!(report["mode"], "concurrent");
    assert_eq!(report["unjoined_loops"], 0);

    let generated = report["generated"].as_u64().expect("generated");
    let dequeued = report["dequeued"].as_u64().expect("dequeued");
    let remaining = report["remaining"].as_u64().expect("remaining");
    assert!(generated > 0);
    assert_eq!(generated, dequeued + remaining);
}

#[test]
fn sequential_mode_runs() {
    let output = queuesim()
        .args([
            "--mode",
            "sequential",
            "--run-for",
            "0.2",
            "--sequential-pause",
            "0.02",
            "--processing-min",
            "0.01",
            "--processing-max",
            "0.01",
            "--log-format",
            "compact",
        ])
        .output()
        .expect("failed to run queuesim binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Processing completed: Request(id=1)"));
    assert!(stdout.contains("Done"));
}

#[test]
fn invalid_interval_exits_with_error() {
    let output = queuesim()
        .args(["--producer-pause-min", "2", "--producer-pause-max", "1", "--run-for", "0.1"])
        .output()
        .expect("failed to run queuesim binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("producer_pause"), "stderr: {stderr}");
}
