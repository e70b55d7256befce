use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "sortviz-rs-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn run_sortviz(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_sortviz"))
        .args(args)
        .output()
        .expect("run sortviz");
    assert!(
        output.status.success(),
        "sortviz failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn summary_line(stdout: &str) -> &str {
    stdout
        .lines()
        .find(|line| line.starts_with("done @ "))
        .expect("summary line")
}

#[test]
fn sortviz_sorts_explicit_values_with_each_algorithm() {
    for algo in ["bubble", "insertion", "quick"] {
        let stdout = run_sortviz(&["--algorithm", algo, "--values", "5,3,8,1", "--speed-ms", "20"]);
        let summary = summary_line(&stdout);
        assert!(
            summary.contains("values=[1, 3, 5, 8]"),
            "{algo}: unexpected summary {summary}"
        );
        assert!(summary.contains("running=false"), "{algo}: {summary}");
    }
}

#[test]
fn sortviz_writes_trace_and_frames_json() {
    let dir = unique_temp_dir("trace-json");
    let trace_path = dir.join("trace.json");
    let frames_path = dir.join("frames.json");

    run_sortviz(&[
        "--algorithm",
        "quick",
        "--values",
        "2,1",
        "--trace-json",
        trace_path.to_str().unwrap(),
        "--frames-json",
        frames_path.to_str().unwrap(),
    ]);

    let raw = fs::read_to_string(&trace_path).expect("read trace.json");
    let v: Value = serde_json::from_str(&raw).expect("parse trace.json");
    assert_eq!(v["input_len"], 2);
    let events = v["events"].as_array().expect("events array");
    assert_eq!(events.len(), 6);
    assert_eq!(events[0]["kind"], "pivot");
    assert_eq!(events[5]["kind"], "done");

    let raw = fs::read_to_string(&frames_path).expect("read frames.json");
    let frames: Value = serde_json::from_str(&raw).expect("parse frames.json");
    let frames = frames.as_array().expect("frames array");
    assert_eq!(frames.len(), 6);
    assert_eq!(frames[5]["values"], serde_json::json!([1, 2]));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn sortviz_until_ms_leaves_run_paused_midway() {
    let stdout = run_sortviz(&[
        "--algorithm",
        "bubble",
        "--values",
        "3,1,2",
        "--speed-ms",
        "100",
        "--until-ms",
        "150",
    ]);
    let summary = summary_line(&stdout);
    // t=0 和 t=100 两个 tick：compare, swap
    assert!(summary.contains("done @ 150ms"), "{summary}");
    assert!(summary.contains("values=[1, 3, 2]"), "{summary}");
    assert!(summary.contains("applied=2"), "{summary}");
    assert!(summary.contains("running=false"), "{summary}");
}

#[test]
fn sortviz_reads_config_file_and_replays_trace() {
    let dir = unique_temp_dir("config");
    let config = dir.join("config.json");
    fs::write(
        &config,
        r#"{ "algorithm": "insertion", "speed_ms": 20, "seed": 3, "size": 6 }"#,
    )
    .expect("write config");
    let trace_path = dir.join("trace.json");

    let stdout = run_sortviz(&[
        "--config",
        config.to_str().unwrap(),
        "--values",
        "4,2,3",
        "--trace-json",
        trace_path.to_str().unwrap(),
    ]);
    assert!(stdout.contains("algorithm=insertion"), "{stdout}");
    assert!(summary_line(&stdout).contains("values=[2, 3, 4]"));

    let stdout = run_sortviz(&[
        "--values",
        "4,2,3",
        "--replay",
        trace_path.to_str().unwrap(),
    ]);
    assert!(summary_line(&stdout).contains("values=[2, 3, 4]"));

    let _ = fs::remove_dir_all(&dir);
}
