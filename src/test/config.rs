use crate::algo::Algorithm;
use crate::playback::{DEFAULT_SIZE, DEFAULT_SPEED_MS, MIN_TICK_MS, PlaybackConfig, PlaybackError};
use crate::sim::SimTime;
use crate::viz::SnapshotPolicy;

#[test]
fn config_parses_empty_json_with_defaults() {
    let cfg = PlaybackConfig::from_json_str("{}").expect("parse config");
    assert_eq!(cfg, PlaybackConfig::default());
    assert_eq!(cfg.size, DEFAULT_SIZE);
    assert_eq!(cfg.speed_ms, DEFAULT_SPEED_MS);
    assert_eq!(cfg.algorithm, Algorithm::Bubble);
    assert!(cfg.seed.is_none());
    assert_eq!(cfg.snapshot_policy, SnapshotPolicy::ClearAll);
}

#[test]
fn config_parses_snake_case_fields() {
    let raw = r#"
    {
        "size": 8,
        "speed_ms": 40,
        "algorithm": "quick",
        "seed": 42,
        "snapshot_policy": "keep_sorted"
    }
    "#;
    let cfg = PlaybackConfig::from_json_str(raw).expect("parse config");
    assert_eq!(cfg.size, 8);
    assert_eq!(cfg.algorithm, Algorithm::Quick);
    assert_eq!(cfg.seed, Some(42));
    assert_eq!(cfg.snapshot_policy, SnapshotPolicy::KeepSorted);
    assert_eq!(cfg.interval(), SimTime::from_millis(40));
}

#[test]
fn config_rejects_unknown_algorithm() {
    let err = PlaybackConfig::from_json_str(r#"{ "algorithm": "heap" }"#).expect_err("bad algo");
    assert!(matches!(err, PlaybackError::Config(_)));
}

#[test]
fn interval_and_size_are_clamped_defensively() {
    let cfg = PlaybackConfig {
        size: 0,
        speed_ms: 0,
        ..PlaybackConfig::default()
    };
    assert_eq!(cfg.effective_size(), 1);
    assert_eq!(cfg.interval(), SimTime::from_millis(MIN_TICK_MS));
}
