use super::*;
use serde_json::json;
use std::io::Write;

#[test]
fn empty_config_uses_defaults() {
    let config = JobqConfig::parse("").unwrap();
    assert_eq!(config, JobqConfig::default());
    assert_eq!(config.coordinator.mailbox_capacity, 64);
    assert_eq!(config.workers.count, 3);
    assert_eq!(config.workers.poll_interval(), Duration::from_millis(20));
    assert!(config.workers.restart);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn full_config_parses() {
    let config = JobqConfig::parse(
        r#"
[coordinator]
initial_id = 10
mailbox_capacity = 8

[[coordinator.seed]]
id = 4
payload = "warmup"
duration = 5

[workers]
count = 2
poll_interval_ms = 5
crash_after = 1
restart = false

[logging]
level = "debug"
file = "jobqd.log"

[[jobs]]
payload = { name = "resize", size = 3 }
duration = 15

[[jobs]]
payload = "plain"
"#,
    )
    .unwrap();

    assert_eq!(config.coordinator.initial_id, JobId::new(10));
    assert_eq!(config.coordinator.seed.len(), 1);
    assert_eq!(config.coordinator.seed[0].payload, json!("warmup"));
    assert_eq!(config.workers.crash_after, Some(1));
    assert!(!config.workers.restart);
    assert_eq!(config.logging.file, Some(PathBuf::from("jobqd.log")));
    assert_eq!(config.jobs[0].payload, json!({ "name": "resize", "size": 3 }));
    assert_eq!(config.jobs[0].duration, 15);
    assert_eq!(config.jobs[1].duration, 0);

    let options = config.coordinator.start_options();
    assert_eq!(options.initial_id, JobId::new(10));
    assert_eq!(options.seed, config.coordinator.seed);
}

#[test]
fn zero_initial_id_is_rejected() {
    let err = JobqConfig::parse("[coordinator]\ninitial_id = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {:?}", err);
}

#[test]
fn zero_workers_is_invalid() {
    let err = JobqConfig::parse("[workers]\ncount = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("workers.count")));
}

#[test]
fn zero_mailbox_is_invalid() {
    let err = JobqConfig::parse("[coordinator]\nmailbox_capacity = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("mailbox_capacity")));
}

#[test]
fn immediate_crash_with_restart_is_invalid() {
    let err = JobqConfig::parse("[workers]\ncrash_after = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("crash_after")));

    let config = JobqConfig::parse("[workers]\ncrash_after = 0\nrestart = false\n").unwrap();
    assert_eq!(config.workers.crash_after, Some(0));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = JobqConfig::parse("[workers]\ncuont = 2\n").unwrap_err();
    assert!(err.to_string().contains("cuont"));
}

#[test]
fn load_reads_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[workers]\ncount = 5").unwrap();

    let config = JobqConfig::load(file.path()).unwrap();
    assert_eq!(config.workers.count, 5);
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = JobqConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { path: p, .. } if p == path));
}
