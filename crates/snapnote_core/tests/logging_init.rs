//! Logging bootstrap contract: idempotent re-init, conflict rejection.

use snapnote_core::{init_logging, logging_status};
use tempfile::tempdir;

#[test]
fn init_is_idempotent_for_same_config_and_rejects_conflicts() {
    let first_dir = tempdir().expect("temp dir should be created");
    let second_dir = tempdir().expect("temp dir should be created");
    let first_path = first_dir.path().to_str().expect("utf-8 path").to_string();
    let second_path = second_dir.path().to_str().expect("utf-8 path").to_string();

    init_logging("info", &first_path).expect("first init should succeed");
    init_logging("info", &first_path).expect("same config should be idempotent");

    let level_conflict = init_logging("debug", &first_path).expect_err("level conflict");
    assert!(level_conflict.contains("refusing to switch"));

    let dir_conflict = init_logging("info", &second_path).expect_err("directory conflict");
    assert!(dir_conflict.contains("refusing to switch"));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, first_dir.path());
}

#[test]
fn invalid_inputs_are_rejected_before_any_state_is_touched() {
    assert!(init_logging("loud", "/tmp/snapnote-logs").is_err());
    assert!(init_logging("info", "relative/logs").is_err());
    assert!(init_logging("info", "   ").is_err());
}
