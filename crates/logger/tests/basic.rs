//! Integration tests for the `logger` crate

use logger::{debug, error, info, verbose, warn};
use logger::{enable_verbose, set_level, set_level_from_str, Level};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("WARN"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("loud"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[cfg(feature = "log-debug")]
#[test]
fn debug_respects_runtime_flag() {
    use logger::{disable_debug, enable_debug};
    set_level(Level::Debug);
    disable_debug();
    debug!("should be silent");
    enable_debug();
    debug!("should emit");
}

#[cfg(feature = "verbose")]
#[test]
fn verbose_respects_runtime_flag() {
    verbose!("silent until enabled");
    enable_verbose();
    verbose!("verbose test {}", 42);
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_captures_tagged_messages() {
    use logger::init_file_logging;
    use std::fs;

    let log_path = std::env::temp_dir().join("coursegrid_logger_test.log");
    let _ = fs::remove_file(&log_path);

    assert!(init_file_logging(&log_path));

    set_level(Level::Info);
    info!("catalog loaded");
    warn!("skipping malformed entry");
    error!("catalog missing");

    // Verbose output is console-only and must not land in the file.
    #[cfg(feature = "verbose")]
    {
        enable_verbose();
        verbose!("console chatter");
    }

    let contents = fs::read_to_string(&log_path).expect("read log file");
    assert!(contents.contains("[INFO] catalog loaded"));
    assert!(contents.contains("[WARN] skipping malformed entry"));
    assert!(contents.contains("[ERROR] catalog missing"));
    assert!(!contents.contains("console chatter"));

    let _ = fs::remove_file(&log_path);
}
