#![cfg(target_os = "linux")]

use folder_ops::logging::init_tracing;
use folder_ops::{clear_contents, FolderOptions, LogLevel};
use tempfile::tempdir;

// Installs the global subscriber, so this binary holds a single test.
#[test]
fn init_tracing_writes_summary_to_log_file() {
    let td = tempdir().unwrap();
    let log_path = td.path().join("logs").join("folder_ops.log");
    let target = td.path().join("target");
    std::fs::create_dir_all(&target).unwrap();

    let guard = init_tracing(&LogLevel::Normal, Some(&log_path), false)
        .expect("first init succeeds")
        .expect("file layer enabled");

    clear_contents(&target, &FolderOptions::default()).unwrap();
    drop(guard);

    let contents = std::fs::read_to_string(&log_path).expect("read log file");
    assert!(
        contents.contains("Cleared directory contents"),
        "contents={contents}"
    );
    assert!(init_tracing(&LogLevel::Normal, None, false).is_err(), "second init is rejected");
}
