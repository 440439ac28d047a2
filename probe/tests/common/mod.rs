#![allow(dead_code)]

use export_probe::Platform;
use std::env::consts::{DLL_PREFIX, DLL_SUFFIX};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

// Library names of the test-export and test-no-export dev-dependencies
pub const EXPORTING_LIBRARY: &str = "test_export";
pub const NON_EXPORTING_LIBRARY: &str = "test_no_export";

// Common functions used by integration tests for setup / check / teardown

pub fn probe_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_export-probe"))
}

// Copying an executable while another thread forks lets the child inherit the
// write descriptor, and exec() of the copy then fails with ETXTBSY. Staging
// and spawning take turns on this lock.
static SPAWN_LOCK: Mutex<()> = Mutex::new(());

fn spawn_lock() -> MutexGuard<'static, ()> {
    SPAWN_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// Cargo builds the cdylib dev-dependencies, but does not put them in a stable
// location: look next to the probe binary, then in deps/
pub fn built_library_path(lib_name: &str) -> PathBuf {
    let target_dir = probe_binary_path()
        .parent()
        .expect("probe binary has no parent directory")
        .to_path_buf();
    let prefix = format!("{}{}", DLL_PREFIX, lib_name);
    for dir in [target_dir.clone(), target_dir.join("deps")] {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            let stem = match name.strip_suffix(DLL_SUFFIX) {
                Some(stem) => stem,
                None => continue,
            };
            // Accept Cargo's "-<hash>" suffix, but not a longer crate name
            if stem == prefix || stem.starts_with(&format!("{}-", prefix)) {
                println!(" [.] Test library: {}", entry.path().display());
                return entry.path();
            }
        }
    }
    panic!(
        "{}{}{} not found in {} or its deps/ directory",
        DLL_PREFIX,
        lib_name,
        DLL_SUFFIX,
        target_dir.display()
    );
}

pub fn library_file_name() -> String {
    Platform::current()
        .expect("tests only run on supported platforms")
        .library_file_name()
}

// Copies a built test library into a fresh directory, under the name the
// probe expects
pub fn stage_library_from(lib_name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("unable to create temporary directory");
    let path = dir.path().join(library_file_name());
    fs::copy(built_library_path(lib_name), &path).expect("unable to copy test library");
    (dir, path)
}

pub fn stage_library() -> (TempDir, PathBuf) {
    stage_library_from(EXPORTING_LIBRARY)
}

// Copies the probe binary into a fresh directory, along with the given test
// library if any
pub fn stage_probe(lib_name: Option<&str>) -> (TempDir, PathBuf) {
    let dir = match lib_name {
        Some(lib_name) => stage_library_from(lib_name).0,
        None => tempfile::tempdir().expect("unable to create temporary directory"),
    };
    let binary = dir.path().join(probe_binary_path().file_name().unwrap());
    let _guard = spawn_lock();
    fs::copy(probe_binary_path(), &binary).expect("unable to copy probe binary");
    (dir, binary)
}

pub fn run_probe(binary: &Path, cwd: &Path) -> Output {
    let child = {
        let _guard = spawn_lock();
        Command::new(binary)
            .current_dir(cwd)
            .env_remove("RUST_LOG")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("unable to run probe binary")
    };
    let output = child
        .wait_with_output()
        .expect("unable to collect probe binary output");
    println!(
        " [.] Probe stdout:\n{}",
        String::from_utf8_lossy(&output.stdout)
    );
    println!(
        " [.] Probe stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
