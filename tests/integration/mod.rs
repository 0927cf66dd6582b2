// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

use luhnsum::{LemmaCandidate, LemmaLookup, MorphologyError, Script};

/// Test fixture helper for creating temporary input and dictionary files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create a file with given content, creating parent directories
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Path inside the fixture that does not exist yet
    pub fn path<P: AsRef<Path>>(&self, relative_path: P) -> PathBuf {
        self.root_path.join(relative_path)
    }
}

/// Lookup returning every word as its own single normal form
pub struct IdentityLookup;

impl LemmaLookup for IdentityLookup {
    fn lookup(&self, word: &str, _script: Script) -> Result<Vec<LemmaCandidate>, MorphologyError> {
        Ok(vec![LemmaCandidate::plain(word)])
    }
}

/// Run the luhnsum binary with the given arguments
pub fn run_cli<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_luhnsum"))
        .args(args)
        .output()
        .expect("Failed to run luhnsum")
}

/// Run the luhnsum binary feeding `input` on stdin
pub fn run_cli_with_stdin<I, S>(args: I, input: &str) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let mut child = Command::new(env!("CARGO_BIN_EXE_luhnsum"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn luhnsum");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for luhnsum")
}

/// Compare two strings line by line, providing detailed diff on mismatch
pub fn assert_golden_output(actual: &str, expected: &str, context: &str) {
    let actual_lines: Vec<&str> = actual.lines().collect();
    let expected_lines: Vec<&str> = expected.lines().collect();

    if actual_lines.len() != expected_lines.len() {
        panic!(
            "{}: Line count mismatch. Expected {} lines, got {} lines\n{}",
            context, expected_lines.len(), actual_lines.len(), actual
        );
    }

    for (i, (actual_line, expected_line)) in actual_lines.iter().zip(expected_lines.iter()).enumerate() {
        if actual_line != expected_line {
            panic!(
                "{}: Line {} mismatch\nExpected: {}\nActual:   {}",
                context, i + 1, expected_line, actual_line
            );
        }
    }
}
