//! Shared testing utilities for sensor-meta CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const GAINS_HEADER: &str =
    "Station,Location,Sublocation,Subsource,Scale Factor,Scale Bias,Absolute Bias,Start Date,End Date";

pub const STREAMS_HEADER: &str =
    "Station,Location,Band,Source,Sampling Rate,Axial,Reversed,Triggered,Start Date,End Date";

/// Testing harness providing an isolated metadata snapshot for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new empty snapshot directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Snapshot root used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `sensor-meta` binary within the snapshot.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("sensor-meta").expect("Failed to locate sensor-meta binary");
        cmd.current_dir(self.work_dir());
        cmd
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read `relative` from the snapshot.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir().join(relative)).expect("Failed to read test file")
    }

    /// Write a gains table with the standard header.
    pub fn write_gains(&self, rows: &[&str]) -> PathBuf {
        self.write("install/gains.csv", &table(GAINS_HEADER, rows))
    }

    /// Write a streams table with the standard header.
    pub fn write_streams(&self, rows: &[&str]) -> PathBuf {
        self.write("install/streams.csv", &table(STREAMS_HEADER, rows))
    }
}

/// Join a header and rows into CSV text with a trailing newline.
pub fn table(header: &str, rows: &[&str]) -> String {
    let mut out = String::from(header);
    out.push('\n');
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}
