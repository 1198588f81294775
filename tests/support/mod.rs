use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Test fixture holding an isolated store file in a tempdir.
pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create tempdir"),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Build a `tl` command pointed at this store, isolated from any
    /// real user config or data directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = tl_cmd();
        cmd.env("TL_STORE", self.path());
        cmd.env("XDG_CONFIG_HOME", self.dir.path().join("xdg-config"));
        cmd.env("XDG_DATA_HOME", self.dir.path().join("xdg-data"));
        cmd
    }

    /// Write raw bytes to the store file, bypassing the CLI.
    pub fn write_raw(&self, contents: &str) {
        fs::write(self.path(), contents).expect("failed to write store");
    }

    /// Read the persisted task array back as JSON.
    pub fn read_tasks(&self) -> serde_json::Value {
        let contents = fs::read_to_string(self.path()).expect("failed to read store");
        serde_json::from_str(&contents).expect("store is not valid json")
    }
}

pub fn tl_cmd() -> Command {
    Command::cargo_bin("tl").expect("binary")
}

/// Ids of the persisted tasks, in storage order.
#[allow(dead_code)]
pub fn task_ids(tasks: &serde_json::Value) -> Vec<u64> {
    tasks
        .as_array()
        .expect("task array")
        .iter()
        .map(|t| t["id"].as_u64().expect("task id"))
        .collect()
}

/// Texts of the persisted tasks, in storage order.
#[allow(dead_code)]
pub fn task_texts(tasks: &serde_json::Value) -> Vec<String> {
    tasks
        .as_array()
        .expect("task array")
        .iter()
        .map(|t| t["text"].as_str().expect("task text").to_string())
        .collect()
}
