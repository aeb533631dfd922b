use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Runs the `planner` binary against a throwaway database.
pub struct CliTestHarness {
    temp_dir: TempDir,
    db_path: PathBuf,
}

impl CliTestHarness {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("scheduler.db");

        Self { temp_dir, db_path }
    }

    /// A command running inside the temp dir so no stray `planner.toml` is read.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("planner").expect("Failed to find planner binary");
        cmd.current_dir(self.temp_dir.path())
            .env("TODO_DBFILE", &self.db_path)
            .env("TODO_TIMEZONE", "UTC")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}
