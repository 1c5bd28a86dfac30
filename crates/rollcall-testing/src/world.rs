//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Writing roster and config files
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use rollcall_types::Member;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::roster_json;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use rollcall_testing::TestWorld;
/// use rollcall_testing::fixtures::sample_members;
///
/// let world = TestWorld::new().with_roster("roster.json", &sample_members());
///
/// let result = world.run(&["page", "roster.json", "--format", "json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    ///
    /// The config file is not written until `with_config` is called; a
    /// missing file means built-in defaults.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    /// Get the temp directory root. Commands run here.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the config file passed via `--config`.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write `members` as a JSON array roster at `name` (relative to the root).
    pub fn with_roster(self, name: &str, members: &[Member]) -> Self {
        let body = roster_json(members).expect("Failed to serialize roster");
        self.with_file(name, &body)
    }

    /// Write an arbitrary file relative to the root.
    pub fn with_file(self, name: &str, contents: &str) -> Self {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directory");
        }
        std::fs::write(&path, contents).expect("Failed to write file");
        self
    }

    /// Write the TOML config file.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// Ambient `ROLLCALL_*` and `RUST_LOG` variables are cleared so the host
    /// shell cannot leak into the run.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);
        cmd.current_dir(self.temp_dir.path());

        cmd.env_remove("ROLLCALL_CONFIG")
            .env_remove("ROLLCALL_LOG")
            .env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `rollcall` binary with `args` and capture its output.
    ///
    /// Uses `Command::cargo_bin()`, which relies on the `CARGO_BIN_EXE_`
    /// variables cargo sets for integration tests.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("rollcall")
            .map_err(|e| anyhow::anyhow!("Failed to find rollcall binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
