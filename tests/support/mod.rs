use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for graphwalk, isolated from the caller's environment
///
/// Points the config directory at `config_dir` so a user's own
/// `config.toml` never leaks into assertions.
pub fn graphwalk_in(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("graphwalk");
    cmd.env("GRAPHWALK_CONFIG_DIR", config_dir)
        .env_remove("GRAPHWALK_PRESET")
        .env_remove("GRAPHWALK_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Scratch directory plus a command builder bound to it
pub struct TestEnv {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn cmd(&self) -> Command {
        graphwalk_in(self.dir.path())
    }

    /// Write a file into the scratch directory and return its path
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Write `config.toml` into the isolated config directory
    pub fn write_config(&self, content: &str) {
        self.write("config.toml", content);
    }
}

/// Parse a command's stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
