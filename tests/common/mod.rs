//! Common test utilities for Codehop integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated home for one test: history and config live in a temp directory
/// wired up through the CODEHOP_DATA_DIR / CODEHOP_CONFIG overrides.
pub struct TestHome {
    pub temp: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// A codehop invocation bound to this home
    // Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("codehop").expect("binary builds");
        cmd.env("CODEHOP_DATA_DIR", self.temp.path());
        cmd.env("CODEHOP_CONFIG", self.config_path());
        cmd
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp.path().join("config.yaml")
    }

    pub fn history_path(&self) -> PathBuf {
        self.temp.path().join("history.json")
    }

    /// Write the configuration file this home resolves
    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Configuration that makes distribution enumeration fail deterministically,
    /// regardless of whether the test host has WSL tooling
    #[allow(dead_code)]
    pub fn write_config_without_wsl(&self, extra: &str) {
        let content = format!("wsl_list_command: [codehop-test-no-wsl]\n{extra}");
        self.write_config(&content);
    }
}
