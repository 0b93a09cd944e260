//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated test environment with a temporary
//! data directory and helpers for the common setup commands.

use assert_cmd::Command;
use chrono::{Duration, Utc};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the flota data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("flota-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// The home directory and `FLOTA_*` variables are scrubbed so the
    /// developer's real configuration never leaks into a test.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("flota").expect("Failed to find flota binary");
        cmd.env("HOME", &self.temp_path)
            .env_remove("FLOTA_DATA_DIR")
            .env_remove("FLOTA_BUSY_TIMEOUT")
            .env_remove("FLOTA_USER")
            .env_remove("FLOTA_LOG_MODE")
            .env_remove("FLOTA_LOCK_WAIT_SECONDS")
            .env_remove("FLOTA_CURRENCY")
            .env_remove("FLOTA_OUTPUT");
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get a command builder acting as the given user.
    pub fn command_as(&self, username: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("--user").arg(username);
        cmd
    }

    /// Register a user, optionally with the administrator role.
    pub fn add_user(&self, username: &str, admin: bool) {
        let mut cmd = self.command();
        cmd.arg("add-user")
            .arg("--username")
            .arg(username)
            .arg("--email")
            .arg(format!("{username}@example.com"));
        if admin {
            cmd.arg("--admin");
        }
        cmd.assert().success();
    }

    /// Add a default catalog item as the given admin and return its id.
    pub fn add_item(&self, admin: &str) -> i64 {
        let output = self
            .command_as(admin)
            .arg("add-item")
            .arg("--name")
            .arg("Hilux")
            .arg("--model")
            .arg("Toyota Hilux SR 4x4")
            .arg("--year")
            .arg("2022")
            .arg("--category")
            .arg("vehicle")
            .arg("--price-per-day")
            .arg("50000")
            .arg("--fuel-efficiency")
            .arg("11.5")
            .arg("--format")
            .arg("json")
            .output()
            .expect("Failed to run add-item");

        assert!(
            output.status.success(),
            "add-item failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let item: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("add-item output is not JSON");
        item["id"].as_i64().expect("item id missing")
    }

    /// Request a reservation and return its id.
    pub fn request(&self, username: &str, item_id: i64, start: &str, end: &str) -> i64 {
        let output = self
            .command_as(username)
            .arg("request")
            .arg("--item")
            .arg(item_id.to_string())
            .arg("--start")
            .arg(start)
            .arg("--end")
            .arg(end)
            .arg("--format")
            .arg("json")
            .output()
            .expect("Failed to run request");

        assert!(
            output.status.success(),
            "request failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let reservation: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("request output is not JSON");
        reservation["id"].as_i64().expect("reservation id missing")
    }
}

/// A calendar date `offset_days` from today, formatted for the CLI.
#[allow(dead_code)]
pub fn date(offset_days: i64) -> String {
    (Utc::now() + Duration::days(offset_days))
        .format("%Y-%m-%d")
        .to_string()
}
