use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use tempfile::TempDir;

/// Get a Command for medroute isolated from any user configuration.
///
/// The returned directory is used as the config dir; keep it alive for the
/// duration of the command.
pub fn medroute() -> (Command, TempDir) {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("medroute");
    cmd.env("MEDROUTE_CONFIG_DIR", dir.path())
        .env_remove("MEDROUTE_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("MEDROUTE_LOG");
    (cmd, dir)
}

/// Like `medroute`, with `config.toml` in the config dir set to `contents`
#[allow(dead_code)]
pub fn medroute_with_config(contents: &str) -> (Command, TempDir) {
    let (cmd, dir) = medroute();
    fs::write(dir.path().join("config.toml"), contents).unwrap();
    (cmd, dir)
}

/// Parse a command's stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).unwrap()
}

/// Small layout: Dock <-> Ward (4), Ward -> Lab (2), one-way
#[allow(dead_code)]
pub const DOCK_CONFIG: &str = r#"
depot = "Dock"

[[edges]]
from = "Dock"
to = "Ward"
distance = 4

[[edges]]
from = "Ward"
to = "Lab"
distance = 2
directed = true

[descriptions]
Dock = "Loading dock"
"#;
