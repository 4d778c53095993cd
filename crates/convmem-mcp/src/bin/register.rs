//! Register the conversation-memory server with the Claude desktop client.
//!
//! Rewrites the client's `claude_desktop_config.json`, inserting an entry
//! keyed by the current directory's name that points at the release build
//! of `convmem-mcp`. Run from the repository root after
//! `cargo build --release`.
//!
//! This utility has no runtime interaction with the server; it only edits
//! the config file. Any read, parse, or write failure is reported to the
//! console and the process exits with code 1.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{json, Value};

fn main() -> Result<()> {
    let current_dir = env::current_dir().context("failed to resolve current directory")?;
    let project_name = current_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("conversation-memory")
        .to_string();
    let server_path = current_dir.join("target/release/convmem-mcp");

    let config_path =
        claude_config_path().context("could not locate the Claude config directory")?;
    update_config(&config_path, &project_name, &server_path).with_context(|| {
        format!(
            "error updating Claude desktop config at {}",
            config_path.display()
        )
    })?;

    println!(
        "Updated Claude desktop config at {}",
        config_path.display()
    );
    println!(
        "  Registered server: {} -> {}",
        project_name,
        server_path.display()
    );
    Ok(())
}

/// Claude desktop config location under the platform config directory
/// (`~/Library/Application Support` on macOS, `~/.config` on Linux).
fn claude_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("Claude").join("claude_desktop_config.json"))
}

/// Insert or overwrite the `mcpServers.{name}` entry in the config file.
///
/// The config must already exist and parse; it is never created from
/// scratch.
fn update_config(path: &Path, name: &str, command: &Path) -> Result<()> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let mut config: Value = serde_json::from_str(&raw).context("config file is not valid JSON")?;

    let root = config
        .as_object_mut()
        .context("config root is not a JSON object")?;
    let servers = root
        .entry("mcpServers")
        .or_insert_with(|| json!({}))
        .as_object_mut()
        .context("mcpServers is not a JSON object")?;
    servers.insert(
        name.to_string(),
        json!({ "command": command.to_string_lossy() }),
    );

    fs::write(path, serde_json::to_string_pretty(&config)?)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_update_config_inserts_server_entry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("claude_desktop_config.json");
        fs::write(&path, r#"{"mcpServers":{"other":{"command":"x"}}}"#).unwrap();

        update_config(&path, "convmem", Path::new("/opt/convmem/convmem-mcp")).unwrap();

        let config: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            config["mcpServers"]["convmem"]["command"],
            "/opt/convmem/convmem-mcp"
        );
        // Entries for other servers are left alone.
        assert_eq!(config["mcpServers"]["other"]["command"], "x");
    }

    #[test]
    fn test_update_config_creates_missing_section() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("claude_desktop_config.json");
        fs::write(&path, "{}").unwrap();

        update_config(&path, "convmem", Path::new("/opt/convmem/convmem-mcp")).unwrap();

        let config: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            config["mcpServers"]["convmem"]["command"],
            "/opt/convmem/convmem-mcp"
        );
    }

    #[test]
    fn test_update_config_overwrites_existing_entry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("claude_desktop_config.json");
        fs::write(&path, r#"{"mcpServers":{"convmem":{"command":"old"}}}"#).unwrap();

        update_config(&path, "convmem", Path::new("/new/convmem-mcp")).unwrap();

        let config: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(config["mcpServers"]["convmem"]["command"], "/new/convmem-mcp");
    }

    #[test]
    fn test_update_config_rejects_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("claude_desktop_config.json");

        let result = update_config(&path, "convmem", Path::new("/opt/convmem-mcp"));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_config_rejects_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("claude_desktop_config.json");
        fs::write(&path, "not json").unwrap();

        let result = update_config(&path, "convmem", Path::new("/opt/convmem-mcp"));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_config_rejects_non_object_servers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("claude_desktop_config.json");
        fs::write(&path, r#"{"mcpServers": []}"#).unwrap();

        let result = update_config(&path, "convmem", Path::new("/opt/convmem-mcp"));
        assert!(result.is_err());
    }
}
