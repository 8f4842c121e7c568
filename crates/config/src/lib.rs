pub mod schema;

pub use schema::TrayConfig;

use std::path::{Path, PathBuf};
use tray_core::{Result, TrayError};

/// Load configuration from a TOML file.  Returns `TrayConfig::default()` if
/// the file doesn't exist so the tray always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<TrayConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(TrayConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| TrayError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse configuration from TOML text.
pub fn parse(raw: &str) -> Result<TrayConfig> {
    toml::from_str(raw).map_err(|e| TrayError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("acpi-tray").join("acpi-tray.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse("").unwrap(), TrayConfig::default());
    }

    #[test]
    fn partial_override() {
        let cfg = parse("command = \"/usr/bin/acpi\"\nbatteries = 2\n").unwrap();
        assert_eq!(cfg.command, "/usr/bin/acpi");
        assert_eq!(cfg.batteries, Some(2));
        assert_eq!(cfg.icon_interval(), Duration::from_secs(5));
        assert_eq!(cfg.notify_interval(), Duration::from_secs(120));
        assert!(!cfg.repeat_notifications);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let err = parse("icon_interval_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, TrayError::Config(_)));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = load("/nonexistent/acpi-tray/acpi-tray.toml").unwrap();
        assert_eq!(cfg, TrayConfig::default());
    }

    #[test]
    fn zero_interval_is_clamped() {
        let cfg = parse("icon_interval_ms = 0").unwrap();
        assert_eq!(cfg.icon_interval(), Duration::from_millis(1));
    }
}
