use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration structure parsed from `acpi-tray.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayConfig {
    /// Battery status program, run without arguments.
    pub command: String,
    /// Icon/tooltip refresh period in milliseconds.
    pub icon_interval_ms: u64,
    /// Threshold notification check period in milliseconds.
    pub notify_interval_ms: u64,
    /// Re-send a notification on every check while the battery stays in the
    /// triggering range, instead of once per crossing.
    pub repeat_notifications: bool,
    /// Number of batteries to monitor.  Discovered from the command output
    /// when unset.
    pub batteries: Option<usize>,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            command:              "acpi".to_string(),
            icon_interval_ms:     5_000,
            notify_interval_ms:   120_000,
            repeat_notifications: false,
            batteries:            None,
        }
    }
}

impl TrayConfig {
    pub fn icon_interval(&self) -> Duration {
        Duration::from_millis(self.icon_interval_ms.max(1))
    }

    pub fn notify_interval(&self) -> Duration {
        Duration::from_millis(self.notify_interval_ms.max(1))
    }
}
