//! Session-bus front end for `acpi-tray`.
//!
//! Publishes one tray icon per battery, talks to the notification daemon,
//! and drives the battery monitors:
//! - startup battery discovery (one run of the status command)
//! - icon refresh timer per battery
//! - notification check timer per battery

pub mod notifications;
pub mod status_item;

pub use notifications::DesktopNotifier;
pub use status_item::{StatusItem, TrayIcon};

use tracing::info;
use tray_config::{default_path, load as load_config};
use tray_core::{Result, StatusSource, TrayError};
use tray_presenter::{drive, BatteryMonitor, NotificationGate, Schedule};
use tray_system::{battery_count, AcpiCommand};

pub(crate) fn dbus_err(e: zbus::Error) -> TrayError {
    TrayError::DBus(e.to_string())
}

/// Start the tray.  Returns only when the status command fails or the
/// session bus can't be reached.
pub async fn run() -> Result<()> {
    let config = load_config(default_path())?;
    let source = AcpiCommand::new(config.command.clone());

    // Discovery doubles as the check that the command works at all.
    let discovered = battery_count(&source.output().await?);
    let count = config.batteries.unwrap_or(discovered).max(1);
    info!("'{}' reports {discovered} battery(ies); monitoring {count}", source.program());

    let mut monitors = Vec::with_capacity(count);
    for index in 0..count {
        monitors.push(BatteryMonitor::new(
            index,
            source.clone(),
            TrayIcon::register(index).await?,
            DesktopNotifier::connect().await?,
            NotificationGate::new(config.repeat_notifications),
        ));
    }

    let schedule = Schedule {
        icon:   config.icon_interval(),
        notify: config.notify_interval(),
    };
    drive(&mut monitors, schedule).await
}
