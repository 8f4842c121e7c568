//! Turns battery records into tray icons and threshold notifications, and
//! drives one [`BatteryMonitor`] per battery on its timers.

pub mod icon;
pub mod monitor;
pub mod notify;

pub use icon::{bucket, icon_for};
pub use monitor::{drive, BatteryMonitor, Schedule};
pub use notify::{notification_for, NotificationGate, FULL_THRESHOLD, LOW_THRESHOLD};
