//! Seams between the battery logic and the outside world.
//!
//! The status command, the tray icon and the notification daemon are all
//! reached through these traits so monitors can be driven by in-memory fakes.

use crate::{notification::Notification, Result};

/// Produces the raw text output of the battery status command.
#[allow(async_fn_in_trait)]
pub trait StatusSource {
    /// Run the command once and return its full standard output.
    async fn output(&self) -> Result<String>;
}

/// A tray icon surface.  Setting the same icon twice must be harmless.
#[allow(async_fn_in_trait)]
pub trait IconSink {
    async fn set_icon(&mut self, icon: &str) -> Result<()>;
    async fn set_tooltip(&mut self, text: &str) -> Result<()>;
}

/// A notification surface.
#[allow(async_fn_in_trait)]
pub trait NotificationSink {
    async fn notify(&mut self, notification: &Notification) -> Result<()>;
}
