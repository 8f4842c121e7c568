//! Client for the freedesktop notification daemon.

use std::collections::HashMap;
use tray_core::{Notification, NotificationKind, NotificationSink, Result};
use zbus::{proxy, zvariant::Value, Connection};

use crate::dbus_err;

const APP_NAME: &str = "acpi-tray";

#[proxy(
    interface = "org.freedesktop.Notifications",
    default_service = "org.freedesktop.Notifications",
    default_path = "/org/freedesktop/Notifications"
)]
trait Notifications {
    #[allow(clippy::too_many_arguments)]
    fn notify(
        &self,
        app_name: &str,
        replaces_id: u32,
        app_icon: &str,
        summary: &str,
        body: &str,
        actions: &[&str],
        hints: &HashMap<&str, &Value<'_>>,
        expire_timeout: i32,
    ) -> zbus::Result<u32>;
}

/// Urgency hint byte: 1 = normal, 2 = critical.
pub fn urgency(kind: NotificationKind) -> u8 {
    match kind {
        NotificationKind::Low  => 2,
        NotificationKind::Full => 1,
    }
}

/// Notification sink.  Each new notification replaces the previous one sent
/// through the same notifier instead of stacking.
pub struct DesktopNotifier {
    proxy:       NotificationsProxy<'static>,
    replaces_id: u32,
}

impl DesktopNotifier {
    /// Open a dedicated session-bus connection for this notifier.
    pub async fn connect() -> Result<Self> {
        let conn = Connection::session().await.map_err(dbus_err)?;
        let proxy = NotificationsProxy::new(&conn).await.map_err(dbus_err)?;
        Ok(Self { proxy, replaces_id: 0 })
    }
}

impl NotificationSink for DesktopNotifier {
    async fn notify(&mut self, notification: &Notification) -> Result<()> {
        let urgency = Value::from(urgency(notification.kind));
        let hints = HashMap::from([("urgency", &urgency)]);

        self.replaces_id = self
            .proxy
            .notify(
                APP_NAME,
                self.replaces_id,
                notification.icon,
                &notification.title,
                &notification.body,
                &[],
                &hints,
                -1,
            )
            .await
            .map_err(dbus_err)?;
        Ok(())
    }
}
