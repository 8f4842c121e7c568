//! Tray icon published as a freedesktop `StatusNotifierItem`.

use tracing::{debug, info, warn};
use tray_core::{IconSink, Result};
use zbus::{connection, interface, object_server::SignalEmitter, proxy, Connection};

use crate::dbus_err;

/// Object path the item is served at.
pub const ITEM_PATH: &str = "/StatusNotifierItem";

/// Icon shown until the first poll completes.
const INITIAL_ICON: &str = "battery-missing";

/// `(icon name, icon pixmaps, title, description)`, the SNI `ToolTip` shape.
type ToolTip = (String, Vec<(i32, i32, Vec<u8>)>, String, String);

#[proxy(
    interface = "org.kde.StatusNotifierWatcher",
    default_service = "org.kde.StatusNotifierWatcher",
    default_path = "/StatusNotifierWatcher"
)]
trait StatusNotifierWatcher {
    fn register_status_notifier_item(&self, service: &str) -> zbus::Result<()>;
}

/// D-Bus object backing one battery's tray icon.
#[derive(Debug, Clone)]
pub struct StatusItem {
    index:     usize,
    icon_name: String,
    tooltip:   String,
}

impl StatusItem {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            icon_name: INITIAL_ICON.to_string(),
            tooltip:   String::new(),
        }
    }
}

#[interface(name = "org.kde.StatusNotifierItem")]
impl StatusItem {
    #[zbus(property)]
    fn category(&self) -> String {
        "Hardware".to_string()
    }

    #[zbus(property)]
    fn id(&self) -> String {
        format!("acpi-tray-battery-{}", self.index)
    }

    #[zbus(property)]
    fn title(&self) -> String {
        format!("Battery {}", self.index)
    }

    #[zbus(property)]
    fn status(&self) -> String {
        "Active".to_string()
    }

    #[zbus(property)]
    fn icon_name(&self) -> String {
        self.icon_name.clone()
    }

    #[zbus(property)]
    fn tool_tip(&self) -> ToolTip {
        (self.icon_name.clone(), Vec::new(), self.title(), self.tooltip.clone())
    }

    #[zbus(property)]
    fn item_is_menu(&self) -> bool {
        false
    }

    fn activate(&self, x: i32, y: i32) {
        debug!(battery = self.index, x, y, "tray icon activated");
    }

    #[zbus(signal)]
    async fn new_icon(emitter: &SignalEmitter<'_>) -> zbus::Result<()>;

    #[zbus(signal)]
    async fn new_tool_tip(emitter: &SignalEmitter<'_>) -> zbus::Result<()>;
}

/// Well-known bus name for a battery's item, following the
/// `org.kde.StatusNotifierItem-<pid>-<n>` convention.
pub fn item_name(index: usize) -> String {
    format!("org.kde.StatusNotifierItem-{}-{}", std::process::id(), index)
}

/// Tray icon sink.  Owns a dedicated session-bus connection.
pub struct TrayIcon {
    conn:  Connection,
    index: usize,
}

impl TrayIcon {
    /// Publish the item for battery `index` and register it with the tray
    /// host.  A missing `StatusNotifierWatcher` is only a warning: the icon
    /// appears once a host starts and picks the name up.
    pub async fn register(index: usize) -> Result<Self> {
        let name = item_name(index);

        let conn = connection::Builder::session()
            .map_err(dbus_err)?
            .name(name.as_str())
            .map_err(dbus_err)?
            .serve_at(ITEM_PATH, StatusItem::new(index))
            .map_err(dbus_err)?
            .build()
            .await
            .map_err(dbus_err)?;

        let registered = match StatusNotifierWatcherProxy::new(&conn).await {
            Ok(watcher) => watcher.register_status_notifier_item(&name).await,
            Err(e) => Err(e),
        };
        match registered {
            Ok(()) => info!("Registered tray item {name}"),
            Err(e) => warn!("Cannot register tray item {name} (is a tray host running?): {e}"),
        }

        Ok(Self { conn, index })
    }

    async fn item(&self) -> Result<zbus::object_server::InterfaceRef<StatusItem>> {
        self.conn
            .object_server()
            .interface::<_, StatusItem>(ITEM_PATH)
            .await
            .map_err(dbus_err)
    }
}

impl IconSink for TrayIcon {
    async fn set_icon(&mut self, icon: &str) -> Result<()> {
        let item = self.item().await?;
        item.get_mut().await.icon_name = icon.to_string();
        StatusItem::new_icon(item.signal_emitter())
            .await
            .map_err(dbus_err)
    }

    async fn set_tooltip(&mut self, text: &str) -> Result<()> {
        let item = self.item().await?;
        item.get_mut().await.tooltip = text.to_string();
        debug!(battery = self.index, "tooltip: {text}");
        StatusItem::new_tool_tip(item.signal_emitter())
            .await
            .map_err(dbus_err)
    }
}
