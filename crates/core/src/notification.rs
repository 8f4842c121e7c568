/// Which threshold a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Charge reached the "unplug" threshold.
    Full,
    /// Charge dropped to the low-battery threshold while discharging.
    Low,
}

/// A desktop notification ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind:  NotificationKind,
    pub title: String,
    pub body:  String,
    /// Freedesktop icon name.
    pub icon:  &'static str,
}
