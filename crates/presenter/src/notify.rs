use crate::icon::CHARGED_ICON;
use tray_core::{BatteryRecord, BatteryState, Notification, NotificationKind};

/// Charge level at or above which a charging battery should be unplugged.
pub const FULL_THRESHOLD: u8 = 80;
/// Charge level at or below which a discharging battery is low.
pub const LOW_THRESHOLD: u8 = 20;

pub const LOW_ICON: &str = "battery-caution";

/// Decide whether a record crosses a notification threshold.
pub fn notification_for(record: &BatteryRecord) -> Option<Notification> {
    match record.state {
        BatteryState::Charging | BatteryState::Unknown if record.percentage >= FULL_THRESHOLD => {
            Some(Notification {
                kind:  NotificationKind::Full,
                title: "Battery full".to_string(),
                body:  "Battery is charged, unplug the charger".to_string(),
                icon:  CHARGED_ICON,
            })
        }
        BatteryState::Discharging if record.percentage <= LOW_THRESHOLD => Some(Notification {
            kind:  NotificationKind::Low,
            title: "Battery low".to_string(),
            body:  record.tooltip.clone(),
            icon:  LOW_ICON,
        }),
        _ => None,
    }
}

/// Suppresses back-to-back notifications of the same kind.
///
/// A kind fires once, then stays quiet until a check derives nothing (or a
/// different kind).  With `repeat` set every candidate passes through.
#[derive(Debug, Default)]
pub struct NotificationGate {
    repeat: bool,
    last:   Option<NotificationKind>,
}

impl NotificationGate {
    pub fn new(repeat: bool) -> Self {
        Self { repeat, last: None }
    }

    /// Feed the outcome of one check; returns what should be delivered.
    pub fn admit(&mut self, candidate: Option<Notification>) -> Option<Notification> {
        let kind = candidate.as_ref().map(|n| n.kind);
        let already_sent = kind.is_some() && kind == self.last;
        self.last = kind;

        if already_sent && !self.repeat {
            None
        } else {
            candidate
        }
    }
}
