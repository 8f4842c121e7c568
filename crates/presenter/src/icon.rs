use tray_core::{BatteryRecord, BatteryState};

pub const MISSING_ICON: &str = "battery-missing";
pub const CHARGED_ICON: &str = "battery-full-charged";
pub const FULL_ICON:    &str = "battery-100";

const DISCHARGING_ICONS: [&str; 11] = [
    "battery-000", "battery-010", "battery-020", "battery-030", "battery-040", "battery-050",
    "battery-060", "battery-070", "battery-080", "battery-090", "battery-100",
];

const CHARGING_ICONS: [&str; 11] = [
    "battery-000-charging", "battery-010-charging", "battery-020-charging",
    "battery-030-charging", "battery-040-charging", "battery-050-charging",
    "battery-060-charging", "battery-070-charging", "battery-080-charging",
    "battery-090-charging", "battery-100-charging",
];

/// Round a charge level to the nearest multiple of ten (halves round up),
/// clamped to `0..=100`.
pub fn bucket(percentage: u8) -> u8 {
    let p = u16::from(percentage.min(100));
    ((p + 5) / 10 * 10) as u8
}

/// Icon name for a battery record.  Total over every state/percentage pair.
pub fn icon_for(record: &BatteryRecord) -> &'static str {
    let band = usize::from(bucket(record.percentage) / 10);
    match record.state {
        BatteryState::Discharging => DISCHARGING_ICONS[band],
        BatteryState::Charging    => CHARGING_ICONS[band],
        BatteryState::Charged     => CHARGED_ICON,
        // Some firmware reports a full battery on AC as "Unknown, 100%".
        BatteryState::Unknown if record.percentage == 100 => CHARGED_ICON,
        BatteryState::Full        => FULL_ICON,
        BatteryState::Unknown | BatteryState::Missing => MISSING_ICON,
    }
}
