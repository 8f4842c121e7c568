use std::fmt;

/// Tooltip shown when the battery index has no line in the status output.
pub const MISSING_TOOLTIP: &str = "Battery not found";

/// Charge state reported for one battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatteryState {
    Discharging,
    Charging,
    Charged,
    Full,
    /// A line exists but its state word (or the whole line) is not recognised.
    Unknown,
    /// No line for this battery index.
    Missing,
}

impl BatteryState {
    /// Map a state word from the status output.  Anything unrecognised
    /// (`"Not charging"`, vendor strings, …) becomes [`BatteryState::Unknown`].
    pub fn from_word(word: &str) -> Self {
        match word.trim() {
            "Discharging" => Self::Discharging,
            "Charging"    => Self::Charging,
            "Charged"     => Self::Charged,
            "Full"        => Self::Full,
            _             => Self::Unknown,
        }
    }
}

impl fmt::Display for BatteryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Self::Discharging => "Discharging",
            Self::Charging    => "Charging",
            Self::Charged     => "Charged",
            Self::Full        => "Full",
            Self::Unknown     => "Unknown",
            Self::Missing     => "Missing",
        };
        f.write_str(word)
    }
}

/// A parsed snapshot of one battery at one poll instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryRecord {
    pub state: BatteryState,
    /// Charge level (0–100).  Always `0` for `Missing`.
    pub percentage: u8,
    /// Hover text for the tray icon; the raw status detail.
    pub tooltip: String,
}

impl BatteryRecord {
    pub fn new(state: BatteryState, percentage: u8, tooltip: impl Into<String>) -> Self {
        Self {
            state,
            percentage: percentage.min(100),
            tooltip: tooltip.into(),
        }
    }

    /// Record for a battery index with no status line.
    pub fn missing() -> Self {
        Self::new(BatteryState::Missing, 0, MISSING_TOOLTIP)
    }

    /// Record for a status line that doesn't have the expected shape.
    pub fn unparsable(line: &str) -> Self {
        Self::new(BatteryState::Unknown, 0, format!("Not Parsable: {line}"))
    }
}
