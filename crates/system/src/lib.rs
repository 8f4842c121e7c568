//! Battery status reading: runs the status command and turns its output
//! into one [`BatteryRecord`] per battery index.

pub mod acpi;
pub mod battery;

pub use acpi::AcpiCommand;
pub use battery::{battery_count, parse_line, record_for};

use tray_core::{BatteryRecord, Result, StatusSource};

/// Run the status command once and parse the line for battery `index`.
///
/// Parsing problems are reported in-band as `Missing`/`Unknown` records;
/// only a failure to run the command itself is an error.
pub async fn read<S: StatusSource>(source: &S, index: usize) -> Result<BatteryRecord> {
    let output = source.output().await?;
    Ok(record_for(&output, index))
}
