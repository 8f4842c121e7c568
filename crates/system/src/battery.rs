use tray_core::{BatteryRecord, BatteryState};

/// Number of batteries listed in the status output: one per non-blank line.
/// A trailing newline does not count as an extra battery.
pub fn battery_count(output: &str) -> usize {
    output.lines().filter(|l| !l.trim().is_empty()).count()
}

/// Select the line for battery `index` and parse it.
///
/// An index past the last line, or a blank line, yields
/// [`BatteryRecord::missing`].
pub fn record_for(output: &str, index: usize) -> BatteryRecord {
    match output.lines().nth(index) {
        Some(line) if !line.trim().is_empty() => parse_line(line),
        _ => BatteryRecord::missing(),
    }
}

/// Parse one status line of the form `<Label>: <State>, <P>%[, <detail>…]`.
///
/// The shape check is permissive: some non-colon text, a colon, some
/// non-comma text, a comma, then anything.  Lines that don't fit (or whose
/// percentage isn't a number) become `Unknown` with the raw line in the
/// tooltip.
pub fn parse_line(line: &str) -> BatteryRecord {
    let Some((label, rest)) = line.split_once(':') else {
        return BatteryRecord::unparsable(line);
    };
    // The state segment ends at the first comma after the colon.
    let Some((state, tail)) = rest.split_once(',') else {
        return BatteryRecord::unparsable(line);
    };
    if label.is_empty() || state.is_empty() || tail.is_empty() {
        return BatteryRecord::unparsable(line);
    }

    // The percentage runs from the comma up to the first `%`.
    let Some((pct_field, _)) = tail.split_once('%') else {
        tracing::debug!("no percentage in {line:?}");
        return BatteryRecord::unparsable(line);
    };
    let digits = pct_field.trim_matches(' ');
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        tracing::debug!("percentage field {pct_field:?} is not a number");
        return BatteryRecord::unparsable(line);
    }
    // Digit runs too long for u64 are still just "over 100".
    let percentage = digits.parse::<u64>().map_or(100, |p| p.min(100)) as u8;

    let tooltip = rest.strip_prefix(' ').unwrap_or(rest);

    BatteryRecord::new(BatteryState::from_word(state), percentage, tooltip)
}
