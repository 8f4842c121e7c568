use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum TrayError {
    #[error("config error: {0}")]
    Config(String),

    /// The battery status command could not be run or exited unsuccessfully.
    #[error("status command error: {0}")]
    Command(String),

    #[error("D-Bus error: {0}")]
    DBus(String),
}

pub type Result<T, E = TrayError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_layer() {
        let err = TrayError::Command("'acpi' exited with exit status: 1".into());
        assert_eq!(err.to_string(), "status command error: 'acpi' exited with exit status: 1");
        assert_eq!(TrayError::DBus("no bus".into()).to_string(), "D-Bus error: no bus");
    }
}
