use tokio::process::Command;
use tray_core::{Result, StatusSource, TrayError};

/// The external battery status program (`acpi` by default), run with no
/// arguments.  Every call spawns a fresh process; nothing is cached.
#[derive(Debug, Clone)]
pub struct AcpiCommand {
    program: String,
}

impl AcpiCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for AcpiCommand {
    fn default() -> Self {
        Self::new("acpi")
    }
}

impl StatusSource for AcpiCommand {
    async fn output(&self) -> Result<String> {
        let out = Command::new(&self.program)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| TrayError::Command(format!("cannot run '{}': {e}", self.program)))?;

        if !out.status.success() {
            return Err(TrayError::Command(format!(
                "'{}' exited with {}",
                self.program, out.status
            )));
        }

        Ok(String::from_utf8_lossy(&out.stdout).into_owned())
    }
}
