use crate::constants::session::{RECORDER_FLUSH_FLAG, RECORDER_PROGRAM};
use crate::error::ShellAiError;
use std::path::Path;

/// Wraps the `script(1)` terminal recorder.
pub struct SessionRecorder {
    program: String,
}

impl SessionRecorder {
    pub fn new() -> Self {
        Self {
            program: RECORDER_PROGRAM.to_string(),
        }
    }

    /// Use a different recorder binary. It is invoked as `<program> -f <file>`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Run a capture session bound to `captured_output_file`.
    ///
    /// The recorder inherits the terminal and this call returns only when the
    /// user ends the session. The capture file is then deleted, so the next
    /// session starts from an empty capture.
    pub async fn start(&self, captured_output_file: &Path) -> Result<(), ShellAiError> {
        let status = tokio::process::Command::new(&self.program)
            .arg(RECORDER_FLUSH_FLAG)
            .arg(captured_output_file)
            .status()
            .await
            .map_err(|e| {
                ShellAiError::Session(format!("Failed to start '{}': {e}", self.program))
            })?;

        if !status.success() {
            tracing::warn!("'{}' exited with {}", self.program, status);
        }

        if captured_output_file.exists() {
            tracing::info!("Removing {}", captured_output_file.display());
            std::fs::remove_file(captured_output_file)?;
        }

        Ok(())
    }
}

impl Default for SessionRecorder {
    fn default() -> Self {
        Self::new()
    }
}
