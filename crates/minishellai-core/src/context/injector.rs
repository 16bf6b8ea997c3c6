use crate::config::OutputCaptureSettings;
use crate::constants::context::{CONTEXT_PREFIX, MARKER, QUESTION_PREFIX};
use crate::error::ShellAiError;

/// Replaces the `^` marker in a query with the most recent command and its
/// output from the capture file.
pub struct ContextInjector<'a> {
    settings: &'a OutputCaptureSettings,
}

impl<'a> ContextInjector<'a> {
    pub fn new(settings: &'a OutputCaptureSettings) -> Self {
        Self { settings }
    }

    /// Queries without a marker are returned untouched and the capture file
    /// is never opened.
    pub fn inject(&self, query: &str) -> Result<String, ShellAiError> {
        if !query.contains(MARKER) {
            return Ok(query.to_string());
        }

        let path = &self.settings.captured_output_file;
        if !path.exists() {
            return Err(ShellAiError::CaptureFileMissing {
                path: path.display().to_string(),
            });
        }

        // Recorded sessions may contain raw bytes from binary output.
        let bytes = std::fs::read(path)?;
        let captured = String::from_utf8_lossy(&bytes);
        let output = last_segment(&captured, &self.settings.prompt_separator);
        let question = query.replace(MARKER, "");

        Ok(format!("{CONTEXT_PREFIX}{output}\n{QUESTION_PREFIX}{question}"))
    }
}

/// Text after the final prompt separator, trimmed. Assumes the separator is
/// the shell prompt and so precedes every command.
fn last_segment<'t>(captured: &'t str, separator: &str) -> &'t str {
    let segment = if separator.is_empty() {
        captured
    } else {
        captured.rsplit(separator).next().unwrap_or(captured)
    };
    segment.trim()
}
