use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{defaults, endpoints, paths};
use crate::error::{Result, ShellAiError};

/// Typed view of the YAML config file. Every key is optional; absent keys
/// take the defaults from [`crate::constants`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub history: HistorySettings,
    pub output_capture_settings: OutputCaptureSettings,
    pub backend_service: BackendSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    pub enabled: bool,
    pub filepath: PathBuf,
    pub max_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputCaptureSettings {
    pub captured_output_file: PathBuf,
    pub prompt_separator: String,
    pub enforce_script_session: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    pub query_endpoint: String,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            enabled: defaults::HISTORY_ENABLED,
            filepath: PathBuf::from(paths::HISTORY_FILE),
            max_size: defaults::HISTORY_MAX_SIZE,
        }
    }
}

impl Default for OutputCaptureSettings {
    fn default() -> Self {
        Self {
            captured_output_file: PathBuf::from(paths::CAPTURED_OUTPUT_FILE),
            prompt_separator: defaults::PROMPT_SEPARATOR.to_string(),
            enforce_script_session: defaults::ENFORCE_SCRIPT_SESSION,
        }
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            query_endpoint: endpoints::QUERY_ENDPOINT.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// A missing or empty file is not an error: the user is told where the
    /// file was expected and defaults are used. A file that exists but is not
    /// valid YAML for this schema is a [`ShellAiError::Config`].
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            eprintln!(
                "Config file {} does not exist (use env '{}' to change destination).",
                path.display(),
                paths::CONFIG_ENV
            );
            tracing::warn!("Config file not found. Script will continue with default values.");
            return Ok(Self::default());
        }

        tracing::info!("Reading config file {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content).map_err(|e| {
            ShellAiError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Parse settings from YAML text. Blank input yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            tracing::warn!("Config file is empty. Script will continue with default values.");
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Whether the capture file produced by `record` is present.
    pub fn captured_output_exists(&self) -> bool {
        self.output_capture_settings.captured_output_file.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let settings = Settings::from_yaml(
            "history:\n  enabled: true\noutput_capture_settings:\n  prompt_separator: '%'\n",
        )
        .unwrap();

        assert!(settings.history.enabled);
        assert_eq!(settings.history.max_size, 100);
        assert_eq!(settings.history.filepath, PathBuf::from(paths::HISTORY_FILE));
        assert_eq!(settings.output_capture_settings.prompt_separator, "%");
        assert!(!settings.output_capture_settings.enforce_script_session);
        assert_eq!(settings.backend_service.query_endpoint, endpoints::QUERY_ENDPOINT);
    }

    #[test]
    fn blank_yaml_is_default() {
        let settings = Settings::from_yaml("  \n").unwrap();
        assert!(!settings.history.enabled);
    }

    #[test]
    fn wrong_type_is_rejected() {
        let err = Settings::from_yaml("history:\n  max_size: lots\n").unwrap_err();
        assert!(matches!(err, ShellAiError::Yaml(_)));
    }
}
