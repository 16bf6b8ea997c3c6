use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellAiError {
    /// Bad invocation. The message is shown to the user verbatim.
    #[error("{0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output file {path} does not exist, change location of file in config to use '^'.")]
    CaptureFileMissing { path: String },

    #[error("Failed to get response from AI: {0}")]
    Backend(String),

    #[error("Capture session error: {0}")]
    Session(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ShellAiError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub fn backend(message: impl std::fmt::Display) -> Self {
        Self::Backend(message.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShellAiError>;
