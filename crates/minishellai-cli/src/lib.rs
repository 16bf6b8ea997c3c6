// Library interface for minishellai-cli
// The binary is a thin wrapper; integration tests drive these modules directly.

pub mod app;
pub mod cli;
pub mod commands;
pub mod stdin;

// Re-export commonly used items for easier testing
pub use cli::Cli;
pub use commands::{check_session, parse_command, Command};
