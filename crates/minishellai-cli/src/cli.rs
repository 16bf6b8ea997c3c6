use clap::Parser;
use std::path::PathBuf;

/// Command line: `minishellai [--config <path>] [record | query-text...]`.
///
/// Help and version flags are disabled so that a question such as
/// `-h does what` reaches the backend instead of printing a banner.
#[derive(Parser, Debug)]
#[command(name = "minishellai")]
#[command(about = "minishellai - ask an AI backend about your terminal session")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// YAML config file
    #[arg(long, env = "SHELLAI_CONFIG", default_value = "config.yaml")]
    pub config: PathBuf,

    /// `record` to start a capture session, otherwise the question to ask
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
