use clap::Parser;
use minishellai_cli::{app, stdin, Cli};
use minishellai_core::ShellAiError;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // clap exits with status 2 on its own; every usage error here is 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "minishellai".to_string());
    let piped = stdin::read_stdin();

    match app::run(&cli.config, &cli.args, piped, &program).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<ShellAiError>() {
                Some(ShellAiError::Usage(message)) => eprintln!("{message}"),
                _ => tracing::error!("{e}"),
            }
            ExitCode::FAILURE
        }
    }
}
