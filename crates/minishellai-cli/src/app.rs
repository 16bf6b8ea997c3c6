use anyhow::Result;
use minishellai_core::{QueryOrchestrator, SessionRecorder, Settings};
use std::path::Path;

use crate::commands::{self, Command};

/// One invocation, start to finish. Errors bubble up to `main`, which is the
/// only place that turns them into an exit code.
pub async fn run(
    config_path: &Path,
    args: &[String],
    stdin: Option<String>,
    program: &str,
) -> Result<()> {
    let command = commands::parse_command(args, stdin, program)?;

    let settings = Settings::load_from(config_path)?;
    commands::check_session(&command, &settings, program)?;

    match command {
        Command::Record => run_record(&settings).await,
        Command::Query(query) => run_query(settings, &query).await,
    }
}

// ── Record mode ─────────────────────────────────────────────────────────

async fn run_record(settings: &Settings) -> Result<()> {
    let captured = &settings.output_capture_settings.captured_output_file;
    SessionRecorder::new().start(captured).await?;
    Ok(())
}

// ── Query mode ──────────────────────────────────────────────────────────

async fn run_query(settings: Settings, query: &str) -> Result<()> {
    let orchestrator = QueryOrchestrator::from_settings(settings)?;
    let mut stdout = std::io::stdout();
    orchestrator.handle(query, &mut stdout).await?;
    Ok(())
}
