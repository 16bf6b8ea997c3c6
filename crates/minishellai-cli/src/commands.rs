use minishellai_core::{Settings, ShellAiError};

/// What an invocation asks for, decided from argv and piped stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a capture session. Any query text is ignored.
    Record,
    /// Ask the backend a question.
    Query(String),
}

pub const RECORD: &str = "record";

pub fn usage(program: &str) -> String {
    format!("Usage: {program} <'record'|query-like-string>")
}

/// Resolve the command from positional arguments and sampled stdin.
///
/// Arguments are concatenated without a separator, so a multi-word question
/// is best passed as one quoted argument. Stdin text comes first, joined to
/// the argument text by a newline. No arguments and no stdin, or nothing
/// left after concatenating, is a usage error.
pub fn parse_command(
    args: &[String],
    stdin: Option<String>,
    program: &str,
) -> Result<Command, ShellAiError> {
    if args.is_empty() && stdin.is_none() {
        return Err(ShellAiError::usage(usage(program)));
    }

    if args.first().map(String::as_str) == Some(RECORD) {
        return Ok(Command::Record);
    }

    let arg_query = args.concat();
    let query = match (stdin, arg_query.is_empty()) {
        (Some(piped), false) => format!("{piped}\n{arg_query}"),
        (Some(piped), true) => piped,
        (None, false) => arg_query,
        (None, true) => return Err(ShellAiError::usage(usage(program))),
    };

    Ok(Command::Query(query))
}

/// With `enforce_script_session` set, queries require an existing capture.
pub fn check_session(
    command: &Command,
    settings: &Settings,
    program: &str,
) -> Result<(), ShellAiError> {
    let enforced = settings.output_capture_settings.enforce_script_session;
    if enforced && matches!(command, Command::Query(_)) && !settings.captured_output_exists() {
        return Err(ShellAiError::usage(format!(
            "Please call `{program} {RECORD}` first to initialize script session."
        )));
    }
    Ok(())
}
