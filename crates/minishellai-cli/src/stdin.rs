use std::io::Read;

/// Sample piped stdin once, without waiting.
///
/// Returns the trimmed text if input was already available, `None` when
/// nothing was piped or the piped text is blank.
pub fn read_stdin() -> Option<String> {
    if !stdin_ready() {
        return None;
    }

    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        tracing::warn!("Failed to read stdin: {e}");
        return None;
    }

    let input = input.trim();
    if input.is_empty() {
        None
    } else {
        tracing::debug!("stdin detected");
        Some(input.to_string())
    }
}

#[cfg(unix)]
fn stdin_ready() -> bool {
    let mut fds = libc::pollfd {
        fd: libc::STDIN_FILENO,
        events: libc::POLLIN,
        revents: 0,
    };
    let result = unsafe { libc::poll(&mut fds, 1, 0) };
    result > 0 && (fds.revents & libc::POLLIN) != 0
}

#[cfg(not(unix))]
fn stdin_ready() -> bool {
    use std::io::IsTerminal;
    !std::io::stdin().is_terminal()
}
