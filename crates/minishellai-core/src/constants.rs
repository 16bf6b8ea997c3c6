/// minishellai — centralized constants.
/// Defaults for every config key and the fixed protocol values live here.

// ─── Config Paths ─────────────────────────────────────────────────────────────

pub mod paths {
    /// Environment variable pointing at the YAML config file.
    pub const CONFIG_ENV: &str = "SHELLAI_CONFIG";
    pub const HISTORY_FILE: &str = "/tmp/minishellai_history.json";
    pub const CAPTURED_OUTPUT_FILE: &str = "/tmp/minishellai_output.txt";
}

// ─── Default Settings ─────────────────────────────────────────────────────────

pub mod defaults {
    pub const HISTORY_ENABLED: bool = false;
    pub const HISTORY_MAX_SIZE: usize = 100;
    pub const PROMPT_SEPARATOR: &str = "$";
    pub const ENFORCE_SCRIPT_SESSION: bool = false;
}

// ─── API Endpoints ────────────────────────────────────────────────────────────

pub mod endpoints {
    pub const QUERY_ENDPOINT: &str = "http://0.0.0.0:8080/api/v1/query/";
}

// ─── Context Injection ────────────────────────────────────────────────────────

pub mod context {
    /// Marks the spot in a query where captured terminal output is wanted.
    pub const MARKER: char = '^';
    pub const CONTEXT_PREFIX: &str = "Context data: ";
    pub const QUESTION_PREFIX: &str = "Question: ";
}

// ─── Resource Limits ──────────────────────────────────────────────────────────

pub mod limits {
    /// Waiting longer than this for an answer is pointless.
    pub const BACKEND_TIMEOUT_SECS: u64 = 30;
}

// ─── Capture Session ──────────────────────────────────────────────────────────

pub mod session {
    pub const RECORDER_PROGRAM: &str = "script";
    /// Flush after every write so the capture file is readable mid-session.
    pub const RECORDER_FLUSH_FLAG: &str = "-f";
}
