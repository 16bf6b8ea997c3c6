pub mod error;
pub mod constants;
pub mod backend;
pub mod context;
pub mod config;
pub mod orchestrator;
pub mod session;

// Re-export key types
pub use error::ShellAiError;
pub use backend::{BackendReply, HttpBackend, Message, Payload, QueryBackend, Role};
pub use context::{ContextInjector, HistoryStore};
pub use config::Settings;
pub use orchestrator::QueryOrchestrator;
pub use session::SessionRecorder;
