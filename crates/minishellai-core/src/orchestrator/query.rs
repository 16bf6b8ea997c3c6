use crate::backend::{HttpBackend, Payload, QueryBackend};
use crate::config::Settings;
use crate::context::{ContextInjector, HistoryStore};
use crate::error::ShellAiError;
use std::io::Write;

/// Runs one question through the pipeline: context injection, history load,
/// backend call, history save, output.
pub struct QueryOrchestrator {
    backend: Box<dyn QueryBackend>,
    settings: Settings,
}

impl QueryOrchestrator {
    pub fn new(settings: Settings, backend: Box<dyn QueryBackend>) -> Self {
        Self { backend, settings }
    }

    /// Build an orchestrator talking to the configured HTTP endpoint.
    pub fn from_settings(settings: Settings) -> Result<Self, ShellAiError> {
        let backend = HttpBackend::from_settings(&settings.backend_service)?;
        Ok(Self::new(settings, Box::new(backend)))
    }

    /// Answer `query`, writing the reply and a newline to `out`.
    ///
    /// History is only rewritten after a successful backend call; a failed
    /// call leaves the history file as it was.
    pub async fn handle<W: Write>(&self, query: &str, out: &mut W) -> Result<String, ShellAiError> {
        let query = ContextInjector::new(&self.settings.output_capture_settings).inject(query)?;
        tracing::info!("Query:\n{}", query);

        let history = HistoryStore::new(self.settings.history.clone());
        let payload = Payload::new(history.load(), query);
        if !payload.roles_alternate() {
            tracing::warn!("History roles do not alternate user/assistant; sending as-is.");
        }

        tracing::info!("Waiting for response from AI...");
        let reply = self.backend.query(&payload).await?;
        if reply.data.is_null() {
            tracing::warn!("Response has no 'data' field.");
        }

        let response = reply.render();
        history.save(payload.into_messages(), reply.text());

        writeln!(out, "{response}")?;
        Ok(response)
    }
}
