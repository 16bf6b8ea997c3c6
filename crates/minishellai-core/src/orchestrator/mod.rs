mod query;

pub use query::QueryOrchestrator;
