mod history;
mod injector;

pub use history::HistoryStore;
pub use injector::ContextInjector;
