pub mod analysis;
pub mod atmalog;
pub mod config;
pub mod dates;
pub mod entry;
pub mod error;
pub mod kv_store;
pub mod service;
pub mod store;
pub mod view;

#[cfg(test)]
mod tests;

pub use analysis::{
    ChakraConnection, FocusType, JournalAnalysis, PracticeFocus, PracticeType, SuggestedPractice,
    WeeklyAnalysis,
};
pub use atmalog::AtmaLog;
pub use config::Config;
pub use entry::PersistedJournalEntry;
pub use error::{JournalError, ServiceError};
pub use kv_store::{FileStore, KeyValueStore, MemoryStore};
pub use service::{GeminiClient, ReflectionService};
pub use store::{ENTRIES_KEY, EntryStore};
pub use view::{RequestState, View};
