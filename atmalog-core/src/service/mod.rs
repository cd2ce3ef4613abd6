//! The external reflection service: the AI collaborator that turns journal
//! text into a [`JournalAnalysis`] and a set of entries into a [`WeeklyAnalysis`].

mod gemini;
mod prompts;

pub use gemini::GeminiClient;

use crate::analysis::{JournalAnalysis, WeeklyAnalysis};
use crate::entry::PersistedJournalEntry;
use crate::error::ServiceError;
use async_trait::async_trait;

#[async_trait]
pub trait ReflectionService: Send + Sync {
    /// Analyzes a single, non-blank journal entry.
    async fn analyze(&self, text: &str) -> Result<JournalAnalysis, ServiceError>;

    /// Summarizes the given entries (newest-first) into a weekly review.
    async fn summarize(
        &self,
        entries: &[PersistedJournalEntry],
    ) -> Result<WeeklyAnalysis, ServiceError>;
}
