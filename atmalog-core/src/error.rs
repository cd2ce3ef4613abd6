use thiserror::Error;

/// Underlying cause of a storage failure.
pub type StorageCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Shown when the reflection service fails without a message of its own.
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred.";

/// Failures of a call to the reflection service. Never retried.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("No API key configured. Set GEMINI_API_KEY or `api_key` in config.toml.")]
    MissingApiKey,
    #[error("Could not reach the reflection service: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with an error status.
    #[error("{}", .message.as_deref().unwrap_or(FALLBACK_MESSAGE))]
    Api { status: u16, message: Option<String> },
    #[error("The reflection service returned an unexpected response: {0}")]
    Malformed(String),
}

/// Everything a journal session can surface to the user.
///
/// None of these is fatal: the session always returns to an idle state
/// and the user can try again.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Please write something in your journal before analyzing.")]
    EmptyInput,
    #[error("An analysis is already in progress.")]
    Busy,
    #[error("Could not load your saved journal entries.")]
    StorageRead(#[source] StorageCause),
    #[error("Could not save your new journal entry.")]
    StorageWrite(#[source] StorageCause),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("Write at least one entry in the last {days} days to see your weekly review.")]
    EmptyWeek { days: u32 },
}
