use crate::{
    Config,
    analysis::{JournalAnalysis, WeeklyAnalysis},
    dates::entries_in_window,
    entry::PersistedJournalEntry,
    error::JournalError,
    kv_store::{FileStore, KeyValueStore},
    service::{GeminiClient, ReflectionService},
    store::EntryStore,
    view::{RequestState, View},
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// A journaling session: editor draft, stored entries, the reflection
/// service and what the user is currently looking at.
pub struct AtmaLog {
    pub config: Config,
    store: EntryStore,
    service: Box<dyn ReflectionService>,
    draft: String,
    view: View,
    request: RequestState,
    error: Option<String>,
}

impl AtmaLog {
    /// Creates a new `AtmaLog` instance with a specific `Config`, storing
    /// entries under `config.data_dir` and talking to Gemini.
    ///
    /// This also ensures that the data directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        let kv = FileStore::new(&config.data_dir)?;
        let service = GeminiClient::from_config(&config);
        Ok(Self::from_parts(config, Box::new(kv), Box::new(service)))
    }

    /// Assembles a session and loads the stored entries.
    ///
    /// A failed load does not abort: the session starts with no entries and
    /// the load error in [`error`](Self::error).
    pub fn from_parts(
        config: Config,
        kv: Box<dyn KeyValueStore>,
        service: Box<dyn ReflectionService>,
    ) -> Self {
        let mut store = EntryStore::new(kv);
        let error = store.load().err().map(|e| e.to_string());
        Self {
            config,
            store,
            service,
            draft: String::new(),
            view: View::default(),
            request: RequestState::Idle,
            error,
        }
    }

    /// Stored entries, newest first.
    pub fn entries(&self) -> &[PersistedJournalEntry] {
        self.store.entries()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Changes the visible projection. Entry data is never touched.
    pub fn switch_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn request_state(&self) -> &RequestState {
        &self.request
    }

    pub fn is_loading(&self) -> bool {
        self.request.is_pending()
    }

    /// The message for the error banner, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Reflection received for the most recent submission of this session.
    pub fn latest_analysis(&self) -> Option<&JournalAnalysis> {
        match &self.request {
            RequestState::Succeeded(analysis) => Some(analysis),
            _ => None,
        }
    }

    /// Sends the current draft for analysis and stores the result.
    pub async fn submit(&mut self) -> Result<PersistedJournalEntry, JournalError> {
        self.submit_at(Utc::now()).await
    }

    /// Same as [`submit`](Self::submit) with an explicit creation time.
    ///
    /// - A blank draft is rejected without calling the service.
    /// - On success the new entry is put at the front of the list, persisted
    ///   and the draft is cleared.
    /// - If persisting fails, the entry and its analysis stay available for
    ///   this session and the write error is returned.
    pub async fn submit_at(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<PersistedJournalEntry, JournalError> {
        if self.request.is_pending() {
            return Err(self.surface(JournalError::Busy));
        }
        if self.draft.trim().is_empty() {
            return Err(self.surface(JournalError::EmptyInput));
        }

        self.request = RequestState::Pending;
        self.error = None;

        let result = self.service.analyze(&self.draft).await;
        let analysis = match result {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!("analysis failed: {e}");
                let err = JournalError::from(e);
                self.request = RequestState::Failed(err.to_string());
                return Err(self.surface(err));
            }
        };
        self.request = RequestState::Succeeded(analysis.clone());

        let content = std::mem::take(&mut self.draft);
        let id = self.store.next_id(now);
        let entry = PersistedJournalEntry::new(id, now, content, analysis);
        info!(id = %entry.id, "journal entry analyzed");

        let saved = self.store.append(entry.clone()).map(|_| ());
        match saved {
            Ok(()) => Ok(entry),
            Err(e) => Err(self.surface(e)),
        }
    }

    /// Summarizes the entries written within the configured weekly window.
    pub async fn weekly_review(&mut self) -> Result<WeeklyAnalysis, JournalError> {
        self.weekly_review_at(Utc::now()).await
    }

    pub async fn weekly_review_at(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<WeeklyAnalysis, JournalError> {
        let days = self.config.weekly_window_days;
        let window = entries_in_window(self.store.entries(), now, days);
        if window.is_empty() {
            return Err(self.surface(JournalError::EmptyWeek { days }));
        }

        self.error = None;
        let result = self.service.summarize(&window).await;
        match result {
            Ok(weekly) => Ok(weekly),
            Err(e) => {
                warn!("weekly review failed: {e}");
                Err(self.surface(e.into()))
            }
        }
    }

    /// Removes every stored entry.
    pub fn clear_entries(&mut self) -> Result<(), JournalError> {
        self.store.clear().map_err(|e| self.surface(e))
    }

    fn surface(&mut self, err: JournalError) -> JournalError {
        self.error = Some(err.to_string());
        err
    }
}
