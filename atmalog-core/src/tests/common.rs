use crate::{
    Config,
    analysis::{
        ChakraConnection, FocusType, JournalAnalysis, PracticeFocus, PracticeType,
        SuggestedPractice, WeeklyAnalysis,
    },
    entry::{PersistedJournalEntry, format_timestamp},
    error::ServiceError,
    kv_store::KeyValueStore,
    service::ReflectionService,
};
use anyhow::{Result, bail};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(data_dir: PathBuf) -> Config {
    Config {
        data_dir,
        editor: None,
        date_format: crate::dates::DEFAULT_DATE_FORMAT.to_string(),
        api_key: None,
        model: "gemini-test".to_string(),
        api_base_url: "http://127.0.0.1:9".to_string(),
        weekly_window_days: 7,
        log_level: "off".to_string(),
    }
}

pub fn sample_analysis(emotion: &str) -> JournalAnalysis {
    JournalAnalysis {
        dominant_emotion: emotion.to_string(),
        suggested_practice: SuggestedPractice {
            kind: PracticeType::Pranayama,
            name: "Nadi Shodhana".to_string(),
            description: "Alternate nostril breathing to balance the mind.".to_string(),
        },
        chakra_connection: ChakraConnection {
            name: "Manipura".to_string(),
            description: "The solar plexus, seat of will and worry.".to_string(),
        },
        yogic_reflection: "Notice the feeling without becoming it.".to_string(),
        mantra: "I am steady, I am here.".to_string(),
    }
}

pub fn sample_weekly() -> WeeklyAnalysis {
    WeeklyAnalysis {
        emotional_pattern: "Restless early in the week, softer by the weekend.".to_string(),
        recurring_yogic_themes: vec!["Santosha".to_string(), "Abhyasa".to_string()],
        weekly_reflection: "Steady practice is turning the tide.".to_string(),
        practice_focus: PracticeFocus {
            kind: FocusType::Asana,
            name: "Balasana".to_string(),
            reason: "Rest is also practice.".to_string(),
        },
    }
}

pub fn mk_entry(content: &str, date: DateTime<Utc>) -> PersistedJournalEntry {
    PersistedJournalEntry::new(
        format_timestamp(date),
        date,
        content.to_string(),
        sample_analysis("Calm"),
    )
}

/// A store whose every operation fails.
pub struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        bail!("storage unavailable")
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        bail!("storage full")
    }

    fn remove(&self, _key: &str) -> Result<()> {
        bail!("storage unavailable")
    }
}

/// Reflection service answering from a queue of scripted results.
///
/// Once a queue is empty every analysis succeeds with a "Calm" reflection
/// and every summary with [`sample_weekly`].
#[derive(Default)]
pub struct ScriptedService {
    analyses: Mutex<VecDeque<Result<JournalAnalysis, ServiceError>>>,
    weeklies: Mutex<VecDeque<Result<WeeklyAnalysis, ServiceError>>>,
    calls: Arc<AtomicUsize>,
    summarized: Arc<Mutex<Vec<Vec<String>>>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_analysis(self, result: Result<JournalAnalysis, ServiceError>) -> Self {
        if let Ok(mut queue) = self.analyses.lock() {
            queue.push_back(result);
        }
        self
    }

    pub fn with_weekly(self, result: Result<WeeklyAnalysis, ServiceError>) -> Self {
        if let Ok(mut queue) = self.weeklies.lock() {
            queue.push_back(result);
        }
        self
    }

    /// Number of `analyze` calls made so far.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    /// Contents of the entries passed to each `summarize` call.
    pub fn summarized(&self) -> Arc<Mutex<Vec<Vec<String>>>> {
        Arc::clone(&self.summarized)
    }
}

#[async_trait]
impl ReflectionService for ScriptedService {
    async fn analyze(&self, _text: &str) -> Result<JournalAnalysis, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.analyses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(sample_analysis("Calm")))
    }

    async fn summarize(
        &self,
        entries: &[PersistedJournalEntry],
    ) -> Result<WeeklyAnalysis, ServiceError> {
        let contents = entries.iter().map(|e| e.content.clone()).collect();
        self.summarized.lock().unwrap().push(contents);
        let next = self.weeklies.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(sample_weekly()))
    }
}
