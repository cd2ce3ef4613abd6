use crate::analysis::JournalAnalysis;
use strum_macros::{AsRefStr, Display, EnumString};

/// Which projection of the journal is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum View {
    /// Daily entry: the editor and the latest reflection.
    #[default]
    Journal,
    /// Weekly review of recent entries.
    Weekly,
}

/// Lifecycle of the analysis request for the current draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded(JournalAnalysis),
    Failed(String),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }
}
