//! Structured reflections returned by the reflection service.
//!
//! Field names serialize in camelCase so stored entries stay readable by any
//! other AtmaLog client:
//!
//! ```json
//! {
//!   "dominantEmotion": "Anxiety",
//!   "suggestedPractice": { "type": "Pranayama", "name": "Nadi Shodhana", "description": "..." },
//!   "chakraConnection": { "name": "Manipura", "description": "..." },
//!   "yogicReflection": "...",
//!   "mantra": "..."
//! }
//! ```

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Kind of practice suggested for a single entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum PracticeType {
    Asana,
    Pranayama,
    Meditation,
}

/// Kind of practice the weekly review recommends focusing on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum FocusType {
    Asana,
    Pranayama,
    Philosophy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedPractice {
    #[serde(rename = "type")]
    pub kind: PracticeType,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChakraConnection {
    pub name: String,
    pub description: String,
}

/// The reflection produced once for every journal entry. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalAnalysis {
    pub dominant_emotion: String,
    pub suggested_practice: SuggestedPractice,
    pub chakra_connection: ChakraConnection,
    pub yogic_reflection: String,
    pub mantra: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeFocus {
    #[serde(rename = "type")]
    pub kind: FocusType,
    pub name: String,
    pub reason: String,
}

/// Summary over a window of entries. Recomputed on every request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAnalysis {
    pub emotional_pattern: String,
    pub recurring_yogic_themes: Vec<String>,
    pub weekly_reflection: String,
    pub practice_focus: PracticeFocus,
}
