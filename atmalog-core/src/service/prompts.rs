//! Prompt text and response schemas sent to the reflection service.

use crate::analysis::{FocusType, PracticeType};
use crate::dates::format_date;
use crate::entry::PersistedJournalEntry;
use serde_json::{Value, json};
use strum::IntoEnumIterator;

pub const ANALYSIS_INSTRUCTION: &str = "You are a compassionate yoga teacher and guide. \
Read the student's journal entry and respond with a gentle, structured self-reflection \
rooted in yogic philosophy. Name the dominant emotion, suggest one practice, connect the \
entry to a chakra, offer a short reflection and a mantra the student can repeat.";

pub const WEEKLY_INSTRUCTION: &str = "You are a compassionate yoga teacher reviewing a \
student's journal for the past week. Describe the emotional pattern across the entries, \
list recurring yogic themes, write a weekly reflection and recommend one practice focus \
for the coming week.";

pub fn analysis_prompt(text: &str) -> String {
    format!("Journal entry:\n\n{text}")
}

/// Lists entries oldest-first so the service reads the week in order.
/// Dates are rendered with the configured `date_format`.
pub fn weekly_prompt(entries: &[PersistedJournalEntry], date_format: &str) -> String {
    let mut prompt = String::from("Journal entries from this week:\n");
    for entry in entries.iter().rev() {
        prompt.push_str(&format!(
            "\n---\nDate: {}\nDominant emotion: {}\nEntry: {}\n",
            format_date(&entry.date, date_format),
            entry.analysis.dominant_emotion,
            entry.content.trim()
        ));
    }
    prompt
}

pub fn analysis_schema() -> Value {
    let practice_types: Vec<String> = PracticeType::iter().map(|t| t.to_string()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "dominantEmotion": { "type": "STRING", "description": "The main emotion in the entry." },
            "suggestedPractice": {
                "type": "OBJECT",
                "properties": {
                    "type": { "type": "STRING", "enum": practice_types },
                    "name": { "type": "STRING" },
                    "description": { "type": "STRING" }
                },
                "required": ["type", "name", "description"]
            },
            "chakraConnection": {
                "type": "OBJECT",
                "properties": {
                    "name": { "type": "STRING" },
                    "description": { "type": "STRING" }
                },
                "required": ["name", "description"]
            },
            "yogicReflection": { "type": "STRING" },
            "mantra": { "type": "STRING" }
        },
        "required": ["dominantEmotion", "suggestedPractice", "chakraConnection", "yogicReflection", "mantra"]
    })
}

pub fn weekly_schema() -> Value {
    let focus_types: Vec<String> = FocusType::iter().map(|t| t.to_string()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "emotionalPattern": { "type": "STRING" },
            "recurringYogicThemes": { "type": "ARRAY", "items": { "type": "STRING" } },
            "weeklyReflection": { "type": "STRING" },
            "practiceFocus": {
                "type": "OBJECT",
                "properties": {
                    "type": { "type": "STRING", "enum": focus_types },
                    "name": { "type": "STRING" },
                    "reason": { "type": "STRING" }
                },
                "required": ["type", "name", "reason"]
            }
        },
        "required": ["emotionalPattern", "recurringYogicThemes", "weeklyReflection", "practiceFocus"]
    })
}
