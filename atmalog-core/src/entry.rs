use crate::analysis::JournalAnalysis;
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One journal submission together with the reflection it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedJournalEntry {
    /// Creation timestamp in ISO-8601; may carry a `-N` suffix when two entries
    /// were created within the same millisecond.
    pub id: String,
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
    pub content: String,
    pub analysis: JournalAnalysis,
}

impl PersistedJournalEntry {
    pub fn new(id: String, date: DateTime<Utc>, content: String, analysis: JournalAnalysis) -> Self {
        Self {
            id,
            date: truncate_to_millis(date),
            content,
            analysis,
        }
    }
}

/// `2025-08-15T10:20:30.123Z`
pub fn format_timestamp(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn truncate_to_millis(date: DateTime<Utc>) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(date.timestamp_millis())
        .single()
        .unwrap_or(date)
}

mod iso_millis {
    use super::format_timestamp;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format_timestamp(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|date| date.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
