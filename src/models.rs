use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown for statistics that have no data yet.
pub const EMPTY_LABEL: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Excellent,
    Good,
    Okay,
    Bad,
    Terrible,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Excellent,
        Mood::Good,
        Mood::Okay,
        Mood::Bad,
        Mood::Terrible,
    ];

    /// Position on the 1..=5 scale, terrible = 1.
    pub fn value(self) -> u8 {
        match self {
            Mood::Excellent => 5,
            Mood::Good => 4,
            Mood::Okay => 3,
            Mood::Bad => 2,
            Mood::Terrible => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Excellent => "Excellent",
            Mood::Good => "Good",
            Mood::Okay => "Okay",
            Mood::Bad => "Bad",
            Mood::Terrible => "Terrible",
        }
    }

    /// Buckets a mean scale value back onto a mood using half-open thresholds.
    pub fn from_average(average: f64) -> Self {
        if average >= 4.5 {
            Mood::Excellent
        } else if average >= 3.5 {
            Mood::Good
        } else if average >= 2.5 {
            Mood::Okay
        } else if average >= 1.5 {
            Mood::Bad
        } else {
            Mood::Terrible
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One day's record. Field order here is the field order of the stored and
/// exported JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    #[serde(with = "day")]
    pub date: NaiveDate,
    pub mood: Mood,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub notes: String,
    pub timestamp: DateTime<Utc>,
}

impl MoodEntry {
    pub fn new(date: NaiveDate, mood: Mood, activities: Vec<String>, notes: String) -> Self {
        Self {
            date,
            mood,
            activities,
            notes,
            timestamp: Utc::now(),
        }
    }
}

/// Dates travel as fixed-width `YYYY-MM-DD` text; anything else is rejected.
pub mod day {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("date `{raw}` is not YYYY-MM-DD")))
    }

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let bytes = raw.as_bytes();
        if bytes.len() != 10 {
            return None;
        }
        let canonical = bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
        if !canonical {
            return None;
        }
        NaiveDate::parse_from_str(raw, FORMAT).ok()
    }
}

#[derive(Debug, Deserialize)]
pub struct SaveMoodRequest {
    pub mood: Mood,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: String,
    pub entry: Option<MoodEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    pub label: String,
    pub mood: Mood,
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub date: String,
    pub label: String,
    pub mood: Mood,
    pub mood_label: String,
    pub activities: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub total_days: usize,
    pub average_mood: String,
    pub streak: u32,
    pub best_mood: String,
    pub weekly_chart: Vec<ChartPoint>,
    pub history: Vec<HistoryItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveMoodResponse {
    pub entry: MoodEntry,
    pub summary: SummaryResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImportResponse {
    pub imported: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_thresholds_are_half_open() {
        assert_eq!(Mood::from_average(4.5), Mood::Excellent);
        assert_eq!(Mood::from_average(4.49), Mood::Good);
        assert_eq!(Mood::from_average(3.5), Mood::Good);
        assert_eq!(Mood::from_average(2.5), Mood::Okay);
        assert_eq!(Mood::from_average(1.5), Mood::Bad);
        assert_eq!(Mood::from_average(1.0), Mood::Terrible);
    }

    #[test]
    fn entry_json_keeps_field_order() {
        let entry: MoodEntry = serde_json::from_str(
            r#"{"date":"2026-03-04","mood":"good","activities":["work"],"notes":"ok","timestamp":"2026-03-04T09:30:00.000Z"}"#,
        )
        .unwrap();
        let encoded = serde_json::to_string(&entry).unwrap();
        assert!(encoded.starts_with(
            r#"{"date":"2026-03-04","mood":"good","activities":["work"],"notes":"ok","timestamp":"#
        ));
    }

    #[test]
    fn entry_rejects_unknown_mood_and_loose_dates() {
        let bad_mood = r#"{"date":"2026-03-04","mood":"great","timestamp":"2026-03-04T09:30:00Z"}"#;
        assert!(serde_json::from_str::<MoodEntry>(bad_mood).is_err());

        let short_date = r#"{"date":"2026-3-4","mood":"good","timestamp":"2026-03-04T09:30:00Z"}"#;
        assert!(serde_json::from_str::<MoodEntry>(short_date).is_err());

        for raw in [" 2026-1-05", "2026- 1-05", "2026-01- 5", "+2026-1-05", "2026/01/05"] {
            assert_eq!(day::parse(raw), None, "{raw:?} should be rejected");
            let json = format!(
                r#"{{"date":"{raw}","mood":"good","timestamp":"2026-01-05T09:30:00Z"}}"#
            );
            assert!(serde_json::from_str::<MoodEntry>(&json).is_err());
        }
        assert_eq!(day::parse("2026-13-01"), None);
        assert_eq!(day::parse("2026-01-05"), NaiveDate::from_ymd_opt(2026, 1, 5));
    }

    #[test]
    fn missing_activities_and_notes_default_to_empty() {
        let entry: MoodEntry = serde_json::from_str(
            r#"{"date":"2026-03-04","mood":"bad","timestamp":"2026-03-04T09:30:00Z"}"#,
        )
        .unwrap();
        assert!(entry.activities.is_empty());
        assert!(entry.notes.is_empty());
    }
}
