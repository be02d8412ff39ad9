use crate::models::{ChartPoint, EMPTY_LABEL, HistoryItem, Mood, MoodEntry, SummaryResponse};
use chrono::{Duration, Local, NaiveDate};
use std::collections::HashSet;

pub const WEEKLY_CHART_DAYS: usize = 7;
pub const HISTORY_LEN: usize = 10;

pub fn build_summary(entries: &[MoodEntry]) -> SummaryResponse {
    build_summary_at(Local::now().date_naive(), entries)
}

/// Dashboard values as of `today`. Entries dated after `today` are left out.
pub fn build_summary_at(today: NaiveDate, entries: &[MoodEntry]) -> SummaryResponse {
    let visible = up_to(today, entries);

    SummaryResponse {
        total_days: total_days(&visible),
        average_mood: average_mood_label(&visible).to_string(),
        streak: current_streak(&visible, today),
        best_mood: best_mood_label(&visible).to_string(),
        weekly_chart: recent_series(&visible, WEEKLY_CHART_DAYS),
        history: recent_history(&visible, HISTORY_LEN),
    }
}

fn up_to(today: NaiveDate, entries: &[MoodEntry]) -> Vec<MoodEntry> {
    entries
        .iter()
        .filter(|entry| entry.date <= today)
        .cloned()
        .collect()
}

pub fn total_days(entries: &[MoodEntry]) -> usize {
    entries.len()
}

pub fn average_mood(entries: &[MoodEntry]) -> Option<Mood> {
    if entries.is_empty() {
        return None;
    }
    let total: u32 = entries.iter().map(|entry| u32::from(entry.mood.value())).sum();
    Some(Mood::from_average(f64::from(total) / entries.len() as f64))
}

pub fn average_mood_label(entries: &[MoodEntry]) -> &'static str {
    average_mood(entries).map_or(EMPTY_LABEL, Mood::label)
}

/// Consecutive days with an entry, counting back from `today`. No entry today
/// means no streak.
pub fn current_streak(entries: &[MoodEntry], today: NaiveDate) -> u32 {
    let logged: HashSet<NaiveDate> = entries.iter().map(|entry| entry.date).collect();

    let mut streak = 0;
    let mut date = today;
    while logged.contains(&date) {
        streak += 1;
        date -= Duration::days(1);
    }
    streak
}

/// Highest mood in the log; ties go to the entry encountered first.
pub fn best_mood(entries: &[MoodEntry]) -> Option<Mood> {
    entries.iter().fold(None, |best: Option<Mood>, entry| match best {
        Some(current) if current.value() >= entry.mood.value() => Some(current),
        _ => Some(entry.mood),
    })
}

pub fn best_mood_label(entries: &[MoodEntry]) -> &'static str {
    best_mood(entries).map_or(EMPTY_LABEL, Mood::label)
}

/// The `n` most recent entries by log order, oldest first.
pub fn recent_series(entries: &[MoodEntry], n: usize) -> Vec<ChartPoint> {
    recent(entries, n)
        .map(|entry| ChartPoint {
            date: date_key(entry.date),
            label: entry.date.format("%b %-d").to_string(),
            mood: entry.mood,
            value: entry.mood.value(),
        })
        .collect()
}

/// Like [`recent_series`] but keeping the notes and activities for display.
pub fn recent_history(entries: &[MoodEntry], n: usize) -> Vec<HistoryItem> {
    recent(entries, n)
        .map(|entry| HistoryItem {
            date: date_key(entry.date),
            label: entry.date.format("%A, %B %-d, %Y").to_string(),
            mood: entry.mood,
            mood_label: entry.mood.label().to_string(),
            activities: entry.activities.clone(),
            notes: entry.notes.clone(),
        })
        .collect()
}

fn recent(entries: &[MoodEntry], n: usize) -> impl Iterator<Item = &MoodEntry> {
    entries[..n.min(entries.len())].iter().rev()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
