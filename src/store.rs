//! The mood log and its storage slot.

use crate::errors::{ImportError, StoreError};
use crate::models::MoodEntry;
use crate::storage::{read_slot, write_slot};
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

#[derive(Debug)]
pub struct MoodStore {
    path: PathBuf,
    entries: Vec<MoodEntry>,
}

impl MoodStore {
    /// Starts from an empty log backed by `path` without touching the disk.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
        }
    }

    /// Loads the log, falling back to an empty one when the slot is missing
    /// or unreadable.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::try_load(&path).await {
            Ok(entries) => entries,
            Err(err) => {
                error!(path = %path.display(), "failed to load mood log: {err}");
                Vec::new()
            }
        };
        info!(path = %path.display(), entries = entries.len(), "mood log loaded");
        Self { path, entries }
    }

    pub async fn try_load(path: &Path) -> Result<Vec<MoodEntry>, StoreError> {
        let Some(bytes) = read_slot(path).await? else {
            return Ok(Vec::new());
        };
        let entries: Vec<MoodEntry> = serde_json::from_slice(&bytes)?;
        Ok(dedupe_by_date(entries))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Newest first.
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry_for(&self, date: NaiveDate) -> Option<&MoodEntry> {
        self.entries.iter().find(|entry| entry.date == date)
    }

    /// Replaces the entry sharing `entry.date` in place, or puts it at the front.
    pub async fn upsert(&mut self, entry: MoodEntry) -> Result<&MoodEntry, StoreError> {
        let mut next = self.entries.clone();
        let index = match next.iter().position(|existing| existing.date == entry.date) {
            Some(index) => {
                next[index] = entry;
                index
            }
            None => {
                next.insert(0, entry);
                0
            }
        };

        self.commit(next).await?;
        Ok(&self.entries[index])
    }

    /// Replaces the whole log with the entries in `raw`. All or nothing: any
    /// rejected entry leaves both the log and the slot untouched.
    pub async fn import_replace(&mut self, raw: &[u8]) -> Result<usize, ImportError> {
        let entries = parse_import(raw)?;
        let count = entries.len();
        self.commit(entries).await?;
        info!(entries = count, "mood log replaced by import");
        Ok(count)
    }

    pub fn export_snapshot(&self) -> Result<Vec<u8>, StoreError> {
        Ok(serde_json::to_vec_pretty(&self.entries)?)
    }

    /// Writes the current log to the slot.
    pub async fn persist(&self) -> Result<(), StoreError> {
        write_entries(&self.path, &self.entries).await
    }

    /// The new log only replaces the in-memory one once it is on disk.
    async fn commit(&mut self, entries: Vec<MoodEntry>) -> Result<(), StoreError> {
        write_entries(&self.path, &entries).await?;
        self.entries = entries;
        Ok(())
    }
}

async fn write_entries(path: &Path, entries: &[MoodEntry]) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(entries)?;
    write_slot(path, &payload).await
}

fn parse_import(raw: &[u8]) -> Result<Vec<MoodEntry>, ImportError> {
    let value: Value = serde_json::from_slice(raw).map_err(ImportError::Parse)?;
    let Value::Array(items) = value else {
        return Err(ImportError::Format(json_kind(&value)));
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let entry: MoodEntry = serde_json::from_value(item).map_err(|err| {
            ImportError::InvalidEntry {
                index,
                reason: err.to_string(),
            }
        })?;
        if !seen.insert(entry.date) {
            return Err(ImportError::DuplicateDate(entry.date));
        }
        entries.push(entry);
    }
    Ok(entries)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Keeps the first (newest) entry for each date.
fn dedupe_by_date(entries: Vec<MoodEntry>) -> Vec<MoodEntry> {
    let mut seen = HashSet::with_capacity(entries.len());
    let before = entries.len();
    let kept: Vec<MoodEntry> = entries
        .into_iter()
        .filter(|entry| seen.insert(entry.date))
        .collect();
    if kept.len() != before {
        warn!(dropped = before - kept.len(), "stored mood log had duplicate dates");
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;
    use chrono::{Duration, TimeZone, Utc};

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, n).unwrap()
    }

    fn entry(date: NaiveDate, mood: Mood) -> MoodEntry {
        MoodEntry {
            date,
            mood,
            activities: vec!["work".to_string()],
            notes: String::new(),
            timestamp: Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> MoodStore {
        MoodStore::empty(dir.path().join("moods.json"))
    }

    #[tokio::test]
    async fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = MoodStore::load(dir.path().join("nothing.json")).await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn load_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moods.json");
        std::fs::write(&path, b"{not json").unwrap();

        let store = MoodStore::load(&path).await;
        assert!(store.is_empty());
        assert!(MoodStore::try_load(&path).await.is_err());
    }

    #[tokio::test]
    async fn load_drops_duplicate_dates_keeping_newest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moods.json");
        let stored = vec![entry(day(2), Mood::Good), entry(day(2), Mood::Bad)];
        std::fs::write(&path, serde_json::to_vec(&stored).unwrap()).unwrap();

        let store = MoodStore::load(&path).await;
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].mood, Mood::Good);
    }

    #[tokio::test]
    async fn upsert_new_date_goes_to_front() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.upsert(entry(day(1), Mood::Okay)).await.unwrap();
        store.upsert(entry(day(2), Mood::Good)).await.unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].date, day(2));
        assert_eq!(store.entries()[1].date, day(1));
    }

    #[tokio::test]
    async fn upsert_existing_date_replaces_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.upsert(entry(day(1), Mood::Okay)).await.unwrap();
        store.upsert(entry(day(2), Mood::Good)).await.unwrap();
        store.upsert(entry(day(3), Mood::Bad)).await.unwrap();

        let saved = store.upsert(entry(day(2), Mood::Terrible)).await.unwrap();
        assert_eq!(saved.mood, Mood::Terrible);

        let dates: Vec<_> = store.entries().iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![day(3), day(2), day(1)]);
        assert_eq!(store.entry_for(day(2)).unwrap().mood, Mood::Terrible);
    }

    #[tokio::test]
    async fn repeated_upserts_keep_dates_unique() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let start = day(1);

        for i in 0..20i64 {
            let date = start + Duration::days(i % 6);
            store.upsert(entry(date, Mood::ALL[(i % 5) as usize])).await.unwrap();
            let unique: HashSet<_> = store.entries().iter().map(|e| e.date).collect();
            assert_eq!(unique.len(), store.len());
        }
        assert_eq!(store.len(), 6);
    }

    #[tokio::test]
    async fn upsert_persists_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.upsert(entry(day(4), Mood::Excellent)).await.unwrap();

        let reloaded = MoodStore::load(store.path()).await;
        assert_eq!(reloaded.entries(), store.entries());
    }

    #[tokio::test]
    async fn persist_rewrites_slot_from_memory() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.upsert(entry(day(4), Mood::Okay)).await.unwrap();
        std::fs::write(store.path(), b"garbage").unwrap();

        store.persist().await.unwrap();
        assert_eq!(MoodStore::try_load(store.path()).await.unwrap(), store.entries());
    }

    #[tokio::test]
    async fn failed_write_leaves_log_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = MoodStore::empty(dir.path().join("missing-dir").join("moods.json"));

        assert!(store.upsert(entry(day(1), Mood::Good)).await.is_err());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn export_then_import_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.upsert(entry(day(1), Mood::Bad)).await.unwrap();
        store.upsert(entry(day(2), Mood::Excellent)).await.unwrap();
        let exported = store.export_snapshot().unwrap();

        let other_dir = tempfile::tempdir().unwrap();
        let mut other = store_in(&other_dir);
        assert_eq!(other.import_replace(&exported).await.unwrap(), 2);
        assert_eq!(other.entries(), store.entries());
    }

    #[tokio::test]
    async fn import_rejects_non_list_and_keeps_log() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.upsert(entry(day(1), Mood::Good)).await.unwrap();
        let on_disk = std::fs::read(store.path()).unwrap();

        let single = serde_json::to_vec(&entry(day(9), Mood::Bad)).unwrap();
        assert!(matches!(
            store.import_replace(&single).await,
            Err(ImportError::Format("an object"))
        ));
        assert!(matches!(
            store.import_replace(br#""hello""#).await,
            Err(ImportError::Format("a string"))
        ));
        assert!(matches!(
            store.import_replace(b"not json at all").await,
            Err(ImportError::Parse(_))
        ));

        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].date, day(1));
        assert_eq!(std::fs::read(store.path()).unwrap(), on_disk);
    }

    #[tokio::test]
    async fn import_rejects_whole_file_on_one_bad_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.upsert(entry(day(1), Mood::Good)).await.unwrap();

        let raw = br#"[
            {"date":"2026-05-02","mood":"good","activities":[],"notes":"","timestamp":"2026-05-02T08:00:00Z"},
            {"date":"2026-05-03","mood":"meh","activities":[],"notes":"","timestamp":"2026-05-03T08:00:00Z"}
        ]"#;
        match store.import_replace(raw).await {
            Err(ImportError::InvalidEntry { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn import_rejects_duplicate_dates() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let raw =
            serde_json::to_vec(&vec![entry(day(3), Mood::Good), entry(day(3), Mood::Bad)]).unwrap();

        assert!(matches!(
            store.import_replace(&raw).await,
            Err(ImportError::DuplicateDate(date)) if date == day(3)
        ));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn import_empty_list_clears_log() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.upsert(entry(day(1), Mood::Good)).await.unwrap();

        assert_eq!(store.import_replace(b"[]").await.unwrap(), 0);
        assert!(store.is_empty());
        assert!(MoodStore::load(store.path()).await.is_empty());
    }
}
