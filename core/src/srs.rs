use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{KeyValueStore, StoreResult};

/// Namespace key the review store lives under in the key-value backend.
pub const STORE_KEY: &str = "blitz_srs_v1";

pub const EXPORT_VERSION: u32 = 1;

const MIN_EASE: f64 = 1.3;
const INITIAL_EASE: f64 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordStatus {
    /// Never graded.
    New,
    /// Graded before and the review date has arrived.
    Due,
    /// Graded before, next review still in the future.
    Ok,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    #[serde(rename = "interval")]
    pub interval_days: i32,
    pub ease: f64,
    pub reps: i32,
    pub next_review_at: DateTime<Utc>,
}

impl ReviewRecord {
    pub fn fresh(now: DateTime<Utc>) -> Self {
        Self {
            interval_days: 1,
            ease: INITIAL_EASE,
            reps: 0,
            next_review_at: now,
        }
    }
}

/// The whole persisted state, serialized as one JSON document.
pub type ReviewStore = BTreeMap<String, ReviewRecord>;

/// Simplified SM-2 on a pass/fail grade. Mutates the record in place;
/// the next review lands on a whole-day multiple of `now`.
pub fn apply_grade(record: &mut ReviewRecord, correct: bool, now: DateTime<Utc>) {
    if correct {
        record.reps += 1;
        record.interval_days = match record.reps {
            1 => 1,
            2 => 6,
            _ => ((record.interval_days as f64) * record.ease).round() as i32,
        };
        record.ease = (record.ease + 0.1).max(MIN_EASE);
    } else {
        record.reps = 0;
        record.interval_days = 1;
        record.ease = (record.ease - 0.2).max(MIN_EASE);
    }
    record.next_review_at = now + Duration::days(record.interval_days.max(1).into());
}

/// Merge rule for imported records: higher `reps` wins, the imported
/// record wins ties (it comes from the more recently used device).
pub fn merge_record(current: Option<&ReviewRecord>, imported: &ReviewRecord) -> ReviewRecord {
    match current {
        Some(cur) if cur.reps > imported.reps => cur.clone(),
        _ => imported.clone(),
    }
}

/// Versioned review-store snapshot for backup and device transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    pub records: ReviewStore,
}

/// Scheduler over a key-value backend. Every mutation is a full
/// read-modify-write of the store; reads never mutate.
pub struct Srs<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Srs<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current snapshot. Missing or malformed persisted state decodes
    /// to an empty store.
    pub fn records(&self) -> ReviewStore {
        self.store
            .get(STORE_KEY)
            .ok()
            .flatten()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default()
    }

    pub fn status(&self, word: &str, now: DateTime<Utc>) -> WordStatus {
        match self.records().get(word) {
            None => WordStatus::New,
            Some(rec) if rec.next_review_at <= now => WordStatus::Due,
            Some(_) => WordStatus::Ok,
        }
    }

    pub fn count_due<'a, I>(&self, words: I, now: DateTime<Utc>) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let records = self.records();
        words
            .into_iter()
            .filter(|word| matches!(records.get(*word), Some(rec) if rec.next_review_at <= now))
            .count()
    }

    /// Earliest strictly-future review among `words`, if any.
    pub fn next_review_after<'a, I>(&self, words: I, now: DateTime<Utc>) -> Option<DateTime<Utc>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let records = self.records();
        words
            .into_iter()
            .filter_map(|word| records.get(word))
            .map(|rec| rec.next_review_at)
            .filter(|ts| *ts > now)
            .min()
    }

    /// Grade one answer and persist the updated store.
    pub fn grade(&mut self, word: &str, correct: bool, now: DateTime<Utc>) -> StoreResult<ReviewRecord> {
        let mut records = self.records();
        let record = records
            .entry(word.to_string())
            .or_insert_with(|| ReviewRecord::fresh(now));
        apply_grade(record, correct, now);
        let updated = record.clone();
        self.save(&records)?;
        Ok(updated)
    }

    pub fn export(&self, now: DateTime<Utc>) -> ExportDocument {
        ExportDocument {
            version: EXPORT_VERSION,
            exported_at: now,
            records: self.records(),
        }
    }

    /// Merge an exported document into the store. Returns the number of
    /// words the document carried.
    pub fn import(&mut self, doc: &ExportDocument) -> StoreResult<usize> {
        let mut records = self.records();
        for (word, imported) in &doc.records {
            let merged = merge_record(records.get(word), imported);
            records.insert(word.clone(), merged);
        }
        self.save(&records)?;
        Ok(doc.records.len())
    }

    /// Drop every record. The only way to clear review history.
    pub fn reset(&mut self) -> StoreResult<()> {
        self.save(&ReviewStore::new())
    }

    fn save(&mut self, records: &ReviewStore) -> StoreResult<()> {
        let bytes = serde_json::to_vec(records)?;
        self.store.set(STORE_KEY, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    fn srs() -> Srs<MemoryStore> {
        Srs::new(MemoryStore::new())
    }

    #[test]
    fn ungraded_word_is_new_and_status_never_mutates() {
        let srs = srs();
        assert_eq!(srs.status("ubiquitous", now()), WordStatus::New);
        assert_eq!(srs.status("ubiquitous", now()), WordStatus::New);
        assert!(srs.records().is_empty());
    }

    #[test]
    fn grading_a_new_word_leaves_it_ok_not_due() {
        let mut srs = srs();
        srs.grade("ubiquitous", true, now()).unwrap();
        assert_eq!(srs.status("ubiquitous", now()), WordStatus::Ok);
        // One whole day later it comes due.
        assert_eq!(
            srs.status("ubiquitous", now() + Duration::days(1)),
            WordStatus::Due
        );
    }

    #[test]
    fn three_correct_answers_follow_the_interval_ladder() {
        let mut rec = ReviewRecord::fresh(now());

        apply_grade(&mut rec, true, now());
        assert_eq!(rec.interval_days, 1);
        assert!((rec.ease - 2.6).abs() < 1e-9);

        apply_grade(&mut rec, true, now());
        assert_eq!(rec.interval_days, 6);
        assert!((rec.ease - 2.7).abs() < 1e-9);

        // round(6 * 2.7) = 16
        apply_grade(&mut rec, true, now());
        assert_eq!(rec.interval_days, 16);
        assert!((rec.ease - 2.8).abs() < 1e-9);
        assert_eq!(rec.reps, 3);
        assert_eq!(rec.next_review_at, now() + Duration::days(16));
    }

    #[test]
    fn an_incorrect_answer_resets_the_streak() {
        let mut rec = ReviewRecord::fresh(now());
        for _ in 0..5 {
            apply_grade(&mut rec, true, now());
        }
        assert!(rec.reps == 5 && rec.interval_days > 6);

        apply_grade(&mut rec, false, now());
        assert_eq!(rec.reps, 0);
        assert_eq!(rec.interval_days, 1);
        assert_eq!(rec.next_review_at, now() + Duration::days(1));
    }

    #[test]
    fn ease_never_drops_below_the_floor() {
        let mut rec = ReviewRecord::fresh(now());
        for _ in 0..20 {
            apply_grade(&mut rec, false, now());
        }
        assert!((rec.ease - 1.3).abs() < 1e-9);
    }

    #[test]
    fn malformed_persisted_state_reads_as_empty() {
        let mut store = MemoryStore::new();
        store.set(STORE_KEY, b"{ not json").unwrap();
        let mut srs = Srs::new(store);
        assert_eq!(srs.status("anything", now()), WordStatus::New);
        assert!(srs.records().is_empty());
        // Grading on top of the corrupt state starts from scratch.
        let rec = srs.grade("anything", true, now()).unwrap();
        assert_eq!(rec.reps, 1);
    }

    #[test]
    fn count_due_and_next_review_after() {
        let mut srs = srs();
        srs.grade("alpha", true, now()).unwrap(); // due in 1 day
        srs.grade("beta", true, now()).unwrap();
        srs.grade("beta", true, now()).unwrap(); // due in 6 days

        let words = ["alpha", "beta", "gamma"];
        assert_eq!(srs.count_due(words, now()), 0);
        let later = now() + Duration::days(2);
        assert_eq!(srs.count_due(words, later), 1);
        assert_eq!(
            srs.next_review_after(words, later),
            Some(now() + Duration::days(6))
        );
        assert_eq!(srs.next_review_after(words, now() + Duration::days(7)), None);
    }

    #[test]
    fn import_keeps_the_record_with_more_reps() {
        let mut local = ReviewRecord::fresh(now());
        for _ in 0..3 {
            apply_grade(&mut local, true, now());
        }
        let mut imported = ReviewRecord::fresh(now());
        for _ in 0..5 {
            apply_grade(&mut imported, true, now());
        }

        let merged = merge_record(Some(&local), &imported);
        assert_eq!(merged, imported);
        // Higher local reps survive.
        let merged = merge_record(Some(&imported), &local);
        assert_eq!(merged, imported);
        // Ties favor the import.
        let tied = merge_record(Some(&local.clone()), &local);
        assert_eq!(tied, local);
    }

    #[test]
    fn export_then_import_round_trips() {
        let mut source = srs();
        source.grade("alpha", true, now()).unwrap();
        source.grade("beta", false, now()).unwrap();
        let doc = source.export(now());
        assert_eq!(doc.version, EXPORT_VERSION);

        let json = serde_json::to_string(&doc).unwrap();
        let parsed: ExportDocument = serde_json::from_str(&json).unwrap();

        let mut target = srs();
        let count = target.import(&parsed).unwrap();
        assert_eq!(count, 2);
        assert_eq!(target.records(), source.records());
    }

    #[test]
    fn reset_clears_every_record() {
        let mut srs = srs();
        srs.grade("alpha", true, now()).unwrap();
        srs.reset().unwrap();
        assert!(srs.records().is_empty());
        assert_eq!(srs.status("alpha", now()), WordStatus::New);
    }

    #[test]
    fn record_json_uses_the_wire_field_names() {
        let rec = ReviewRecord::fresh(now());
        let value = serde_json::to_value(&rec).unwrap();
        assert!(value.get("interval").is_some());
        assert!(value.get("nextReviewAt").is_some());
    }
}
