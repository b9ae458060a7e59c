//! Cycle tracking service.
//!
//! Owns the interval and mood collections, persists them through a
//! [`Storage`] backend and recomputes the prediction after every change.

use bloom_core::{
    CycleConfig, CyclePrediction, Day, IntervalId, MoodLog, PeriodInterval, Phase,
};
use bloom_storage::Storage;
use tracing::{debug, info, warn};

use crate::calendar::{self, CalendarCell};
use crate::classifier;
use crate::log::{IntervalLog, MoodJournal};
use crate::projector::predict;
use crate::Result;

/// Single-writer front end over the cycle engine.
pub struct CycleTracker<S: Storage> {
    storage: S,
    config: CycleConfig,
    periods: IntervalLog,
    moods: MoodJournal,
    prediction: CyclePrediction,
}

impl<S: Storage> CycleTracker<S> {
    /// Load both collections from `storage` and compute the first prediction.
    pub async fn load(storage: S, config: CycleConfig) -> Result<Self> {
        config.validate()?;

        let periods = IntervalLog::from_intervals(storage.load_periods().await?)?;
        let moods = MoodJournal::from_moods(storage.load_moods().await?);
        let prediction = predict(periods.as_slice(), &config);

        info!(
            "Loaded {} periods and {} mood logs",
            periods.len(),
            moods.as_slice().len()
        );

        Ok(Self {
            storage,
            config,
            periods,
            moods,
            prediction,
        })
    }

    /// Log a new period.
    ///
    /// Rejects reversed ranges and overlaps before anything is persisted.
    pub async fn add_period(&mut self, start: Day, end: Day) -> Result<PeriodInterval> {
        let interval = PeriodInterval::new(start, end)?;
        self.periods.add(interval.clone())?;

        if let Err(e) = self.storage.save_periods(self.periods.as_slice()).await {
            warn!("Failed to save period {}: {}", interval.id(), e);
            self.periods.remove(interval.id())?;
            return Err(e.into());
        }

        info!("Logged period {} ({}..{})", interval.id(), start, end);
        self.recompute();
        Ok(interval)
    }

    /// Delete a logged period.
    pub async fn delete_period(&mut self, id: IntervalId) -> Result<PeriodInterval> {
        let removed = self.periods.remove(id)?;

        if let Err(e) = self.storage.save_periods(self.periods.as_slice()).await {
            warn!("Failed to save after deleting period {}: {}", id, e);
            self.periods.add(removed)?;
            return Err(e.into());
        }

        info!("Deleted period {}", id);
        self.recompute();
        Ok(removed)
    }

    /// Record the mood for `date`, replacing any earlier log for that day.
    pub async fn set_mood(
        &mut self,
        date: Day,
        mood: impl Into<String>,
        note: Option<String>,
    ) -> Result<MoodLog> {
        let log = MoodLog::new(date, mood, note);
        let previous = self.moods.set(log.clone());

        if let Err(e) = self.storage.save_moods(self.moods.as_slice()).await {
            warn!("Failed to save mood for {}: {}", date, e);
            match previous {
                Some(previous) => {
                    self.moods.set(previous);
                }
                None => {
                    self.moods.remove(date);
                }
            }
            return Err(e.into());
        }

        debug!("Mood for {} set to {}", date, log.mood);
        Ok(log)
    }

    fn recompute(&mut self) {
        self.prediction = predict(self.periods.as_slice(), &self.config);
        debug!(
            "Recomputed prediction: next period {:?}",
            self.prediction.next_period_start_date
        );
    }

    /// Logged periods in start-date order.
    pub fn periods(&self) -> &[PeriodInterval] {
        self.periods.as_slice()
    }

    /// Mood logs in date order.
    pub fn moods(&self) -> &[MoodLog] {
        self.moods.as_slice()
    }

    /// Mood logged for `day`.
    pub fn mood_on(&self, day: Day) -> Option<&MoodLog> {
        self.moods.get(day)
    }

    /// Current prediction.
    pub fn prediction(&self) -> &CyclePrediction {
        &self.prediction
    }

    /// Constants in use.
    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    /// Phase of `day` given everything logged so far.
    pub fn phase_on(&self, day: Day) -> Phase {
        classifier::classify(self.periods.as_slice(), Some(&self.prediction), day)
    }

    /// Month grid for calendar rendering.
    pub fn month_grid(&self, year: i32, month: u32, today: Day) -> Result<Vec<CalendarCell>> {
        Ok(calendar::month_grid(
            year,
            month,
            today,
            self.periods.as_slice(),
            Some(&self.prediction),
            self.moods.as_slice(),
        )?)
    }

    /// Give back the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrackerError;
    use async_trait::async_trait;
    use bloom_core::{CoreError, DataShortfall};
    use bloom_storage::{MemoryStorage, StorageError};

    /// Storage that loads a fixed snapshot and fails every save.
    struct FullDiskStorage {
        periods: Vec<PeriodInterval>,
        moods: Vec<MoodLog>,
    }

    fn disk_full() -> StorageError {
        StorageError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
    }

    #[async_trait]
    impl Storage for FullDiskStorage {
        async fn load_periods(&self) -> bloom_storage::Result<Vec<PeriodInterval>> {
            Ok(self.periods.clone())
        }

        async fn save_periods(&mut self, _periods: &[PeriodInterval]) -> bloom_storage::Result<()> {
            Err(disk_full())
        }

        async fn load_moods(&self) -> bloom_storage::Result<Vec<MoodLog>> {
            Ok(self.moods.clone())
        }

        async fn save_moods(&mut self, _moods: &[MoodLog]) -> bloom_storage::Result<()> {
            Err(disk_full())
        }
    }

    async fn full_disk_tracker() -> CycleTracker<FullDiskStorage> {
        let storage = FullDiskStorage {
            periods: vec![PeriodInterval::parse("2024-01-01", "2024-01-05").unwrap()],
            moods: vec![MoodLog::new(day("2024-01-03"), "😊", Some("sunny".into()))],
        };
        CycleTracker::load(storage, CycleConfig::default()).await.unwrap()
    }

    fn day(s: &str) -> Day {
        Day::parse(s).unwrap()
    }

    async fn empty_tracker() -> CycleTracker<MemoryStorage> {
        CycleTracker::load(MemoryStorage::new(), CycleConfig::default())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn starts_with_defaults() {
        let tracker = empty_tracker().await;
        assert!(tracker.periods().is_empty());
        assert_eq!(tracker.prediction().average_cycle_length, 28);
        assert_eq!(tracker.prediction().next_period_start_date, None);
        assert_eq!(
            tracker.phase_on(day("2024-01-10")),
            Phase::InsufficientData(DataShortfall::NoIntervals)
        );
    }

    #[tokio::test]
    async fn adding_periods_recomputes() {
        let mut tracker = empty_tracker().await;
        tracker.add_period(day("2024-01-01"), day("2024-01-05")).await.unwrap();
        assert_eq!(
            tracker.prediction().next_period_start_date,
            Some(day("2024-01-29"))
        );

        tracker.add_period(day("2024-01-31"), day("2024-02-04")).await.unwrap();
        assert_eq!(tracker.prediction().average_cycle_length, 30);
        assert_eq!(
            tracker.prediction().next_period_start_date,
            Some(day("2024-03-01"))
        );
    }

    #[tokio::test]
    async fn overlap_is_rejected_and_not_saved() {
        let mut tracker = empty_tracker().await;
        tracker.add_period(day("2024-01-01"), day("2024-01-05")).await.unwrap();
        let before = tracker.prediction().clone();

        let err = tracker
            .add_period(day("2024-01-03"), day("2024-01-07"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TrackerError::Core(CoreError::OverlappingInterval { .. })
        ));
        assert_eq!(tracker.periods().len(), 1);
        assert_eq!(tracker.prediction(), &before);

        let storage = tracker.into_storage();
        assert_eq!(storage.load_periods().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn reversed_range_is_rejected() {
        let mut tracker = empty_tracker().await;
        let err = tracker
            .add_period(day("2024-01-05"), day("2024-01-01"))
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::Core(CoreError::InvalidRange { .. })));
    }

    #[tokio::test]
    async fn delete_then_recreate_is_an_edit() {
        let mut tracker = empty_tracker().await;
        let original = tracker.add_period(day("2024-01-01"), day("2024-01-05")).await.unwrap();
        tracker.delete_period(original.id()).await.unwrap();
        assert_eq!(tracker.prediction().next_period_start_date, None);

        let edited = tracker.add_period(day("2024-01-02"), day("2024-01-06")).await.unwrap();
        assert_ne!(edited.id(), original.id());
        assert_eq!(
            tracker.prediction().next_period_start_date,
            Some(day("2024-01-30"))
        );
    }

    #[tokio::test]
    async fn moods_upsert_and_persist() {
        let mut tracker = empty_tracker().await;
        tracker.set_mood(day("2024-01-03"), "😊", None).await.unwrap();
        tracker
            .set_mood(day("2024-01-03"), "😌", Some("after yoga".into()))
            .await
            .unwrap();

        assert_eq!(tracker.moods().len(), 1);
        assert_eq!(tracker.mood_on(day("2024-01-03")).unwrap().mood, "😌");

        let storage = tracker.into_storage();
        let saved = storage.load_moods().await.unwrap();
        assert_eq!(saved[0].note.as_deref(), Some("after yoga"));
    }

    #[tokio::test]
    async fn failed_add_leaves_state_untouched() {
        let mut tracker = full_disk_tracker().await;
        let before = tracker.prediction().clone();

        let err = tracker
            .add_period(day("2024-01-29"), day("2024-02-02"))
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::Storage(StorageError::Io(_))));
        assert_eq!(tracker.periods().len(), 1);
        assert_eq!(tracker.prediction(), &before);
    }

    #[tokio::test]
    async fn failed_delete_restores_period() {
        let mut tracker = full_disk_tracker().await;
        let id = tracker.periods()[0].id();
        let before = tracker.prediction().clone();

        assert!(tracker.delete_period(id).await.is_err());
        assert_eq!(tracker.periods().len(), 1);
        assert_eq!(tracker.periods()[0].id(), id);
        assert_eq!(tracker.prediction(), &before);
    }

    #[tokio::test]
    async fn failed_mood_save_restores_journal() {
        let mut tracker = full_disk_tracker().await;

        assert!(tracker.set_mood(day("2024-01-04"), "😴", None).await.is_err());
        assert!(tracker.mood_on(day("2024-01-04")).is_none());

        assert!(tracker.set_mood(day("2024-01-03"), "😢", None).await.is_err());
        let kept = tracker.mood_on(day("2024-01-03")).unwrap();
        assert_eq!(kept.mood, "😊");
        assert_eq!(kept.note.as_deref(), Some("sunny"));
        assert_eq!(tracker.moods().len(), 1);
    }

    #[tokio::test]
    async fn load_rejects_out_of_range_config() {
        let config: CycleConfig =
            serde_json::from_str(r#"{"default_cycle_length": 1000000000}"#).unwrap();
        let result = CycleTracker::load(MemoryStorage::new(), config).await;
        assert!(matches!(
            result,
            Err(TrackerError::Core(CoreError::InvalidConfig(_)))
        ));
    }

    #[tokio::test]
    async fn load_rejects_invalid_config() {
        let config = CycleConfig {
            default_cycle_length: 0,
            ..Default::default()
        };
        let result = CycleTracker::load(MemoryStorage::new(), config).await;
        assert!(matches!(
            result,
            Err(TrackerError::Core(CoreError::InvalidConfig(_)))
        ));
    }

    #[tokio::test]
    async fn load_rejects_overlapping_snapshot() {
        let storage = MemoryStorage::with_periods(vec![
            PeriodInterval::parse("2024-01-01", "2024-01-05").unwrap(),
            PeriodInterval::parse("2024-01-05", "2024-01-08").unwrap(),
        ]);
        let result = CycleTracker::load(storage, CycleConfig::default()).await;
        assert!(matches!(
            result,
            Err(TrackerError::Core(CoreError::OverlappingInterval { .. }))
        ));
    }

    #[tokio::test]
    async fn grid_includes_moods() {
        let mut tracker = empty_tracker().await;
        tracker.add_period(day("2024-01-01"), day("2024-01-05")).await.unwrap();
        tracker.set_mood(day("2024-01-15"), "🚀", None).await.unwrap();
        let grid = tracker.month_grid(2024, 1, day("2024-01-15")).unwrap();
        let cell = grid.iter().find(|c| c.date == day("2024-01-15")).unwrap();
        assert!(cell.flags.is_ovulation_day);
        assert_eq!(cell.mood.as_deref(), Some("🚀"));
    }
}
