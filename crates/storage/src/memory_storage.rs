//! In-memory storage implementation.

use async_trait::async_trait;
use bloom_core::{MoodLog, PeriodInterval};

use super::{Result, Storage};

/// Storage that keeps both collections in memory.
///
/// Useful for tests and for embedding the engine without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    periods: Vec<PeriodInterval>,
    moods: Vec<MoodLog>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-seeded with periods.
    pub fn with_periods(periods: Vec<PeriodInterval>) -> Self {
        Self {
            periods,
            moods: Vec::new(),
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load_periods(&self) -> Result<Vec<PeriodInterval>> {
        Ok(self.periods.clone())
    }

    async fn save_periods(&mut self, periods: &[PeriodInterval]) -> Result<()> {
        self.periods = periods.to_vec();
        Ok(())
    }

    async fn load_moods(&self) -> Result<Vec<MoodLog>> {
        Ok(self.moods.clone())
    }

    async fn save_moods(&mut self, moods: &[MoodLog]) -> Result<()> {
        self.moods = moods.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_core::Day;

    #[tokio::test]
    async fn save_then_load() {
        let mut storage = MemoryStorage::new();
        assert!(storage.load_periods().await.unwrap().is_empty());

        let period = PeriodInterval::parse("2024-01-01", "2024-01-05").unwrap();
        storage.save_periods(std::slice::from_ref(&period)).await.unwrap();
        assert_eq!(storage.load_periods().await.unwrap(), vec![period]);

        let mood = MoodLog::new(Day::parse("2024-01-02").unwrap(), "😌", None);
        storage.save_moods(std::slice::from_ref(&mood)).await.unwrap();
        assert_eq!(storage.load_moods().await.unwrap(), vec![mood]);
    }
}
