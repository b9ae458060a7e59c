//! JSON file storage implementation.
//!
//! Stores each collection as one pretty-printed JSON array under the storage
//! root: `periods.json` and `moods.json`. A missing file reads as an empty
//! collection; a malformed one is an error, so bad stored data never reaches
//! the estimator.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bloom_core::{MoodLog, PeriodInterval};
use tokio::fs;
use tracing::debug;

use super::{Result, Storage};

const PERIODS_FILE: &str = "periods.json";
const MOODS_FILE: &str = "moods.json";

/// File-based JSON storage backend.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Storage root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn periods_path(&self) -> PathBuf {
        self.root.join(PERIODS_FILE)
    }

    fn moods_path(&self) -> PathBuf {
        self.root.join(MOODS_FILE)
    }
}

#[async_trait]
impl Storage for JsonStorage {
    async fn load_periods(&self) -> Result<Vec<PeriodInterval>> {
        let periods: Vec<PeriodInterval> = read_json(&self.periods_path())
            .await?
            .unwrap_or_default();
        for period in &periods {
            period.validate()?;
        }
        debug!("Loaded {} periods from {}", periods.len(), self.root.display());
        Ok(periods)
    }

    async fn save_periods(&mut self, periods: &[PeriodInterval]) -> Result<()> {
        write_json(&self.periods_path(), &periods).await?;
        debug!("Saved {} periods", periods.len());
        Ok(())
    }

    async fn load_moods(&self) -> Result<Vec<MoodLog>> {
        let moods: Vec<MoodLog> = read_json(&self.moods_path()).await?.unwrap_or_default();
        debug!("Loaded {} mood logs from {}", moods.len(), self.root.display());
        Ok(moods)
    }

    async fn save_moods(&mut self, moods: &[MoodLog]) -> Result<()> {
        write_json(&self.moods_path(), &moods).await?;
        debug!("Saved {} mood logs", moods.len());
        Ok(())
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json.as_bytes()).await?;
    Ok(())
}
