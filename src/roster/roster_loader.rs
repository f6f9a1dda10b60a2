//! Roster persistence layer for loading and saving would-play records.
//!
//! This module provides the [`RosterLoader`] so that sign-ups survive bot
//! restarts. Records are serialized to JSON and stored in a single file.

use log::{error, info, warn};
use tokio::fs;

use crate::roster::WouldPlay;

/// Handles loading and persisting would-play records to disk.
///
/// Loading never fails: a missing or corrupted file yields an empty roster so
/// the bot can always start.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// let loader = RosterLoader::new("roster.json".to_string());
///
/// let records = loader.load().await;
/// loader.persist_records(&records).await;
/// # }
/// ```
#[derive(Clone)]
pub struct RosterLoader {
    /// Path to the JSON file where records are stored.
    path: String,
}

impl RosterLoader {
    /// Creates a new `RosterLoader` for the specified file path.
    pub fn new(path: String) -> Self {
        RosterLoader { path }
    }

    /// Loads records from disk.
    ///
    /// # Error Handling
    ///
    /// - If the file doesn't exist: logs a warning and returns no record
    /// - If deserialization fails: logs an error and returns no record
    pub async fn load(&self) -> Vec<WouldPlay> {
        let Ok(serialized_records) = fs::read_to_string(&self.path).await else {
            warn!("no persisted roster found, starting with an empty roster");
            return Vec::new();
        };

        let records: Vec<WouldPlay> = match serde_json::from_str(&serialized_records) {
            Ok(records) => records,
            Err(e) => {
                error!(
                    "failed to deserialize persisted roster, starting with an empty roster: {}",
                    e
                );
                return Vec::new();
            }
        };

        info!("loaded {} persisted would plays", records.len());

        records
    }

    /// Persists the records to disk.
    ///
    /// Errors are logged but not propagated, the bot keeps running with its
    /// in-memory roster.
    pub async fn persist_records(&self, records: &[WouldPlay]) {
        let serialized_records = match serde_json::to_string(records) {
            Ok(serialized) => serialized,
            Err(e) => {
                error!("failed to serialize roster: {}", e);
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, &serialized_records).await {
            error!("failed to persist roster: {}", e);
            return;
        }

        info!("persisted {} would plays", records.len());
    }
}
