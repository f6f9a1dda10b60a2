//! In-memory roster store.
//!
//! This module provides the [`RosterController`], the [`RosterStore`] used by
//! the bot. Records live in memory and are saved to disk by the bot's
//! persistence task through a [`RosterLoader`](crate::roster::RosterLoader).

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::roster::{Player, RosterStore, WouldPlay};

/// Keeps would-play records in insertion order.
///
/// # Examples
///
/// ```no_run
/// let mut controller = RosterController::new(Vec::new());
/// let alice = Player::new("1", "Alice");
/// controller.record_would_play(&alice, "Chess", Utc::now());
/// assert_eq!(controller.available_players("Chess").len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RosterController {
    /// Records, oldest first
    records: Vec<WouldPlay>,
}

impl RosterController {
    /// Creates a controller from previously persisted records.
    pub fn new(records: Vec<WouldPlay>) -> Self {
        let mut records = records;
        records.sort_by_key(|record| record.created_at);

        RosterController { records }
    }

    /// Returns the records, oldest first.
    pub fn records(&self) -> &[WouldPlay] {
        &self.records
    }
}

impl RosterStore for RosterController {
    fn record_would_play(&mut self, player: &Player, game: &str, at: DateTime<Utc>) -> WouldPlay {
        let would_play = WouldPlay {
            player: player.clone(),
            game: game.to_owned(),
            created_at: at,
        };

        // Keep records sorted even if the transport delivers out of order
        let index = self.records.partition_point(|record| record.created_at <= at);
        self.records.insert(index, would_play.clone());

        info!(
            "recorded that {} ({}) would play {}",
            player.display_name, player.id, game
        );

        would_play
    }

    fn get_last_would_play(&self, game: &str) -> Option<WouldPlay> {
        self.records
            .iter()
            .rev()
            .find(|record| record.game == game)
            .cloned()
    }

    fn get_last_would_play_any(&self) -> Option<WouldPlay> {
        self.records.last().cloned()
    }

    fn get_last_would_plays_at_same_time(&self) -> Vec<WouldPlay> {
        let Some(last) = self.records.last() else {
            return Vec::new();
        };

        let last_would_plays: Vec<WouldPlay> = self
            .records
            .iter()
            .filter(|record| record.created_at == last.created_at)
            .cloned()
            .collect();

        debug!("last would plays {:?}", last_would_plays);

        last_would_plays
    }

    fn available_players(&self, game: &str) -> Vec<Player> {
        let mut seen = HashSet::new();

        self.records
            .iter()
            .filter(|record| record.game == game)
            .filter(|record| seen.insert(record.player.clone()))
            .map(|record| record.player.clone())
            .collect()
    }

    fn clear_game(&mut self, game: &str) {
        self.records.retain(|record| record.game != game);
        info!("cleared roster of {}", game);
    }

    fn cancel_would_plays(&mut self, player: &Player) {
        self.records.retain(|record| record.player != *player);
        info!(
            "cancelled would plays of {} ({})",
            player.display_name, player.id
        );
    }
}
