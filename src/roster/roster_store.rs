//! Roster store contract.
//!
//! The roster store is the single authority on who signed up for what.
//! Handlers never touch records directly; every roster change goes through a
//! [`RosterStore`].

use chrono::{DateTime, Utc};
use mockall::automock;

use crate::roster::{Player, WouldPlay};

/// Records, queries and removes would-play records.
///
/// Games are identified by their canonical name. Calls complete synchronously
/// within the dispatch of one message.
#[automock]
pub trait RosterStore: Send {
    /// Records that `player` would play `game`, stamped with `at`.
    ///
    /// A player already committed to the game keeps a single roster entry.
    fn record_would_play(&mut self, player: &Player, game: &str, at: DateTime<Utc>) -> WouldPlay;

    /// Returns the most recent record for `game`.
    fn get_last_would_play(&self, game: &str) -> Option<WouldPlay>;

    /// Returns the most recent record across all games.
    fn get_last_would_play_any(&self) -> Option<WouldPlay>;

    /// Returns every record sharing the most recent timestamp, across games.
    fn get_last_would_plays_at_same_time(&self) -> Vec<WouldPlay>;

    /// Returns the distinct players committed to `game`, first commitment first.
    fn available_players(&self, game: &str) -> Vec<Player>;

    /// Removes every record of `game`.
    fn clear_game(&mut self, game: &str);

    /// Removes every record of `player`, whatever the game.
    fn cancel_would_plays(&mut self, player: &Player);
}
