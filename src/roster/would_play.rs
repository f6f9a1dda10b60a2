//! Players and their would-play records.
//!
//! A [`WouldPlay`] is the timestamped statement that a [`Player`] is willing to
//! play a game. Records are never mutated: newer records supersede older ones
//! and clear/cancel operations remove them.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chat user, owned by the messaging platform.
///
/// # Equality and Hashing
///
/// Two players are equal if they share the same platform `id`, whatever their
/// display name. Users can rename themselves between two messages.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    /// Platform user id
    pub id: String,
    /// Name displayed in bot replies
    pub display_name: String,
}

impl Player {
    /// Creates a player from its platform id and display name.
    pub fn new(id: &str, display_name: &str) -> Self {
        Player {
            id: id.to_owned(),
            display_name: display_name.to_owned(),
        }
    }

    /// Renders a mention notifying this player.
    pub fn mention(&self) -> String {
        format!("<@!{}>", self.id)
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A player's intent to play a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WouldPlay {
    /// Player willing to play
    pub player: Player,
    /// Canonical name of the game
    pub game: String,
    /// Receive time of the message that created the record
    ///
    /// Every record created by one message shares this instant.
    pub created_at: DateTime<Utc>,
}
