//! Game definitions and readiness rules.
//!
//! A [`Game`] is static catalog data: its canonical name, the aliases users may
//! type instead, and how many players make a session. The players currently
//! committed to a game are owned by the roster store and handed to the
//! readiness functions below.

use std::fmt;

use serde::Deserialize;

use crate::roster::Player;

/// A game players can sign up for.
///
/// # Examples
///
/// ```yaml
/// games:
///   - name: Chess
///     aliases: [chess]
///     min_players: 2
///     max_players: 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Game {
    /// Canonical name, used in every bot reply
    pub name: String,
    /// Alternative names accepted when looking the game up
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Number of committed players needed before the game is ready
    pub min_players: usize,
    /// Maximum number of players pinged for one session
    ///
    /// `None` pings everyone who signed up.
    #[serde(default)]
    pub max_players: Option<usize>,
}

impl Game {
    /// Creates a game from its catalog attributes.
    pub fn new(
        name: &str,
        aliases: &[&str],
        min_players: usize,
        max_players: Option<usize>,
    ) -> Self {
        Game {
            name: name.to_owned(),
            aliases: aliases.iter().map(|alias| (*alias).to_owned()).collect(),
            min_players,
            max_players,
        }
    }

    /// Whether `name` is this game's canonical name, ignoring case.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Whether `name` is one of this game's aliases, ignoring case.
    pub fn has_alias(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.aliases.iter().any(|alias| alias.to_lowercase() == name)
    }

    /// Whether enough players are committed to start a session.
    pub fn is_ready_to_play(&self, available_players: usize) -> bool {
        available_players >= self.min_players
    }

    /// Announcements sent when the game is ready to play.
    ///
    /// Returns no message while the game is not ready, so callers can invoke it
    /// after every roster change.
    pub fn get_ready_messages(&self, available_players: usize) -> Vec<String> {
        if !self.is_ready_to_play(available_players) {
            return Vec::new();
        }

        let mut messages = vec![format!(
            "{} is ready to play! ({} players)",
            self.name, available_players
        )];

        if let Some(max_players) = self.max_players
            && available_players > max_players
        {
            messages.push(format!("Only the first {} will be pinged.", max_players));
        }

        messages
    }

    /// Selects the players of the next session, in commitment order.
    pub fn get_players_for_next_game(&self, available_players: &[Player]) -> Vec<Player> {
        let count = self.max_players.unwrap_or(available_players.len());

        available_players.iter().take(count).cloned().collect()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
