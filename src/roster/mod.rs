//! Roster of players willing to play each game.
//!
//! - [`Player`] and [`WouldPlay`]: a chat user and their timestamped intent to play
//! - [`RosterStore`]: the contract handlers use to read and change the roster
//! - [`RosterController`]: the in-memory store used by the bot
//! - [`RosterLoader`]: loads and saves records to disk
//!
//! # Example Usage
//!
//! ```no_run
//! # async fn example() {
//! let loader = RosterLoader::new("roster.json".to_string());
//! let mut controller = RosterController::new(loader.load().await);
//!
//! let alice = Player::new("1", "Alice");
//! controller.record_would_play(&alice, "Chess", Utc::now());
//!
//! loader.persist_records(controller.records()).await;
//! # }
//! ```

mod roster_controller;
mod roster_loader;
mod roster_store;
mod would_play;

pub use crate::roster::roster_controller::RosterController;
pub use crate::roster::roster_loader::RosterLoader;
#[cfg(test)]
pub use crate::roster::roster_store::MockRosterStore;
pub use crate::roster::roster_store::RosterStore;
pub use crate::roster::would_play::{Player, WouldPlay};
