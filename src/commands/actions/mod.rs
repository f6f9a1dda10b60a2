//! Command handlers.
//!
//! One [`MessageHandler`](crate::commands::MessageHandler) per command shape.
//! Handlers never touch records directly: every roster change goes through the
//! [`RosterStore`](crate::roster::RosterStore) of the handler context.
//!
//! # Available Handlers
//!
//! - [`WouldPlayHandler`] - Sign up for games
//! - [`SameHandler`] - Join the last proposal
//! - [`StatusHandler`] - Show rosters and readiness
//! - [`ClearHandler`] - Empty a game's roster
//! - [`CancelHandler`] - Withdraw from every game
//! - [`PingHandler`] - Mention the players of the next session
//! - [`AccidentalRoleMentionHandler`] - Warn about mentioning the role
//! - [`QueryGamesHandler`] - List known games
//! - [`QueryPropertyHandler`] - Show a game attribute

mod cancel;
mod clear;
mod ping;
mod query;
mod role_mention;
mod same;
mod status;
mod would_play;

pub use crate::commands::actions::{
    cancel::CancelHandler, clear::ClearHandler, ping::PingHandler,
    query::{QueryGamesHandler, QueryPropertyHandler},
    role_mention::AccidentalRoleMentionHandler, same::SameHandler, status::StatusHandler,
    would_play::WouldPlayHandler,
};
