//! Message interpretation and dispatch.
//!
//! This module turns free-form chat messages into bot replies. Each command
//! shape is a [`MessageHandler`]: it knows when it applies to a message and
//! which replies it produces. The [`Dispatcher`] asks every handler in a fixed
//! order and runs the ones that apply.
//!
//! # Architecture
//!
//! ```text
//! InboundMessage
//!      │
//!      ▼
//! ┌─────────────┐
//! │ Dispatcher  │  ← asks every handler for a trigger
//! └─────────────┘
//!      │
//!      ├── content triggered (all that apply)
//!      ├── role mention      (if it applies)
//!      └── mention triggered (most specific keyword only)
//!                 │
//!                 ▼
//!      ┌─────────────────────┐
//!      │ Handlers            │
//!      │  - WouldPlay        │
//!      │  - Same             │
//!      │  - Status           │
//!      │  - Clear            │
//!      │  - Cancel           │
//!      │  - Ping             │
//!      │  - RoleMention      │
//!      │  - QueryGames       │
//!      │  - QueryProperty    │
//!      └─────────────────────┘
//!                 │
//!                 ▼
//!          Vec<String> replies
//! ```
//!
//! # Commands
//!
//! | Message | Description |
//! |---------|-------------|
//! | `I'd play <game>[/<game>...]` | Sign up for one or more games |
//! | `same [to <game>]` | Sign up for what the last person signed up for |
//! | `@bot status` | List games with players |
//! | `@bot clear <game>` | Empty a game's roster |
//! | `@bot cancel` | Withdraw from every game |
//! | `@bot ping <game>` | Mention the players of the next session |
//! | `@bot query games` | List known games |
//! | `@bot query <attribute> <game>` | Show a game attribute |
//!
//! # Error Handling
//!
//! Handlers return a [`HandlerError`] when a command cannot be understood. The
//! dispatcher turns it into a reply for that handler only; the other handlers
//! still run.

use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{games::GameCatalog, roster::Player, roster::RosterStore};

mod actions;
mod dispatcher;
mod extraction;
#[cfg(test)]
mod fixtures;
mod responses;
mod text;

pub use crate::commands::dispatcher::Dispatcher;

/// A chat message received by the bot.
///
/// Immutable during dispatch.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    /// Raw content, mentions kept as `<@ID>` markup
    pub content: String,
    /// Content with mentions rendered as names
    pub clean_content: String,
    /// Sender of the message
    pub author: Player,
    /// Instant the message was received, stamped on every record it creates
    pub received_at: DateTime<Utc>,
}

/// How the bot is addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotIdentity {
    /// Platform id of the bot user
    pub client_id: String,
    /// Name of the role sharing the bot's name
    pub role_mention_phrase: String,
}

/// Everything a handler may read or change while producing its replies.
pub struct HandlerContext<'a> {
    /// Known games
    pub catalog: &'a GameCatalog,
    /// Roster, the only state handlers change
    pub store: &'a mut dyn RosterStore,
}

/// Errors returned by a handler which understood it was addressed but could
/// not process the command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandlerError {
    /// The command is missing parts or uses an unknown keyword.
    #[error("malformed command, usage: {0}")]
    MalformedCommand(&'static str),
    /// The game name matches nothing in the catalog.
    #[error("unknown game '{0}'")]
    UnknownGame(String),
}

/// Why a handler applies to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The content starts with the given fragment.
    Content(&'static str),
    /// The bot is mentioned, followed by the given keyword.
    Mention(&'static str),
    /// The role sharing the bot's name was mentioned.
    RoleMention,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Content(fragment) => write!(f, "fragment '{}'", fragment),
            Trigger::Mention(keyword) => write!(f, "mention keyword '{}'", keyword),
            Trigger::RoleMention => write!(f, "role mention"),
        }
    }
}

/// One command shape.
///
/// Handlers are stateless: applicability only depends on the message and the
/// bot identity, and every roster change goes through the context's store.
pub trait MessageHandler: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns why this handler applies to `message`, if it does.
    fn trigger(&self, message: &InboundMessage, identity: &BotIdentity) -> Option<Trigger>;

    /// Whether this handler applies to `message`.
    fn should_handle(&self, message: &InboundMessage, identity: &BotIdentity) -> bool {
        self.trigger(message, identity).is_some()
    }

    /// Produces the replies to `message`, in order.
    fn get_all_responses(
        &self,
        message: &InboundMessage,
        context: &mut HandlerContext,
    ) -> Result<Vec<String>, HandlerError>;
}
