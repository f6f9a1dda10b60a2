//! Shared builders for command tests.

use chrono::{DateTime, Utc};

use crate::{
    commands::{BotIdentity, InboundMessage},
    games::{Game, GameCatalog},
    roster::Player,
};

pub const BOT_ID: &str = "1000";
pub const ROLE_PHRASE: &str = "Play Register";

/// Chess (2 players), Among Us (4 to 5 players) and Go (2 players or more).
pub fn create_test_catalog() -> GameCatalog {
    GameCatalog::new(vec![
        Game::new("Chess", &["chess", "échecs"], 2, Some(2)),
        Game::new("Among Us", &["among", "amogus"], 4, Some(5)),
        Game::new("Go", &["igo", "weiqi"], 2, None),
    ])
    .unwrap()
}

pub fn create_test_identity() -> BotIdentity {
    BotIdentity {
        client_id: BOT_ID.to_string(),
        role_mention_phrase: ROLE_PHRASE.to_string(),
    }
}

pub fn at(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000 + seconds, 0).unwrap()
}

pub fn alice() -> Player {
    Player::new("1", "Alice")
}

pub fn bob() -> Player {
    Player::new("2", "Bob")
}

pub fn carol() -> Player {
    Player::new("3", "Carol")
}

/// A message from Alice received at `at(100)`.
pub fn create_test_message(content: &str) -> InboundMessage {
    create_test_message_from(alice(), content, at(100))
}

pub fn create_test_message_from(
    author: Player,
    content: &str,
    received_at: DateTime<Utc>,
) -> InboundMessage {
    InboundMessage {
        content: content.to_string(),
        clean_content: content.to_string(),
        author,
        received_at,
    }
}

/// Mentions the bot with `command`, as the platform would deliver it.
pub fn create_test_mention(command: &str) -> InboundMessage {
    create_test_message(&format!("<@!{}> {}", BOT_ID, command))
}
