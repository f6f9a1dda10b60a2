//! Configuration file structures for the bot.
//!
//! The configuration is a YAML file merged with environment variables. It is
//! split into three sections: the Discord account, the roster persistence and
//! the game catalog.
//!
//! # Configuration File Format
//!
//! ```yaml
//! discord:
//!   # Bot token from the Discord developer portal
//!   token: "secret-token"
//!   # Application id of the bot user, used to detect mentions
//!   client_id: "123456789012345678"
//!   # Name of the role sharing the bot's name (optional)
//!   role_mention_phrase: "Play Register"
//!
//! roster:
//!   # Seconds between two roster saves (optional)
//!   persistence_interval: 60
//!
//! games:
//!   - name: Among Us
//!     aliases: [among, amogus]
//!     min_players: 5
//!     max_players: 10
//!   - name: Chess
//!     min_players: 2
//! ```
//!
//! # Environment Variable Overrides
//!
//! Any value can be overridden with a `PLAY_REGISTER_` prefixed variable,
//! `__` separating nested keys:
//!
//! ```bash
//! export PLAY_REGISTER_DISCORD__TOKEN="secret-token"
//! export PLAY_REGISTER_ROSTER__PERSISTENCE_INTERVAL=30
//! ```
//!
//! The bare `CLIENT_ID` variable also sets `discord.client_id`.

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Deserializer};

use crate::games::Game;

/// Prefix of the environment variables overriding the configuration.
const ENV_PREFIX: &str = "PLAY_REGISTER_";
/// Default name of the role sharing the bot's name.
const DEFAULT_ROLE_MENTION_PHRASE: &str = "Play Register";
/// Default interval in seconds between two roster saves.
const DEFAULT_PERSISTENCE_INTERVAL: u64 = 60; // 1 minute

#[derive(Debug, Deserialize)]
pub struct Config {
    pub discord: Discord,

    #[serde(default)]
    pub roster: Roster,

    pub games: Vec<Game>,
}

#[derive(Debug, Deserialize)]
pub struct Discord {
    pub token: String,

    /// Environment values that look like numbers are parsed as numbers
    #[serde(deserialize_with = "deserialize_id")]
    pub client_id: String,

    #[serde(default = "default_role_mention_phrase")]
    pub role_mention_phrase: String,
}

#[derive(Debug, Deserialize)]
pub struct Roster {
    #[serde(default = "default_persistence_interval")]
    pub persistence_interval: u64,
}

impl Default for Roster {
    fn default() -> Self {
        Roster {
            persistence_interval: DEFAULT_PERSISTENCE_INTERVAL,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Id {
    Text(String),
    Number(u64),
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Id::deserialize(deserializer)? {
        Id::Text(id) => id,
        Id::Number(id) => id.to_string(),
    })
}

fn default_role_mention_phrase() -> String {
    DEFAULT_ROLE_MENTION_PHRASE.to_owned()
}

fn default_persistence_interval() -> u64 {
    DEFAULT_PERSISTENCE_INTERVAL
}

impl Config {
    /// Loads the configuration from the YAML file at `path` and the
    /// environment.
    ///
    /// Environment variables take precedence over the file.
    pub fn load(path: &str) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(
                Env::raw()
                    .only(&["CLIENT_ID"])
                    .map(|_| "discord.client_id".into()),
            )
            .extract()
    }
}
