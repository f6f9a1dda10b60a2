//! Catalog of the games known by the bot.
//!
//! The catalog is built once at startup from the configuration and is
//! read-only afterwards. It resolves user-typed names to canonical games.

use log::debug;
use thiserror::Error;

use crate::games::Game;

/// Errors raised while building a [`GameCatalog`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no game at all.
    #[error("the game catalog is empty")]
    Empty,
    /// A game needs at least one player to ever be ready.
    #[error("game '{0}' must require at least one player")]
    NoPlayerRequired(String),
    /// A session could never gather enough players.
    #[error("game '{name}' allows {max_players} players but requires {min_players}")]
    MaxPlayersBelowMin {
        /// Game name
        name: String,
        /// Players required to be ready
        min_players: usize,
        /// Players pinged for one session
        max_players: usize,
    },
    /// Two catalog entries share a canonical name.
    #[error("game '{0}' is defined twice")]
    DuplicateGame(String),
    /// The same name or alias points to two different games.
    #[error("'{name}' refers to both '{first}' and '{second}'")]
    AmbiguousName {
        /// The duplicated name or alias
        name: String,
        /// Game registered first with this name
        first: String,
        /// Game registered second with this name
        second: String,
    },
}

/// Read-only registry of games, in configuration order.
///
/// # Examples
///
/// ```
/// let catalog = GameCatalog::new(vec![Game::new("Chess", &["chess"], 2, Some(2))])?;
/// assert_eq!(catalog.lookup_game_by_name_or_alias("CHESS").unwrap().name, "Chess");
/// ```
#[derive(Debug, Clone)]
pub struct GameCatalog {
    games: Vec<Game>,
}

impl GameCatalog {
    /// Builds a catalog, rejecting names or aliases shared by two games and
    /// player bounds that can never be satisfied.
    pub fn new(games: Vec<Game>) -> Result<Self, CatalogError> {
        if games.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: Vec<(String, &str)> = Vec::new();
        for (index, game) in games.iter().enumerate() {
            if game.min_players == 0 {
                return Err(CatalogError::NoPlayerRequired(game.name.clone()));
            }
            if let Some(max_players) = game.max_players
                && max_players < game.min_players
            {
                return Err(CatalogError::MaxPlayersBelowMin {
                    name: game.name.clone(),
                    min_players: game.min_players,
                    max_players,
                });
            }
            if games[..index].iter().any(|previous| previous.name == game.name) {
                return Err(CatalogError::DuplicateGame(game.name.clone()));
            }

            for name in std::iter::once(&game.name).chain(game.aliases.iter()) {
                let key = name.trim().to_lowercase();
                match seen.iter().find(|(seen_key, _)| *seen_key == key) {
                    Some((_, owner)) if *owner != game.name => {
                        return Err(CatalogError::AmbiguousName {
                            name: name.clone(),
                            first: (*owner).to_owned(),
                            second: game.name.clone(),
                        });
                    }
                    Some(_) => {}
                    None => seen.push((key, game.name.as_str())),
                }
            }
        }

        debug!("game catalog {:?}", games);

        Ok(GameCatalog { games })
    }

    /// Iterates over every game, in configuration order.
    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.games.iter()
    }

    /// Resolves a user-typed name to a game.
    ///
    /// Canonical names are checked before aliases; case and surrounding
    /// whitespace are ignored. Unknown names yield `None`.
    pub fn lookup_game_by_name_or_alias(&self, name: &str) -> Option<&Game> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        self.games
            .iter()
            .find(|game| game.is_named(name))
            .or_else(|| self.games.iter().find(|game| game.has_alias(name)))
    }
}
