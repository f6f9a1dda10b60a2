//! Games the bot can gather players for.
//!
//! - [`Game`]: a catalog entry with its aliases and readiness rules
//! - [`GameCatalog`]: lookup of games by canonical name or alias

mod catalog;
mod game;

pub use crate::games::catalog::{CatalogError, GameCatalog};
pub use crate::games::game::Game;
