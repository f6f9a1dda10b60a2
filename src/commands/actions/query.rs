//! Catalog query handlers.
//!
//! - `@bot query games` lists every known game
//! - `@bot query <attribute> <game>` shows one attribute of a game
//!
//! Both share the `query` prefix; the dispatcher runs the most specific one.

use std::str::FromStr;

use log::debug;

use crate::{
    commands::{
        BotIdentity, HandlerContext, HandlerError, InboundMessage, MessageHandler, Trigger,
        extraction::{mention_trigger, text_after_mention},
        responses::{format_game_names, format_property},
        text::split_string_by_keywords,
    },
    games::Game,
};

const QUERY_GAMES_KEYWORDS: &[&str] = &["query games"];
const QUERY_PROPERTY_KEYWORDS: &[&str] = &["query"];
const QUERY_PROPERTY_USAGE: &str =
    "query <name|aliases|min_players|max_players|players> <game>";

/// Game attributes that can be queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameAttribute {
    Name,
    Aliases,
    MinPlayers,
    MaxPlayers,
    Players,
}

impl FromStr for GameAttribute {
    type Err = HandlerError;

    fn from_str(attribute: &str) -> Result<Self, Self::Err> {
        match attribute {
            "name" => Ok(GameAttribute::Name),
            "aliases" => Ok(GameAttribute::Aliases),
            "min_players" => Ok(GameAttribute::MinPlayers),
            "max_players" => Ok(GameAttribute::MaxPlayers),
            "players" => Ok(GameAttribute::Players),
            _ => Err(HandlerError::MalformedCommand(QUERY_PROPERTY_USAGE)),
        }
    }
}

impl GameAttribute {
    /// Renders the attribute of `game`.
    fn render(self, game: &Game, context: &HandlerContext) -> String {
        match self {
            GameAttribute::Name => game.name.clone(),
            GameAttribute::Aliases => game.aliases.join(", "),
            GameAttribute::MinPlayers => game.min_players.to_string(),
            GameAttribute::MaxPlayers => match game.max_players {
                Some(max_players) => max_players.to_string(),
                None => "none".to_owned(),
            },
            GameAttribute::Players => context
                .store
                .available_players(&game.name)
                .len()
                .to_string(),
        }
    }
}

/// Lists every game of the catalog, one per line.
pub struct QueryGamesHandler;

impl MessageHandler for QueryGamesHandler {
    fn name(&self) -> &'static str {
        "query games"
    }

    fn trigger(&self, message: &InboundMessage, identity: &BotIdentity) -> Option<Trigger> {
        mention_trigger(QUERY_GAMES_KEYWORDS, message, identity)
    }

    fn get_all_responses(
        &self,
        _message: &InboundMessage,
        context: &mut HandlerContext,
    ) -> Result<Vec<String>, HandlerError> {
        let names = context.catalog.games().map(|game| game.name.as_str());

        Ok(vec![format_game_names(names)])
    }
}

/// Shows one attribute of a game, e.g. `query aliases among us`.
pub struct QueryPropertyHandler;

impl MessageHandler for QueryPropertyHandler {
    fn name(&self) -> &'static str {
        "query property"
    }

    fn trigger(&self, message: &InboundMessage, identity: &BotIdentity) -> Option<Trigger> {
        mention_trigger(QUERY_PROPERTY_KEYWORDS, message, identity)
    }

    fn get_all_responses(
        &self,
        message: &InboundMessage,
        context: &mut HandlerContext,
    ) -> Result<Vec<String>, HandlerError> {
        let (_, remainder) =
            split_string_by_keywords(QUERY_PROPERTY_KEYWORDS, text_after_mention(message));

        let Some((attribute_name, game_name)) = remainder.split_once(' ') else {
            return Err(HandlerError::MalformedCommand(QUERY_PROPERTY_USAGE));
        };
        let game_name = game_name.trim();
        if game_name.is_empty() {
            return Err(HandlerError::MalformedCommand(QUERY_PROPERTY_USAGE));
        }

        let attribute: GameAttribute = attribute_name.parse()?;
        let game = context
            .catalog
            .lookup_game_by_name_or_alias(game_name)
            .ok_or_else(|| HandlerError::UnknownGame(game_name.to_owned()))?;

        debug!("querying {:?} of {}", attribute, game.name);

        Ok(vec![format_property(
            attribute_name,
            &attribute.render(game, context),
        )])
    }
}
