//! Ping command handler.
//!
//! Mentions the players of the next session of each listed game, then empties
//! the game's roster so the next round of sign-ups starts fresh. Only the first
//! `max_players` committed players are mentioned.

use log::info;

use crate::{
    commands::{
        BotIdentity, HandlerContext, HandlerError, InboundMessage, MessageHandler, Trigger,
        extraction::{GameResponder, extract_game_responses, mention_trigger, text_after_mention},
        responses::{format_no_game_specified, format_nobody_would_play, format_ping},
    },
    games::Game,
};

const KEYWORDS: &[&str] = &["ping", "p"];

pub struct PingHandler;

impl GameResponder for PingHandler {
    fn fragments(&self) -> &[&'static str] {
        KEYWORDS
    }

    fn responses_with_game(
        &self,
        _message: &InboundMessage,
        context: &mut HandlerContext,
        _game_name: &str,
        game: Option<&Game>,
    ) -> Result<Vec<String>, HandlerError> {
        let Some(game) = game else {
            return Ok(vec![format_no_game_specified()]);
        };

        let available_players = context.store.available_players(&game.name);
        if available_players.is_empty() {
            return Ok(vec![format_nobody_would_play(&game.name)]);
        }

        let players = game.get_players_for_next_game(&available_players);
        context.store.clear_game(&game.name);

        info!("pinging {} players for {}", players.len(), game.name);

        Ok(vec![format_ping(&players, &game.name)])
    }
}

impl MessageHandler for PingHandler {
    fn name(&self) -> &'static str {
        "ping"
    }

    fn trigger(&self, message: &InboundMessage, identity: &BotIdentity) -> Option<Trigger> {
        mention_trigger(KEYWORDS, message, identity)
    }

    fn get_all_responses(
        &self,
        message: &InboundMessage,
        context: &mut HandlerContext,
    ) -> Result<Vec<String>, HandlerError> {
        extract_game_responses(self, text_after_mention(message), message, context)
    }
}
