//! Clear command handler.
//!
//! Empties the roster of each game listed after the keyword, e.g.
//! `@bot clear chess/go`.

use crate::{
    commands::{
        BotIdentity, HandlerContext, HandlerError, InboundMessage, MessageHandler, Trigger,
        extraction::{GameResponder, extract_game_responses, mention_trigger, text_after_mention},
        responses::{format_cleared, format_no_game_specified},
    },
    games::Game,
};

const KEYWORDS: &[&str] = &["clear"];

pub struct ClearHandler;

impl GameResponder for ClearHandler {
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

        context.store.clear_game(&game.name);

        Ok(vec![format_cleared(&game.name)])
    }

    fn responses_without_game(
        &self,
        _message: &InboundMessage,
        _context: &mut HandlerContext,
    ) -> Result<Vec<String>, HandlerError> {
        Ok(vec![format_no_game_specified()])
    }
}

impl MessageHandler for ClearHandler {
    fn name(&self) -> &'static str {
        "clear"
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
