//! Applicability and game extraction strategies shared by handlers.
//!
//! Handlers compose these functions instead of inheriting behavior:
//! - [`content_trigger`] for messages starting with a fixed fragment
//! - [`mention_trigger`] for messages addressed to the bot with a keyword
//! - [`GameResponder`] and [`extract_game_responses`] for commands taking
//!   one or more game names

use log::debug;

use crate::{
    commands::{
        BotIdentity, HandlerContext, HandlerError, InboundMessage, Trigger,
        text::{
            extract_remainder_after_fragments, find_starting_fragment, is_bot_mention,
            split_by_first_mention, split_game_names, strip_prefix_ignore_case,
        },
    },
    games::Game,
};

/// Applies when the content starts with one of `fragments`, ignoring case.
pub fn content_trigger(fragments: &[&'static str], message: &InboundMessage) -> Option<Trigger> {
    find_starting_fragment(fragments, &message.content).map(Trigger::Content)
}

/// Applies when the content starts with a mention of the bot followed by one
/// of `keywords`, ignoring case.
///
/// The longest matching keyword is reported so the dispatcher can prefer the
/// most specific command.
pub fn mention_trigger(
    keywords: &[&'static str],
    message: &InboundMessage,
    identity: &BotIdentity,
) -> Option<Trigger> {
    let (mention, remainder) = split_by_first_mention(&message.content);
    if !is_bot_mention(mention, &identity.client_id) {
        return None;
    }

    keywords
        .iter()
        .filter(|keyword| strip_prefix_ignore_case(remainder, keyword).is_some())
        .max_by_key(|keyword| keyword.chars().count())
        .copied()
        .map(Trigger::Mention)
}

/// Text following the bot mention, or the whole content without a mention.
pub fn text_after_mention(message: &InboundMessage) -> &str {
    split_by_first_mention(&message.content).1
}

/// A command taking a `/`-separated list of game names.
pub trait GameResponder {
    /// Fragments or keywords preceding the game list.
    fn fragments(&self) -> &[&'static str];

    /// Replies for one candidate name, `game` being its catalog entry if any.
    fn responses_with_game(
        &self,
        message: &InboundMessage,
        context: &mut HandlerContext,
        game_name: &str,
        game: Option<&Game>,
    ) -> Result<Vec<String>, HandlerError>;

    /// Replies when no game name was given.
    fn responses_without_game(
        &self,
        _message: &InboundMessage,
        _context: &mut HandlerContext,
    ) -> Result<Vec<String>, HandlerError> {
        Ok(Vec::new())
    }
}

/// Runs `responder` once per game named in `text`, concatenating replies.
///
/// `text` starts with one of the responder's fragments. Blank candidates are
/// skipped; when none is left the no-game replies are returned instead.
pub fn extract_game_responses<R: GameResponder + ?Sized>(
    responder: &R,
    text: &str,
    message: &InboundMessage,
    context: &mut HandlerContext,
) -> Result<Vec<String>, HandlerError> {
    let remainder = extract_remainder_after_fragments(responder.fragments(), text);
    let game_names = split_game_names(remainder);

    if game_names.is_empty() {
        return responder.responses_without_game(message, context);
    }

    debug!("extracted game names {:?}", game_names);

    let catalog = context.catalog;
    let mut responses = Vec::new();
    for game_name in game_names {
        let game = catalog.lookup_game_by_name_or_alias(game_name);
        responses.extend(responder.responses_with_game(message, context, game_name, game)?);
    }

    Ok(responses)
}

/// Readiness announcements of the game named `game_name`.
///
/// Games no longer in the catalog, such as ones only known from a persisted
/// roster, never announce anything.
pub fn get_any_ready_messages(context: &HandlerContext, game_name: &str) -> Vec<String> {
    match context.catalog.lookup_game_by_name_or_alias(game_name) {
        Some(game) => game.get_ready_messages(context.store.available_players(&game.name).len()),
        None => Vec::new(),
    }
}
