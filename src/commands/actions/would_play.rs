//! "I'd play" sign-up handler.
//!
//! Records that the author would play every game listed after the fragment,
//! e.g. `I'd play chess/go`. Users type this fast, so common typos and curly
//! apostrophes are accepted.

use log::debug;

use crate::{
    commands::{
        BotIdentity, HandlerContext, HandlerError, InboundMessage, MessageHandler, Trigger,
        extraction::{
            GameResponder, content_trigger, extract_game_responses, get_any_ready_messages,
        },
        responses::{format_unknown_game, format_would_play},
    },
    games::Game,
};

const FRAGMENTS: &[&str] = &[
    "I'd play", "id play", "I'd paly", "id paly", "I’d play", "I’d paly", "I’dplay",
    "I’dpaly",
];

pub struct WouldPlayHandler;

impl GameResponder for WouldPlayHandler {
    fn fragments(&self) -> &[&'static str] {
        FRAGMENTS
    }

    fn responses_with_game(
        &self,
        message: &InboundMessage,
        context: &mut HandlerContext,
        game_name: &str,
        game: Option<&Game>,
    ) -> Result<Vec<String>, HandlerError> {
        let Some(game) = game else {
            debug!("unknown game {}", game_name);
            return Ok(vec![format_unknown_game(game_name)]);
        };

        let would_play = context
            .store
            .record_would_play(&message.author, &game.name, message.received_at);
        let count = context.store.available_players(&game.name).len();

        let mut responses = vec![format_would_play(&would_play.player, &game.name, count)];
        responses.extend(get_any_ready_messages(context, &game.name));

        Ok(responses)
    }
}

impl MessageHandler for WouldPlayHandler {
    fn name(&self) -> &'static str {
        "would play"
    }

    fn trigger(&self, message: &InboundMessage, _identity: &BotIdentity) -> Option<Trigger> {
        content_trigger(FRAGMENTS, message)
    }

    fn get_all_responses(
        &self,
        message: &InboundMessage,
        context: &mut HandlerContext,
    ) -> Result<Vec<String>, HandlerError> {
        extract_game_responses(self, &message.content, message, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        commands::fixtures::{
            alice, at, bob, create_test_catalog, create_test_identity, create_test_message,
            create_test_message_from,
        },
        roster::{MockRosterStore, RosterController, RosterStore, WouldPlay},
    };

    fn handle(store: &mut dyn RosterStore, message: &InboundMessage) -> Vec<String> {
        let catalog = create_test_catalog();
        let mut context = HandlerContext {
            catalog: &catalog,
            store,
        };

        WouldPlayHandler
            .get_all_responses(message, &mut context)
            .unwrap()
    }

    #[test]
    fn test_should_handle_variants() {
        let identity = create_test_identity();

        for content in ["I'd play chess", "id play chess", "I’dpaly chess", "ID PALY chess"] {
            assert!(
                WouldPlayHandler.should_handle(&create_test_message(content), &identity),
                "{}",
                content
            );
        }
        assert!(
            !WouldPlayHandler.should_handle(&create_test_message("we'd play chess"), &identity)
        );
    }

    #[test]
    fn test_would_play_single_game() {
        let mut store = RosterController::default();

        let responses = handle(&mut store, &create_test_message("I'd play chess"));

        assert_eq!(responses, vec!["Alice would play Chess (that's 1)"]);
        assert_eq!(store.available_players("Chess"), vec![alice()]);
    }

    #[test]
    fn test_would_play_reaches_readiness() {
        let mut store = RosterController::default();
        store.record_would_play(&bob(), "Chess", at(0));

        let responses = handle(&mut store, &create_test_message("I'd play chess"));

        assert_eq!(
            responses,
            vec![
                "Alice would play Chess (that's 2)",
                "Chess is ready to play! (2 players)"
            ]
        );
    }

    #[test]
    fn test_would_play_several_games() {
        let mut store = RosterController::default();

        let responses = handle(&mut store, &create_test_message("I'd play chess/go"));

        assert_eq!(
            responses,
            vec![
                "Alice would play Chess (that's 1)",
                "Alice would play Go (that's 1)"
            ]
        );
        assert_eq!(store.records().len(), 2);
        assert!(store.records().iter().all(|record| record.created_at == at(100)));
    }

    #[test]
    fn test_would_play_unknown_game() {
        let mut store = RosterController::default();

        let responses = handle(&mut store, &create_test_message("I'd play tetris/chess"));

        assert_eq!(
            responses,
            vec![
                "I don't know a game called 'tetris'",
                "Alice would play Chess (that's 1)"
            ]
        );
    }

    #[test]
    fn test_would_play_without_game() {
        let mut store = MockRosterStore::new();
        store.expect_record_would_play().never();

        let responses = handle(&mut store, &create_test_message("I'd play"));

        assert!(responses.is_empty());
    }

    #[test]
    fn test_would_play_records_canonical_name_and_receive_time() {
        let mut store = MockRosterStore::new();
        store
            .expect_record_would_play()
            .withf(|player, game, created_at| {
                *player == bob() && game == "Among Us" && *created_at == at(7)
            })
            .times(1)
            .returning(|player, game, created_at| WouldPlay {
                player: player.clone(),
                game: game.to_string(),
                created_at,
            });
        store
            .expect_available_players()
            .returning(|_| vec![bob()]);

        let message = create_test_message_from(bob(), "I'd play AMOGUS", at(7));
        let responses = handle(&mut store, &message);

        assert_eq!(responses, vec!["Bob would play Among Us (that's 1)"]);
    }
}
