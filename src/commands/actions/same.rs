//! "Same" sign-up handler.
//!
//! Lets a user join whatever was proposed last. Two shapes are supported:
//! - `same to <game>`: join the last game proposal for that game
//! - `same`: join every game of the last proposal message

use log::debug;

use crate::{
    commands::{
        BotIdentity, HandlerContext, HandlerError, InboundMessage, MessageHandler, Trigger,
        extraction::{
            GameResponder, content_trigger, extract_game_responses, get_any_ready_messages,
        },
        responses::format_would_also_play,
    },
    games::Game,
};

const FRAGMENTS: &[&str] = &["same to", "same"];

pub struct SameHandler;

impl SameHandler {
    /// Records the author for `game` and returns the confirmation.
    fn join(&self, message: &InboundMessage, context: &mut HandlerContext, game: &str) -> String {
        let would_play = context
            .store
            .record_would_play(&message.author, game, message.received_at);
        let count = context.store.available_players(game).len();

        format_would_also_play(&would_play.player, game, count)
    }
}

impl GameResponder for SameHandler {
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
        let last_would_play = match game {
            Some(game) => context.store.get_last_would_play(&game.name),
            None => {
                debug!("unknown game {}, joining the last proposal", game_name);
                context.store.get_last_would_play_any()
            }
        };

        let Some(last_would_play) = last_would_play else {
            return Ok(Vec::new());
        };

        let mut responses = vec![self.join(message, context, &last_would_play.game)];
        responses.extend(get_any_ready_messages(context, &last_would_play.game));

        Ok(responses)
    }

    fn responses_without_game(
        &self,
        message: &InboundMessage,
        context: &mut HandlerContext,
    ) -> Result<Vec<String>, HandlerError> {
        let mut games: Vec<String> = Vec::new();
        for would_play in context.store.get_last_would_plays_at_same_time() {
            if !games.contains(&would_play.game) {
                games.push(would_play.game);
            }
        }

        let mut responses: Vec<String> = games
            .iter()
            .map(|game| self.join(message, context, game))
            .collect();

        for game in &games {
            responses.extend(get_any_ready_messages(context, game));
        }

        Ok(responses)
    }
}

impl MessageHandler for SameHandler {
    fn name(&self) -> &'static str {
        "same"
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
        commands::fixtures::{alice, at, bob, carol, create_test_catalog, create_test_message_from},
        roster::{MockRosterStore, RosterController, RosterStore},
    };

    fn handle(store: &mut dyn RosterStore, message: &InboundMessage) -> Vec<String> {
        let catalog = create_test_catalog();
        let mut context = HandlerContext {
            catalog: &catalog,
            store,
        };

        SameHandler.get_all_responses(message, &mut context).unwrap()
    }

    #[test]
    fn test_same_joins_last_message_games() {
        let mut store = RosterController::default();
        store.record_would_play(&carol(), "Go", at(0));
        store.record_would_play(&alice(), "Chess", at(10));
        store.record_would_play(&alice(), "Go", at(10));

        let responses = handle(&mut store, &create_test_message_from(bob(), "same", at(20)));

        assert_eq!(
            responses,
            vec![
                "Bob would also play Chess (that's 2)",
                "Bob would also play Go (that's 3)",
                "Chess is ready to play! (2 players)",
                "Go is ready to play! (3 players)",
            ]
        );
    }

    #[test]
    fn test_same_without_any_record() {
        let mut store = MockRosterStore::new();
        store
            .expect_get_last_would_plays_at_same_time()
            .returning(Vec::new);
        store.expect_record_would_play().never();

        let responses = handle(&mut store, &create_test_message_from(bob(), "same", at(20)));

        assert!(responses.is_empty());
    }

    #[test]
    fn test_same_to_game() {
        let mut store = RosterController::default();
        store.record_would_play(&alice(), "Go", at(0));
        store.record_would_play(&carol(), "Chess", at(10));

        let responses = handle(
            &mut store,
            &create_test_message_from(bob(), "same to go", at(20)),
        );

        assert_eq!(
            responses,
            vec!["Bob would also play Go (that's 2)", "Go is ready to play! (2 players)"]
        );
        assert_eq!(store.available_players("Chess"), vec![carol()]);
    }

    #[test]
    fn test_same_to_game_without_proposal() {
        let mut store = RosterController::default();
        store.record_would_play(&alice(), "Go", at(0));

        let responses = handle(
            &mut store,
            &create_test_message_from(bob(), "same to chess", at(20)),
        );

        assert!(responses.is_empty());
        assert!(store.available_players("Chess").is_empty());
    }

    #[test]
    fn test_same_to_unknown_game_joins_last_proposal() {
        let mut store = RosterController::default();
        store.record_would_play(&alice(), "Chess", at(0));
        store.record_would_play(&carol(), "Go", at(10));

        let responses = handle(
            &mut store,
            &create_test_message_from(bob(), "same to whatever", at(20)),
        );

        assert_eq!(
            responses,
            vec!["Bob would also play Go (that's 2)", "Go is ready to play! (2 players)"]
        );
    }

    #[test]
    fn test_same_is_idempotent_for_roster_size() {
        let mut store = RosterController::default();
        store.record_would_play(&alice(), "Chess", at(0));
        store.record_would_play(&bob(), "Chess", at(1));

        let responses = handle(
            &mut store,
            &create_test_message_from(bob(), "same to chess", at(20)),
        );

        assert_eq!(
            responses,
            vec![
                "Bob would also play Chess (that's 2)",
                "Chess is ready to play! (2 players)"
            ]
        );
    }
}
