//! Message dispatch.
//!
//! This module provides the [`Dispatcher`], the entry point of the command
//! layer. It owns the catalog, the bot identity and the roster store, and asks
//! every handler of a fixed list whether it applies to a message.
//!
//! # Selection
//!
//! - Content triggered handlers and the role mention handler all run when
//!   they apply.
//! - At most one mention triggered handler runs: the one whose keyword is the
//!   longest (`query games` over `query`, `ping` over `p`). Handlers listed
//!   first win ties.
//!
//! Selected handlers run in list order and their replies are concatenated.
//!
//! # Examples
//!
//! ```no_run
//! let mut dispatcher = Dispatcher::new(catalog, identity, RosterController::default());
//!
//! for reply in dispatcher.dispatch(&message) {
//!     println!("{}", reply);
//! }
//! ```

use log::{debug, warn};

use crate::{
    commands::{
        BotIdentity, HandlerContext, InboundMessage, MessageHandler, Trigger,
        actions::{
            AccidentalRoleMentionHandler, CancelHandler, ClearHandler, PingHandler,
            QueryGamesHandler, QueryPropertyHandler, SameHandler, StatusHandler, WouldPlayHandler,
        },
        responses::format_handler_error,
    },
    games::GameCatalog,
    roster::RosterStore,
};

/// Routes inbound messages to the handlers that apply.
pub struct Dispatcher<S: RosterStore> {
    /// Known games
    catalog: GameCatalog,
    /// How the bot is addressed
    identity: BotIdentity,
    /// Roster changed by handlers
    store: S,
    /// Handlers, in priority order
    handlers: Vec<Box<dyn MessageHandler>>,
}

impl<S: RosterStore> Dispatcher<S> {
    /// Creates a dispatcher with every command handler.
    pub fn new(catalog: GameCatalog, identity: BotIdentity, store: S) -> Self {
        let handlers: Vec<Box<dyn MessageHandler>> = vec![
            Box::new(WouldPlayHandler),
            Box::new(SameHandler),
            Box::new(StatusHandler),
            Box::new(ClearHandler),
            Box::new(CancelHandler),
            Box::new(PingHandler),
            Box::new(AccidentalRoleMentionHandler),
            Box::new(QueryGamesHandler),
            Box::new(QueryPropertyHandler),
        ];

        Dispatcher {
            catalog,
            identity,
            store,
            handlers,
        }
    }

    /// Returns the roster store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the handlers to run for `message` with their trigger, in list
    /// order.
    fn select_handlers(&self, message: &InboundMessage) -> Vec<(usize, Trigger)> {
        let triggers: Vec<(usize, Trigger)> = self
            .handlers
            .iter()
            .enumerate()
            .filter_map(|(index, handler)| {
                handler
                    .trigger(message, &self.identity)
                    .map(|trigger| (index, trigger))
            })
            .collect();

        // Longest keyword wins, the first handler listed wins ties
        let mut mention_handler: Option<(usize, usize)> = None;
        for (index, trigger) in &triggers {
            if let Trigger::Mention(keyword) = trigger {
                let length = keyword.chars().count();
                if mention_handler.is_none_or(|(_, best)| length > best) {
                    mention_handler = Some((*index, length));
                }
            }
        }

        triggers
            .into_iter()
            .filter(|(index, trigger)| match trigger {
                Trigger::Mention(_) => mention_handler.is_some_and(|(best, _)| best == *index),
                Trigger::Content(_) | Trigger::RoleMention => true,
            })
            .collect()
    }

    /// Produces every reply to `message`, in order.
    ///
    /// A handler error becomes a reply for that handler; the other selected
    /// handlers still run.
    pub fn dispatch(&mut self, message: &InboundMessage) -> Vec<String> {
        if !self
            .handlers
            .iter()
            .any(|handler| handler.should_handle(message, &self.identity))
        {
            return Vec::new();
        }

        let selected = self.select_handlers(message);
        let mut responses = Vec::new();

        for (index, trigger) in selected {
            let handler = &self.handlers[index];
            debug!(
                "{} handler applies to message from {} on {}",
                handler.name(),
                message.author.id,
                trigger
            );

            let mut context = HandlerContext {
                catalog: &self.catalog,
                store: &mut self.store,
            };

            match handler.get_all_responses(message, &mut context) {
                Ok(handler_responses) => responses.extend(handler_responses),
                Err(e) => {
                    warn!("{} handler failed: {}", handler.name(), e);
                    responses.push(format_handler_error(&e));
                }
            }
        }

        debug!("dispatch responses {:?}", responses);

        responses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        commands::fixtures::{
            BOT_ID, alice, at, bob, carol, create_test_catalog, create_test_identity,
            create_test_mention, create_test_message, create_test_message_from,
        },
        games::Game,
        roster::{MockRosterStore, RosterController, WouldPlay},
    };

    fn create_test_dispatcher() -> Dispatcher<RosterController> {
        Dispatcher::new(
            create_test_catalog(),
            create_test_identity(),
            RosterController::default(),
        )
    }

    fn create_chess_only_dispatcher() -> Dispatcher<RosterController> {
        let catalog = GameCatalog::new(vec![Game::new("Chess", &["chess"], 2, None)]).unwrap();
        Dispatcher::new(catalog, create_test_identity(), RosterController::default())
    }

    #[test]
    fn test_dispatch_ignores_chat() {
        let mut store = MockRosterStore::new();
        store.expect_record_would_play().never();
        store.expect_clear_game().never();
        store.expect_cancel_would_plays().never();
        let mut dispatcher =
            Dispatcher::new(create_test_catalog(), create_test_identity(), store);

        assert!(
            dispatcher
                .dispatch(&create_test_message("anyone up for chess tonight?"))
                .is_empty()
        );
        assert!(dispatcher.dispatch(&create_test_message("")).is_empty());
    }

    #[test]
    fn test_dispatch_ignores_other_user_mention() {
        let mut dispatcher = create_test_dispatcher();

        assert!(
            dispatcher
                .dispatch(&create_test_message("<@!42> status"))
                .is_empty()
        );
    }

    #[test]
    fn test_status_always_alive() {
        let mut dispatcher = create_test_dispatcher();

        let responses = dispatcher.dispatch(&create_test_mention("status"));
        assert_eq!(responses.len(), 1);
        assert!(responses[0].contains("Bot alive"));

        dispatcher.dispatch(&create_test_message("I'd play chess/go/among us"));

        let responses = dispatcher.dispatch(&create_test_mention("status"));
        assert_eq!(responses.len(), 1);
        assert!(responses[0].contains("Bot alive"));
    }

    #[test]
    fn test_readiness_scenario() {
        let mut dispatcher = create_chess_only_dispatcher();

        let responses =
            dispatcher.dispatch(&create_test_message_from(alice(), "I'd play chess", at(0)));
        assert_eq!(responses, vec!["Alice would play Chess (that's 1)"]);

        let responses =
            dispatcher.dispatch(&create_test_message_from(bob(), "I'd play chess", at(1)));
        assert_eq!(
            responses,
            vec![
                "Bob would play Chess (that's 2)",
                "Chess is ready to play! (2 players)"
            ]
        );

        let responses = dispatcher.dispatch(&create_test_message_from(
            carol(),
            &format!("<@{}> ping chess", BOT_ID),
            at(2),
        ));
        assert_eq!(responses, vec!["<@!1>,<@!2> - ready to play Chess."]);
        assert!(dispatcher.store().available_players("Chess").is_empty());
    }

    #[test]
    fn test_multi_game_order() {
        let mut dispatcher = create_test_dispatcher();

        let responses = dispatcher.dispatch(&create_test_message("I'd play chess/go"));

        assert_eq!(
            responses,
            vec![
                "Alice would play Chess (that's 1)",
                "Alice would play Go (that's 1)"
            ]
        );
    }

    #[test]
    fn test_query_aliases_scenario() {
        let mut dispatcher = create_chess_only_dispatcher();

        let responses = dispatcher.dispatch(&create_test_mention("query aliases chess"));

        assert_eq!(responses, vec!["aliases: chess"]);

        let responses = dispatcher.dispatch(&create_test_mention("Query aliases chess"));

        assert_eq!(responses, vec!["aliases: chess"]);
    }

    #[test]
    fn test_query_games_beats_query() {
        let mut dispatcher = create_test_dispatcher();

        let responses = dispatcher.dispatch(&create_test_mention("query games"));

        assert_eq!(responses, vec!["Chess\nAmong Us\nGo"]);
    }

    #[test]
    fn test_ping_keyword_beats_short_keyword() {
        let mut dispatcher = create_test_dispatcher();
        dispatcher.dispatch(&create_test_message("I'd play go"));

        let responses = dispatcher.dispatch(&create_test_mention("ping go"));

        assert_eq!(responses, vec!["<@!1> - ready to play Go."]);
    }

    #[test]
    fn test_cancel_keeps_other_players() {
        let mut dispatcher = create_test_dispatcher();
        dispatcher.dispatch(&create_test_message_from(alice(), "I'd play chess", at(0)));
        dispatcher.dispatch(&create_test_message_from(bob(), "I'd play chess", at(1)));

        let responses = dispatcher.dispatch(&create_test_message_from(
            alice(),
            &format!("<@!{}> cancel", BOT_ID),
            at(2),
        ));

        assert_eq!(responses, vec!["Cancelled all play requests from Alice"]);
        assert_eq!(dispatcher.store().available_players("Chess"), vec![bob()]);
    }

    #[test]
    fn test_handler_error_becomes_reply() {
        let mut dispatcher = create_test_dispatcher();

        let responses = dispatcher.dispatch(&create_test_mention("query colour chess"));
        assert_eq!(responses.len(), 1);
        assert!(responses[0].starts_with("Sorry, I didn't understand that."));

        let responses = dispatcher.dispatch(&create_test_mention("query name tetris"));
        assert_eq!(responses, vec!["I don't know a game called 'tetris'"]);
    }

    #[test]
    fn test_handler_error_does_not_suppress_other_handlers() {
        let mut dispatcher = create_test_dispatcher();
        let mut message = create_test_mention("query colour chess");
        message.content = format!("<@!{}> <@&555> query colour chess", BOT_ID);
        message.clean_content = "@Play Register @Play Register query colour chess".to_string();

        // The role mention splits the bot mention from its keyword
        let responses = dispatcher.dispatch(&message);
        assert_eq!(
            responses,
            vec![
                "It looks like you tried to @ me but might have accidentally selected the role \
                 instead"
            ]
        );

        message.content = format!("<@!{}> query colour chess <@&555>", BOT_ID);
        let responses = dispatcher.dispatch(&message);
        assert_eq!(responses.len(), 2);
        assert!(responses[0].starts_with("It looks like you tried to @ me"));
        assert!(responses[1].starts_with("Sorry, I didn't understand that."));
    }

    #[test]
    fn test_same_after_would_play() {
        let mut dispatcher = create_test_dispatcher();
        dispatcher.dispatch(&create_test_message_from(alice(), "I'd play chess/go", at(0)));

        let responses = dispatcher.dispatch(&create_test_message_from(bob(), "Same", at(1)));

        assert_eq!(
            responses,
            vec![
                "Bob would also play Chess (that's 2)",
                "Bob would also play Go (that's 2)",
                "Chess is ready to play! (2 players)",
                "Go is ready to play! (2 players)",
            ]
        );
    }

    #[test]
    fn test_dispatch_uses_store_through_trait() {
        let mut store = MockRosterStore::new();
        store
            .expect_record_would_play()
            .times(1)
            .returning(|player, game, created_at| WouldPlay {
                player: player.clone(),
                game: game.to_string(),
                created_at,
            });
        store.expect_available_players().returning(|_| vec![alice()]);
        let mut dispatcher =
            Dispatcher::new(create_test_catalog(), create_test_identity(), store);

        let responses = dispatcher.dispatch(&create_test_message("I’d play échecs"));

        assert_eq!(responses, vec!["Alice would play Chess (that's 1)"]);
    }
}
