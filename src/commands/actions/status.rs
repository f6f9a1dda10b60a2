//! Status command handler.

use crate::commands::{
    BotIdentity, HandlerContext, HandlerError, InboundMessage, MessageHandler, Trigger,
    extraction::mention_trigger, responses::format_status,
};

const KEYWORDS: &[&str] = &["status"];

/// Replies with the roster size of every game with players, followed by the
/// readiness of those games.
pub struct StatusHandler;

impl MessageHandler for StatusHandler {
    fn name(&self) -> &'static str {
        "status"
    }

    fn trigger(&self, message: &InboundMessage, identity: &BotIdentity) -> Option<Trigger> {
        mention_trigger(KEYWORDS, message, identity)
    }

    fn get_all_responses(
        &self,
        _message: &InboundMessage,
        context: &mut HandlerContext,
    ) -> Result<Vec<String>, HandlerError> {
        let mut rosters = Vec::new();
        let mut ready_messages = Vec::new();

        for game in context.catalog.games() {
            let count = context.store.available_players(&game.name).len();
            if count > 0 {
                rosters.push((game.name.as_str(), count));
                ready_messages.extend(game.get_ready_messages(count));
            }
        }

        Ok(vec![format_status(&rosters, &ready_messages)])
    }
}
