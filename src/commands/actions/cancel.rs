//! Cancel command handler.

use crate::commands::{
    BotIdentity, HandlerContext, HandlerError, InboundMessage, MessageHandler, Trigger,
    extraction::mention_trigger, responses::format_cancelled,
};

const KEYWORDS: &[&str] = &["cancel"];

/// Withdraws the author from every game.
pub struct CancelHandler;

impl MessageHandler for CancelHandler {
    fn name(&self) -> &'static str {
        "cancel"
    }

    fn trigger(&self, message: &InboundMessage, identity: &BotIdentity) -> Option<Trigger> {
        mention_trigger(KEYWORDS, message, identity)
    }

    fn get_all_responses(
        &self,
        message: &InboundMessage,
        context: &mut HandlerContext,
    ) -> Result<Vec<String>, HandlerError> {
        context.store.cancel_would_plays(&message.author);

        Ok(vec![format_cancelled(&message.author)])
    }
}
