//! Accidental role mention handler.
//!
//! Chat clients suggest the role sharing the bot's name right next to the bot
//! user. When users pick the role, the bot never sees a mention of itself, so
//! it tells them what happened.

use crate::commands::{
    BotIdentity, HandlerContext, HandlerError, InboundMessage, MessageHandler, Trigger,
    responses::format_accidental_role_mention, text::ROLE_MENTION_PREFIX,
};

pub struct AccidentalRoleMentionHandler;

impl MessageHandler for AccidentalRoleMentionHandler {
    fn name(&self) -> &'static str {
        "accidental role mention"
    }

    fn trigger(&self, message: &InboundMessage, identity: &BotIdentity) -> Option<Trigger> {
        let mentions_role = message.content.contains(ROLE_MENTION_PREFIX);
        let names_bot = message.clean_content.contains(&identity.role_mention_phrase);

        (mentions_role && names_bot).then_some(Trigger::RoleMention)
    }

    fn get_all_responses(
        &self,
        _message: &InboundMessage,
        _context: &mut HandlerContext,
    ) -> Result<Vec<String>, HandlerError> {
        Ok(vec![format_accidental_role_mention()])
    }
}
