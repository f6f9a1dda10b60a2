//! Gateway event handling.
//!
//! This module provides the [`MessageRelay`], the serenity event handler
//! turning Discord messages into [`InboundMessage`]s and sending the replies
//! back to the originating channel.
//!
//! # Ordering
//!
//! Serenity runs event handlers concurrently. The relay holds a dispatch gate
//! across dispatch and send, so the replies to one message are all sent before
//! the next message is dispatched.

use std::future::Future;

use chrono::Utc;
use log::{debug, error, info};
use serenity::{
    all::{Context, EventHandler, Message, Ready},
    async_trait,
};
use tokio::sync::Mutex;

use crate::{commands::InboundMessage, roster::Player};

pub struct MessageRelay<F> {
    /// Produces the replies to a message
    on_message: F,
    /// Held from dispatch until the last reply is sent
    dispatch_gate: Mutex<()>,
}

impl<F> MessageRelay<F> {
    pub fn new(on_message: F) -> Self {
        MessageRelay {
            on_message,
            dispatch_gate: Mutex::new(()),
        }
    }
}

/// Name shown for the author: guild nickname, then global name, then username.
fn display_name(nick: Option<&str>, global_name: Option<&str>, username: &str) -> String {
    nick.or(global_name).unwrap_or(username).to_owned()
}

fn to_inbound_message(ctx: &Context, msg: &Message) -> InboundMessage {
    let nick = msg.member.as_ref().and_then(|member| member.nick.as_deref());
    let author = Player::new(
        &msg.author.id.to_string(),
        &display_name(nick, msg.author.global_name.as_deref(), &msg.author.name),
    );

    InboundMessage {
        content: msg.content.clone(),
        clean_content: msg.content_safe(&ctx.cache),
        author,
        received_at: Utc::now(),
    }
}

#[async_trait]
impl<F, Fut> EventHandler for MessageRelay<F>
where
    F: Fn(InboundMessage) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Vec<String>> + Send + 'static,
{
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("connected to discord as {}", ready.user.name);
    }

    async fn message(&self, ctx: Context, msg: Message) {
        // Never answer bots, including ourselves
        if msg.author.bot {
            return;
        }

        let message = to_inbound_message(&ctx, &msg);

        let _gate = self.dispatch_gate.lock().await;
        let replies = (self.on_message)(message).await;
        if replies.is_empty() {
            return;
        }

        debug!("sending {} replies to channel {}", replies.len(), msg.channel_id);

        for reply in replies.iter().filter(|reply| !reply.is_empty()) {
            if let Err(e) = msg.channel_id.say(&ctx.http, reply).await {
                error!("failed to send reply to channel {}: {:?}", msg.channel_id, e);
            }
        }
    }
}
