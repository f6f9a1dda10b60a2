//! Discord client wrapper.
//!
//! This module provides a [`DiscordClient`] that connects the bot to the
//! Discord gateway and relays every received message to a callback.

use std::future::Future;

use log::{error, info};
use serenity::{Client, all::GatewayIntents};

use crate::{commands::InboundMessage, discord::relay::MessageRelay};

pub struct DiscordClient {
    /// Bot token
    token: String,
}

impl DiscordClient {
    pub fn new(token: &str) -> Self {
        DiscordClient {
            token: token.to_owned(),
        }
    }

    /// Connects to the gateway and relays messages until the connection ends.
    ///
    /// `on_message` returns the replies to send to the message's channel, in
    /// order.
    pub async fn start<F, Fut>(&self, on_message: F) -> Result<(), anyhow::Error>
    where
        F: Fn(InboundMessage) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Vec<String>> + Send + 'static,
    {
        let intents = GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT;

        let mut client = Client::builder(&self.token, intents)
            .event_handler(MessageRelay::new(on_message))
            .await?;

        info!("start listening to discord messages");

        if let Err(e) = client.start().await {
            error!("discord client ended with error: {:?}", e);
            return Err(e.into());
        }

        info!("discord client ended successfully");

        Ok(())
    }
}
