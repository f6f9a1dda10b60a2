//! Discord transport.
//!
//! - [`DiscordClient`]: gateway connection
//! - `relay`: conversion of Discord messages and reply sending
//!
//! Mentions use Discord's markup: `<@ID>` or `<@!ID>` for users, `<@&ID>` for
//! roles.

mod client;
mod relay;

pub use crate::discord::client::DiscordClient;
