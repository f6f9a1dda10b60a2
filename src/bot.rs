//! Bot module wiring Discord to the command layer.
//!
//! This module provides the main [`Bot`] implementation. It builds the game
//! catalog and the roster from the configuration, then relays every Discord
//! message to the [`Dispatcher`].
//!
//! # Architecture
//!
//! The bot runs two concurrent tasks:
//!
//! 1. **Discord Task**: listens for messages, dispatches them one at a time and
//!    sends the replies back to the channel.
//!
//! 2. **Roster Persistence Task**: periodically saves the roster to disk so
//!    sign-ups survive bot restarts.
//!
//! Both tasks share the dispatcher, which owns the roster, behind a
//! [`tokio::sync::Mutex`].
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> Result<(), anyhow::Error> {
//! let config = Config::load("config.yaml")?;
//! let args = Args::parse();
//!
//! let bot = Bot::new(config, args).await?;
//! bot.start().await?;
//! # Ok(())
//! # }
//! ```

use std::{sync::Arc, time::Duration};

use log::{debug, info};
use tokio::{sync::Mutex, time};

use crate::{
    Args,
    commands::{BotIdentity, Dispatcher, InboundMessage},
    config::Config,
    discord::DiscordClient,
    games::GameCatalog,
    roster::{RosterController, RosterLoader},
    utils::get_path,
};

/// Name of the roster file inside the data directory.
const ROSTER_FILE: &str = "roster.json";

pub struct Bot {
    discord_client: DiscordClient,

    dispatcher: Arc<Mutex<Dispatcher<RosterController>>>,

    roster_loader: RosterLoader,

    /// Seconds between two roster saves
    persistence_interval: u64,
}

impl Bot {
    /// Creates the bot from its configuration.
    ///
    /// # Errors
    ///
    /// Fails when the game catalog is invalid, e.g. when an alias names two
    /// games.
    pub async fn new(config: Config, args: Args) -> Result<Self, anyhow::Error> {
        let catalog = GameCatalog::new(config.games)?;
        info!("{} games in the catalog", catalog.games().count());

        let roster_loader = RosterLoader::new(get_path(&args.data, ROSTER_FILE));
        let roster = RosterController::new(roster_loader.load().await);

        let identity = BotIdentity {
            client_id: config.discord.client_id,
            role_mention_phrase: config.discord.role_mention_phrase,
        };

        let dispatcher = Arc::new(Mutex::new(Dispatcher::new(catalog, identity, roster)));

        Ok(Bot {
            discord_client: DiscordClient::new(&config.discord.token),
            dispatcher,
            roster_loader,
            // A zero period would make the persistence timer panic
            persistence_interval: config.roster.persistence_interval.max(1),
        })
    }

    /// Starts the persistence task, then listens to Discord until the
    /// connection ends.
    pub async fn start(self) -> Result<(), anyhow::Error> {
        self.start_persistence_task();

        let dispatcher = Arc::clone(&self.dispatcher);
        let on_message = move |message: InboundMessage| {
            let dispatcher = Arc::clone(&dispatcher);
            async move {
                debug!("dispatching message from {}", message.author.id);
                dispatcher.lock().await.dispatch(&message)
            }
        };

        self.discord_client.start(on_message).await
    }

    fn start_persistence_task(&self) {
        let dispatcher = Arc::clone(&self.dispatcher);
        let roster_loader = self.roster_loader.clone();
        let persistence_interval = self.persistence_interval;

        tokio::spawn(async move {
            info!(
                "persisting roster every {} seconds",
                persistence_interval
            );
            let mut interval = time::interval(Duration::from_secs(persistence_interval));

            loop {
                interval.tick().await;
                let dispatcher = dispatcher.lock().await;
                roster_loader
                    .persist_records(dispatcher.store().records())
                    .await;
            }
        });
    }
}
