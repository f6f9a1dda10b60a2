//! Play Register - A Discord bot gathering players for multiplayer games.
//!
//! This is the main entry point of the bot. Users declare in chat that they
//! would play a game, the bot counts them and announces when enough players
//! are available.
//!
//! # Overview
//!
//! ```text
//! Alice: I'd play among us
//! Bot:   Alice would play Among Us (that's 1)
//! Bob:   same
//! Bot:   Bob would also play Among Us (that's 2)
//! ...
//! Bot:   Among Us is ready to play! (5 players)
//! Eve:   @Play Register ping among us
//! Bot:   @Alice,@Bob,... - ready to play Among Us.
//! ```
//!
//! # Configuration
//!
//! Create a `config.yaml` file with your settings:
//!
//! ```yaml
//! discord:
//!   token: "your-bot-token"
//!   client_id: "123456789012345678"
//!
//! games:
//!   - name: Among Us
//!     aliases: [among, amogus]
//!     min_players: 5
//!     max_players: 10
//! ```
//!
//! See [`config`] for every setting and the environment variable overrides.
//!
//! # Usage
//!
//! ```bash
//! play-register --config config.yaml --data ./data
//! ```
//!
//! # Bot Commands
//!
//! - `I'd play <game>[/<game>...]` - Sign up for one or more games
//! - `same` / `same to <game>` - Join the last proposal
//! - `@bot status` - Show rosters and readiness
//! - `@bot clear <game>` - Empty a game's roster
//! - `@bot cancel` - Withdraw from every game
//! - `@bot ping <game>` - Mention the players of the next session
//! - `@bot query games` - List known games
//! - `@bot query <attribute> <game>` - Show a game attribute
//!
//! # Architecture
//!
//! - [`bot`] - Wiring of Discord, the dispatcher and roster persistence
//! - [`commands`] - Message interpretation, handlers and dispatch
//! - [`config`] - YAML configuration with environment variable support
//! - [`discord`] - Discord gateway connection
//! - [`games`] - Game definitions and catalog
//! - [`roster`] - Would-play records, store and persistence
//! - [`utils`] - Utility functions for path handling
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)
//!   - Set to `debug` for verbose output
//!   - Set to `warn` or `error` for minimal logging

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{bot::Bot, config::Config};

mod bot;
mod commands;
mod config;
mod discord;
mod games;
mod roster;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the YAML configuration file
    #[arg(short, long)]
    config: String,

    /// Directory where the roster is saved
    #[arg(short, long)]
    data: String,
}

#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting play-register {}...", env!("CARGO_PKG_VERSION"));

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration from YAML file with environment variable overrides
    let config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    // Launch bot
    let bot = match Bot::new(config, args).await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to initialize bot: {}", e);
            return;
        }
    };

    if let Err(e) = bot.start().await {
        error!("Bot stopped: {}", e);
    }
}
