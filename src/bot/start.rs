use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};
use songbird::Songbird;
use std::sync::Arc;

use crate::{
    bot::handler::Handler, config::Config, error::AppError,
    scheduler::dispatcher::DispatcherHandle, service::presence::PresenceSettings,
};

/// Builds the Discord client with songbird registered as its voice manager.
///
/// The client is returned unstarted so its cache and HTTP client can be handed to
/// the presence platform before any event arrives.
///
/// # Arguments
/// - `config` - Application configuration (token and guild)
/// - `settings` - Channels and designated user for routing decisions
/// - `dispatcher` - Queue the event handler submits tasks to
///
/// # Returns
/// - `Ok((Client, Arc<Songbird>))` - Built client and its voice manager
/// - `Err(AppError)` - Client could not be built
pub async fn init_bot(
    config: &Config,
    settings: PresenceSettings,
    dispatcher: DispatcherHandle,
) -> Result<(Client, Arc<Songbird>), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(config.guild_id, settings, dispatcher);
    let songbird = Songbird::serenity();

    let client = Client::builder(&config.bot_token, intents)
        .event_handler(handler)
        .voice_manager_arc(songbird.clone())
        .await?;

    Ok((client, songbird))
}

/// Starts the Discord bot in a blocking manner
///
/// Runs until the shard manager is shut down or the gateway connection fails
/// permanently.
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if the connection to Discord fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
