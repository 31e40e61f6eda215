mod bot;
mod config;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;

use dioxus_logger::tracing;

use crate::{
    bot::platform::DiscordPlatform,
    config::Config,
    error::AppError,
    model::presence::PresenceChannels,
    scheduler::dispatcher::{self, Dispatcher},
    service::presence::{PresenceRouter, PresenceSettings},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_logger(config.log_level);

    let settings = PresenceSettings {
        channels: PresenceChannels {
            main: config.main_channel_id,
            waiting_area: config.waiting_area_id,
        },
        designated_user: config.target_user_id,
    };

    match settings.designated_user {
        Some(user_id) => tracing::info!("Target user {} will be kept in main channel", user_id),
        None => tracing::info!("No target user configured"),
    }

    // Handler and platform share one queue; tasks sent before the dispatcher starts
    // wait in it
    let (dispatcher_handle, inbox) = dispatcher::channel();

    let (bot_client, songbird) =
        bot::start::init_bot(&config, settings, dispatcher_handle.clone()).await?;

    let platform = DiscordPlatform::new(
        config.guild_id,
        bot_client.cache.clone(),
        bot_client.http.clone(),
        songbird,
        dispatcher_handle.clone(),
    );
    tokio::spawn(Dispatcher::new(PresenceRouter::new(platform, settings), inbox).run());

    let listener = startup::bind_liveness(config.port).await?;
    tokio::spawn(async move {
        if let Err(e) = startup::serve_liveness(listener).await {
            tracing::error!("Web server error: {}", e);
        }
    });

    let shard_manager = bot_client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }
        tracing::info!("Shutting down");
        dispatcher_handle.shutdown();
        shard_manager.shutdown_all().await;
    });

    bot::start::start_bot(bot_client).await
}
