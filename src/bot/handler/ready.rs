//! Ready event handlers for bot initialization.
//!
//! `ready` fires once the gateway handshake completes, but guilds arrive afterwards
//! in separate `GUILD_CREATE` events. The startup evaluation therefore waits for
//! `cache_ready`, when the configured guild's channels and voice states are known.

use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, Ready};

use crate::{
    model::presence::EvaluationReason,
    scheduler::dispatcher::{DispatcherHandle, Task},
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!("Bot is ready! Logged in as {}", ready.user.tag());
}

/// Handles the cache ready event by running the startup evaluation.
///
/// # Arguments
/// - `dispatcher` - Queue to submit the evaluation to
/// - `guild_id` - Configured guild
/// - `ctx` - Discord context
/// - `guilds` - Guilds now present in the cache
pub async fn handle_cache_ready(
    dispatcher: &DispatcherHandle,
    guild_id: GuildId,
    _ctx: Context,
    guilds: Vec<GuildId>,
) {
    if !guilds.contains(&guild_id) {
        tracing::warn!(
            "Configured guild {} is not among the {} cached guilds",
            guild_id,
            guilds.len()
        );
    }

    dispatcher.submit(Task::Evaluate(EvaluationReason::Startup));
}
