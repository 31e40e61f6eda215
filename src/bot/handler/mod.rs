use serenity::all::{Context, EventHandler, GuildId, Message, Ready, VoiceState};
use serenity::async_trait;

use crate::{scheduler::dispatcher::DispatcherHandle, service::presence::PresenceSettings};

pub mod message;
pub mod ready;
pub mod voice_state;

#[cfg(test)]
mod test;

/// Discord bot event handler
pub struct Handler {
    pub guild_id: GuildId,
    pub settings: PresenceSettings,
    pub dispatcher: DispatcherHandle,
}

impl Handler {
    pub fn new(guild_id: GuildId, settings: PresenceSettings, dispatcher: DispatcherHandle) -> Self {
        Self {
            guild_id,
            settings,
            dispatcher,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called once every guild from the ready payload has been cached
    async fn cache_ready(&self, ctx: Context, guilds: Vec<GuildId>) {
        ready::handle_cache_ready(&self.dispatcher, self.guild_id, ctx, guilds).await;
    }

    /// Called when a user joins, leaves, moves between, or updates state in a voice channel
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice_state::handle_voice_state_update(self, ctx, old, new).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.dispatcher, ctx, message).await;
    }
}
