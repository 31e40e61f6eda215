use dioxus_logger::tracing;
use serenity::all::ChannelId;

use super::{PresenceRouter, VoicePlatform};
use crate::{error::presence::PresenceError, model::presence::PresenceTarget};

/// Result of a successful join request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// The connection already targeted the channel; nothing changed.
    AlreadyPresent,
    /// A new connection was established.
    Joined,
}

impl<P: VoicePlatform> PresenceRouter<P> {
    /// Ensures the agent's voice connection is attached to `channel_id`.
    ///
    /// Idempotent: if the current connection already targets the channel the call
    /// returns without touching it. Otherwise any existing connection is destroyed
    /// before the new one is established, so at most one connection exists.
    ///
    /// # Arguments
    /// - `channel_id` - Voice channel to join
    ///
    /// # Returns
    /// - `Ok(JoinOutcome)` - Agent is now in the channel
    /// - `Err(PresenceError)` - Guild/channel could not be resolved, the channel is not
    ///   a voice channel, or the connection could not be established
    pub async fn join_channel(&self, channel_id: ChannelId) -> Result<JoinOutcome, PresenceError> {
        let channel = self.platform.resolve_voice_channel(channel_id)?;

        if self.platform.current_channel().await == Some(channel.id) {
            tracing::info!("Already in {}, no need to move", channel.name);
            return Ok(JoinOutcome::AlreadyPresent);
        }

        self.platform.disconnect().await?;
        self.platform.connect(channel.id).await?;

        tracing::info!("Joined voice channel: {}", channel.name);

        Ok(JoinOutcome::Joined)
    }

    /// Joins one of the configured channels, logging instead of returning failures.
    pub async fn join_target(&self, target: PresenceTarget) -> Option<JoinOutcome> {
        let channel_id = self.settings.channels.channel_for(target);

        match self.join_channel(channel_id).await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                tracing::error!("Failed to join {} ({}): {}", target, channel_id, e);
                None
            }
        }
    }

    /// Destroys the current voice connection if there is one.
    ///
    /// # Returns
    /// - `Ok(true)` - Left a channel
    /// - `Ok(false)` - Not connected, nothing to do
    /// - `Err(PresenceError)` - Songbird failed to tear the connection down
    pub async fn leave(&self) -> Result<bool, PresenceError> {
        let left = self.platform.disconnect().await?;

        if left {
            tracing::info!("Left voice channel");
        }

        Ok(left)
    }
}
