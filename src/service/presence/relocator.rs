use dioxus_logger::tracing;
use serenity::all::{ChannelId, UserId};

use super::{PresenceRouter, VoicePlatform};
use crate::error::presence::PresenceError;

/// Result of relocating the designated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelocationOutcome {
    /// No designated user is configured.
    NoTarget,
    /// The user was moved to the main channel.
    Moved,
    /// Discord refused or the user could not be resolved.
    Failed,
}

impl<P: VoicePlatform> PresenceRouter<P> {
    /// Moves a member's voice session to a channel.
    ///
    /// Fetches the member first so a user who has left the guild fails before any
    /// move is attempted. Discord rejects the move if the member is not connected to
    /// voice or the bot lacks the Move Members permission.
    ///
    /// # Arguments
    /// - `user_id` - Member to move
    /// - `channel_id` - Destination voice channel
    ///
    /// # Returns
    /// - `Ok(())` - Member moved
    /// - `Err(PresenceError)` - Member or channel not found, or the move was rejected
    pub async fn relocate(&self, user_id: UserId, channel_id: ChannelId) -> Result<(), PresenceError> {
        let member_name = self.platform.fetch_member(user_id).await?;
        let channel = self.platform.resolve_voice_channel(channel_id)?;

        self.platform.move_member(user_id, channel.id).await?;

        tracing::info!("Moved {} to {}", member_name, channel.name);

        Ok(())
    }

    /// Moves the designated user, if any, to the main channel.
    ///
    /// This is the only caller of [`Self::relocate`]; other participants are never
    /// moved.
    pub async fn relocate_designated(&self) -> RelocationOutcome {
        let Some(user_id) = self.settings.designated_user else {
            return RelocationOutcome::NoTarget;
        };

        match self.relocate(user_id, self.settings.channels.main).await {
            Ok(()) => RelocationOutcome::Moved,
            Err(e) => {
                tracing::error!("Failed to move user {} to main channel: {}", user_id, e);
                RelocationOutcome::Failed
            }
        }
    }
}
