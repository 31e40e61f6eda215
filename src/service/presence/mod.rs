//! Presence router: occupancy counting, channel joining, user relocation and the
//! routing policy that ties them together.
//!
//! The router is an explicitly owned object. The dispatcher holds the only instance
//! and calls into it one task at a time, so no operation here needs locking; the
//! joiner's short-circuit is what makes overlapping evaluations harmless.

pub mod command;
pub mod joiner;
pub mod occupancy;
pub mod policy;
pub mod relocator;
pub mod triggers;

#[cfg(test)]
pub mod fake;
#[cfg(test)]
mod test;

use serenity::all::{ChannelId, UserId};
use serenity::async_trait;

use crate::{
    error::presence::PresenceError,
    model::presence::{Occupant, PresenceChannels, VoiceChannel},
};

/// Access to the Discord guild the router operates in.
///
/// Synchronous methods read the gateway cache; asynchronous ones talk to the voice
/// manager or the REST API.
#[async_trait]
pub trait VoicePlatform: Send + Sync {
    /// The agent's own user id, once the gateway has reported ready.
    fn agent_id(&self) -> Option<UserId>;

    /// Users connected to `channel_id`, or `None` if the guild or channel is unknown.
    fn voice_occupants(&self, channel_id: ChannelId) -> Option<Vec<Occupant>>;

    /// Resolves a channel in the configured guild and checks it can host voice.
    fn resolve_voice_channel(&self, channel_id: ChannelId) -> Result<VoiceChannel, PresenceError>;

    /// Channel the agent's voice connection currently targets, if it has a live session.
    async fn current_channel(&self) -> Option<ChannelId>;

    /// Establishes a new voice connection to `channel_id`, self-deafened and unmuted,
    /// with connection event handlers registered.
    ///
    /// A failed attempt leaves no connection behind.
    async fn connect(&self, channel_id: ChannelId) -> Result<(), PresenceError>;

    /// Destroys the voice connection.
    ///
    /// # Returns
    /// - `Ok(true)` - A connection existed and was destroyed
    /// - `Ok(false)` - There was no connection
    async fn disconnect(&self) -> Result<bool, PresenceError>;

    /// Fetches a guild member, returning their display name.
    async fn fetch_member(&self, user_id: UserId) -> Result<String, PresenceError>;

    /// Moves a member's voice session to `channel_id`.
    async fn move_member(&self, user_id: UserId, channel_id: ChannelId)
        -> Result<(), PresenceError>;
}

/// Static routing settings taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceSettings {
    /// Main and waiting area channels.
    pub channels: PresenceChannels,
    /// User who is always brought back to the main channel, if configured.
    pub designated_user: Option<UserId>,
}

/// Decides where the agent sits and carries out the moves.
pub struct PresenceRouter<P> {
    platform: P,
    settings: PresenceSettings,
}

impl<P: VoicePlatform> PresenceRouter<P> {
    pub fn new(platform: P, settings: PresenceSettings) -> Self {
        Self { platform, settings }
    }
}
