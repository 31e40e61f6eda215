use serenity::all::{ChannelId, UserId};

use super::{PresenceRouter, VoicePlatform};
use crate::model::presence::Occupant;

impl<P: VoicePlatform> PresenceRouter<P> {
    /// Counts humans connected to a voice channel.
    ///
    /// Bots, including the agent itself, are excluded. An unknown guild or channel
    /// counts as empty rather than failing.
    pub fn count_humans(&self, channel_id: ChannelId) -> usize {
        match self.platform.voice_occupants(channel_id) {
            Some(occupants) => count_humans_in(&occupants, self.platform.agent_id()),
            None => 0,
        }
    }
}

/// Counts occupants that are neither bots nor the agent.
///
/// The agent is excluded by id as well so it is never counted even when its bot
/// flag is missing from a partial cache entry.
pub fn count_humans_in(occupants: &[Occupant], agent_id: Option<UserId>) -> usize {
    occupants
        .iter()
        .filter(|occupant| !occupant.bot)
        .filter(|occupant| Some(occupant.user_id) != agent_id)
        .count()
}
