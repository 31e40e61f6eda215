//! Presence routing domain models.
//!
//! Provides the channel targets the agent may occupy, the occupant view used for
//! head counts, voice state transitions, and the reasons an evaluation was requested.

use serenity::all::{ChannelId, User, UserId, VoiceState};
use std::fmt;

/// One of the two channels the agent is ever allowed to join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceTarget {
    /// The monitored channel the agent greets users in.
    Main,
    /// The channel the agent steps aside to.
    WaitingArea,
}

impl fmt::Display for PresenceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "main channel"),
            Self::WaitingArea => write!(f, "waiting area"),
        }
    }
}

/// The two configured channels, resolved to ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceChannels {
    /// Channel the router monitors and greets in.
    pub main: ChannelId,
    /// Channel the agent waits in when it is not needed in main.
    pub waiting_area: ChannelId,
}

impl PresenceChannels {
    /// Maps a target onto its configured channel id.
    pub fn channel_for(&self, target: PresenceTarget) -> ChannelId {
        match target {
            PresenceTarget::Main => self.main,
            PresenceTarget::WaitingArea => self.waiting_area,
        }
    }
}

/// A user connected to a voice channel, reduced to what the head count needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant {
    /// Discord user id.
    pub user_id: UserId,
    /// Whether the account is a bot (including the agent itself).
    pub bot: bool,
}

impl From<&User> for Occupant {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            bot: user.bot,
        }
    }
}

/// A voice channel that passed resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceChannel {
    /// Discord channel id.
    pub id: ChannelId,
    /// Channel display name, used for logging.
    pub name: String,
}

/// A single user's move between voice channels, as seen by a voice state update.
///
/// `None` on either side means "not connected to voice".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceTransition {
    /// User whose voice state changed.
    pub user_id: UserId,
    /// Channel before the update, if the previous state was cached.
    pub old_channel: Option<ChannelId>,
    /// Channel after the update.
    pub new_channel: Option<ChannelId>,
}

impl VoiceTransition {
    /// Builds a transition from serenity's old (cached) and new voice states.
    ///
    /// # Arguments
    /// - `old` - Previous voice state if it was in the cache
    /// - `new` - Voice state delivered by the gateway
    ///
    /// # Returns
    /// - `VoiceTransition` - The user and their channel before and after
    pub fn from_states(old: Option<&VoiceState>, new: &VoiceState) -> Self {
        Self {
            user_id: new.user_id,
            old_channel: old.and_then(|state| state.channel_id),
            new_channel: new.channel_id,
        }
    }

    /// Returns true when either side of the transition is `channel_id`.
    pub fn touches(&self, channel_id: ChannelId) -> bool {
        self.old_channel == Some(channel_id) || self.new_channel == Some(channel_id)
    }
}

/// Why a policy evaluation was requested. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationReason {
    /// Gateway reported ready.
    Startup,
    /// Someone joined or left the main channel.
    MainChannelActivity,
    /// The agent's own voice state went from a channel to none.
    AgentDisconnected,
    /// The owned voice connection reported an error.
    ConnectionError,
    /// Follow-up to a designated user's move.
    DesignatedUser,
    /// `$check` was issued.
    Command,
}

impl fmt::Display for EvaluationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Startup => "startup",
            Self::MainChannelActivity => "main channel activity",
            Self::AgentDisconnected => "agent disconnected",
            Self::ConnectionError => "connection error",
            Self::DesignatedUser => "designated user",
            Self::Command => "command",
        };
        write!(f, "{}", reason)
    }
}
