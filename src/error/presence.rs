use serenity::all::{ChannelId, GuildId, UserId};
use thiserror::Error;

/// Failures raised while the router talks to Discord.
///
/// None of these escape an event handler: they are logged where they occur and the
/// affected operation degrades to a no-op until the next trigger.
#[derive(Error, Debug)]
pub enum PresenceError {
    /// The configured guild is not in the cache.
    #[error("Guild {0} not found")]
    GuildNotFound(GuildId),

    /// The channel does not exist in the configured guild.
    #[error("Channel {0} not found")]
    ChannelNotFound(ChannelId),

    /// The channel exists but cannot host a voice connection.
    #[error("Channel {0} is not a voice channel")]
    NotVoiceChannel(ChannelId),

    /// The member could not be fetched from the guild.
    #[error("Member {0} not found in guild")]
    MemberNotFound(UserId),

    /// Songbird failed to establish or tear down the voice connection.
    #[error(transparent)]
    JoinErr(#[from] songbird::error::JoinError),

    /// Discord rejected a REST call (move, fetch, reply).
    ///
    /// Boxed for the same reason as [`crate::error::AppError::DiscordErr`].
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

impl From<serenity::Error> for PresenceError {
    fn from(err: serenity::Error) -> Self {
        PresenceError::DiscordErr(Box::new(err))
    }
}
