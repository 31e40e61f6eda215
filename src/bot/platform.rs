//! Live [`VoicePlatform`] backed by the serenity cache, the REST API and songbird.

use dioxus_logger::tracing;
use serenity::all::{Cache, ChannelId, ChannelType, GuildId, Http, UserId};
use serenity::async_trait;
use songbird::Songbird;
use std::sync::Arc;

use crate::{
    bot::connection::ConnectionEvents,
    error::presence::PresenceError,
    model::presence::{Occupant, VoiceChannel},
    scheduler::dispatcher::DispatcherHandle,
    service::presence::VoicePlatform,
};

pub struct DiscordPlatform {
    guild_id: GuildId,
    cache: Arc<Cache>,
    http: Arc<Http>,
    songbird: Arc<Songbird>,
    dispatcher: DispatcherHandle,
}

impl DiscordPlatform {
    pub fn new(
        guild_id: GuildId,
        cache: Arc<Cache>,
        http: Arc<Http>,
        songbird: Arc<Songbird>,
        dispatcher: DispatcherHandle,
    ) -> Self {
        Self {
            guild_id,
            cache,
            http,
            songbird,
            dispatcher,
        }
    }

    async fn establish(&self, channel_id: ChannelId) -> Result<(), PresenceError> {
        let call = self.songbird.get_or_insert(self.guild_id);

        let join = {
            let mut handler = call.lock().await;
            handler.remove_all_global_events();
            ConnectionEvents::register(&mut handler, &self.dispatcher);
            handler.join(channel_id).await?
        };
        join.await?;

        // Deafen/mute are only sent once the gateway session exists.
        let mut handler = call.lock().await;
        handler.deafen(true).await?;
        handler.mute(false).await?;

        Ok(())
    }
}

#[async_trait]
impl VoicePlatform for DiscordPlatform {
    fn agent_id(&self) -> Option<UserId> {
        Some(self.cache.current_user().id)
    }

    fn voice_occupants(&self, channel_id: ChannelId) -> Option<Vec<Occupant>> {
        let guild = self.cache.guild(self.guild_id)?;
        if !guild.channels.contains_key(&channel_id) {
            return None;
        }

        // Voice states only carry a member payload on the gateway event; fall back to
        // it, then to the user cache, when the member is missing from the guild.
        let occupants = guild
            .voice_states
            .values()
            .filter(|state| state.channel_id == Some(channel_id))
            .filter_map(|state| {
                let member = guild.members.get(&state.user_id).or(state.member.as_ref());
                first_known(
                    state.user_id,
                    [
                        member.map(|member| Occupant::from(&member.user)),
                        self.cache.user(state.user_id).map(|user| Occupant::from(&*user)),
                    ],
                )
            })
            .collect();

        Some(occupants)
    }

    fn resolve_voice_channel(&self, channel_id: ChannelId) -> Result<VoiceChannel, PresenceError> {
        let guild = self
            .cache
            .guild(self.guild_id)
            .ok_or(PresenceError::GuildNotFound(self.guild_id))?;
        let channel = guild
            .channels
            .get(&channel_id)
            .ok_or(PresenceError::ChannelNotFound(channel_id))?;

        if channel.kind != ChannelType::Voice {
            return Err(PresenceError::NotVoiceChannel(channel_id));
        }

        Ok(VoiceChannel {
            id: channel.id,
            name: channel.name.clone(),
        })
    }

    async fn current_channel(&self) -> Option<ChannelId> {
        let call = self.songbird.get(self.guild_id)?;
        let handler = call.lock().await;

        // A failed call keeps its channel id; only count it with a live session.
        handler.current_connection()?;
        handler
            .current_channel()
            .map(|channel| ChannelId::new(channel.0.get()))
    }

    async fn connect(&self, channel_id: ChannelId) -> Result<(), PresenceError> {
        let result = self.establish(channel_id).await;

        if result.is_err() {
            if let Err(e) = self.songbird.remove(self.guild_id).await {
                tracing::debug!("No call to drop after failed join: {:?}", e);
            }
        }

        result
    }

    async fn disconnect(&self) -> Result<bool, PresenceError> {
        if self.songbird.get(self.guild_id).is_none() {
            return Ok(false);
        }

        self.songbird.remove(self.guild_id).await?;

        Ok(true)
    }

    async fn fetch_member(&self, user_id: UserId) -> Result<String, PresenceError> {
        let member = self
            .guild_id
            .member((&self.cache, self.http.as_ref()), user_id)
            .await
            .map_err(|e| {
                tracing::debug!("Failed to fetch member {}: {:?}", user_id, e);
                PresenceError::MemberNotFound(user_id)
            })?;

        Ok(member.display_name().to_string())
    }

    async fn move_member(
        &self,
        user_id: UserId,
        channel_id: ChannelId,
    ) -> Result<(), PresenceError> {
        self.guild_id
            .move_member((&self.cache, self.http.as_ref()), user_id, channel_id)
            .await?;

        Ok(())
    }
}

/// First source that knows a voice occupant's user.
///
/// Occupants nobody knows cannot be classified as human or bot and are left out of
/// the count.
pub fn first_known(
    user_id: UserId,
    sources: impl IntoIterator<Item = Option<Occupant>>,
) -> Option<Occupant> {
    let occupant = sources.into_iter().flatten().next();

    if occupant.is_none() {
        tracing::debug!("No user data for voice occupant {}, not counted", user_id);
    }

    occupant
}
