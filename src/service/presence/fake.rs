//! In-memory [`VoicePlatform`] for router and dispatcher tests.
//!
//! Clones share state, so a test keeps one clone for inspection after handing the
//! other to a router.

use serenity::all::{ChannelId, UserId};
use serenity::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use super::VoicePlatform;
use crate::{
    error::presence::PresenceError,
    model::presence::{Occupant, VoiceChannel},
};

pub const AGENT_ID: u64 = 1;
pub const MAIN_ID: u64 = 200;
pub const WAITING_ID: u64 = 300;
pub const TEXT_ID: u64 = 400;

#[derive(Default)]
pub struct FakeState {
    pub guild_available: bool,
    pub channels: HashMap<ChannelId, (String, bool)>,
    pub occupants: HashMap<ChannelId, Vec<Occupant>>,
    pub members: HashSet<UserId>,
    pub current: Option<ChannelId>,
    pub connects: Vec<ChannelId>,
    pub disconnects: usize,
    pub moves: Vec<(UserId, ChannelId)>,
    pub fail_connect: bool,
    pub reject_moves: bool,
}

#[derive(Clone)]
pub struct FakePlatform {
    state: Arc<Mutex<FakeState>>,
}

impl FakePlatform {
    /// A guild with the main and waiting area voice channels, a text channel, and
    /// the agent not connected.
    pub fn new() -> Self {
        let mut state = FakeState {
            guild_available: true,
            ..Default::default()
        };
        state
            .channels
            .insert(ChannelId::new(MAIN_ID), ("Main".to_string(), true));
        state
            .channels
            .insert(ChannelId::new(WAITING_ID), ("Waiting".to_string(), true));
        state
            .channels
            .insert(ChannelId::new(TEXT_ID), ("general".to_string(), false));

        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    /// Puts `count` humans with ids starting at 100 into a channel.
    pub fn with_humans(self, channel_id: u64, count: u64) -> Self {
        {
            let mut state = self.state();
            let occupants = state.occupants.entry(ChannelId::new(channel_id)).or_default();
            for id in 100..100 + count {
                occupants.push(Occupant {
                    user_id: UserId::new(id),
                    bot: false,
                });
            }
        }
        self
    }

    pub fn with_occupant(self, channel_id: u64, user_id: u64, bot: bool) -> Self {
        self.state()
            .occupants
            .entry(ChannelId::new(channel_id))
            .or_default()
            .push(Occupant {
                user_id: UserId::new(user_id),
                bot,
            });
        self
    }

    pub fn with_member(self, user_id: u64) -> Self {
        self.state().members.insert(UserId::new(user_id));
        self
    }

    pub fn connected_to(self, channel_id: u64) -> Self {
        self.state().current = Some(ChannelId::new(channel_id));
        self
    }

    pub fn set_humans(&self, channel_id: u64, count: u64) {
        self.state().occupants.remove(&ChannelId::new(channel_id));
        let _ = self.clone().with_humans(channel_id, count);
    }

    pub fn connect_count(&self) -> usize {
        self.state().connects.len()
    }

    pub fn current(&self) -> Option<ChannelId> {
        self.state().current
    }
}

#[async_trait]
impl VoicePlatform for FakePlatform {
    fn agent_id(&self) -> Option<UserId> {
        Some(UserId::new(AGENT_ID))
    }

    fn voice_occupants(&self, channel_id: ChannelId) -> Option<Vec<Occupant>> {
        let state = self.state();
        if !state.guild_available || !state.channels.contains_key(&channel_id) {
            return None;
        }
        Some(state.occupants.get(&channel_id).cloned().unwrap_or_default())
    }

    fn resolve_voice_channel(&self, channel_id: ChannelId) -> Result<VoiceChannel, PresenceError> {
        let state = self.state();
        if !state.guild_available {
            return Err(PresenceError::GuildNotFound(serenity::all::GuildId::new(1)));
        }
        match state.channels.get(&channel_id) {
            Some((name, true)) => Ok(VoiceChannel {
                id: channel_id,
                name: name.clone(),
            }),
            Some((_, false)) => Err(PresenceError::NotVoiceChannel(channel_id)),
            None => Err(PresenceError::ChannelNotFound(channel_id)),
        }
    }

    async fn current_channel(&self) -> Option<ChannelId> {
        self.state().current
    }

    async fn connect(&self, channel_id: ChannelId) -> Result<(), PresenceError> {
        let mut state = self.state();
        state.connects.push(channel_id);
        if state.fail_connect {
            return Err(PresenceError::JoinErr(songbird::error::JoinError::NoCall));
        }
        state.current = Some(channel_id);
        Ok(())
    }

    async fn disconnect(&self) -> Result<bool, PresenceError> {
        let mut state = self.state();
        if state.current.take().is_some() {
            state.disconnects += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn fetch_member(&self, user_id: UserId) -> Result<String, PresenceError> {
        if self.state().members.contains(&user_id) {
            Ok(format!("user-{}", user_id))
        } else {
            Err(PresenceError::MemberNotFound(user_id))
        }
    }

    async fn move_member(
        &self,
        user_id: UserId,
        channel_id: ChannelId,
    ) -> Result<(), PresenceError> {
        let mut state = self.state();
        if state.reject_moves {
            return Err(PresenceError::MemberNotFound(user_id));
        }
        state.moves.push((user_id, channel_id));
        Ok(())
    }
}
