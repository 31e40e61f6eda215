use crate::model::{
    command::Command,
    presence::{Occupant, PresenceChannels, PresenceTarget, VoiceTransition},
};
use serenity::all::{ChannelId, UserId};
use test_utils::serenity::{create_test_user, create_test_voice_state};
