use crate::{
    model::{
        command::Command,
        presence::{EvaluationReason, PresenceChannels, PresenceTarget, VoiceTransition},
    },
    service::presence::{
        command::CommandReply,
        fake::{FakePlatform, AGENT_ID, MAIN_ID, TEXT_ID, WAITING_ID},
        joiner::JoinOutcome,
        occupancy::count_humans_in,
        policy::{decide, Decision},
        relocator::RelocationOutcome,
        triggers::{Reaction, RECONNECT_DELAY, RELOCATE_DELAY, SETTLE_DELAY},
        PresenceRouter, PresenceSettings,
    },
};
use serenity::all::{ChannelId, UserId};


const TARGET_USER: u64 = 500;

fn channels() -> PresenceChannels {
    PresenceChannels {
        main: ChannelId::new(MAIN_ID),
        waiting_area: ChannelId::new(WAITING_ID),
    }
}

fn settings(designated_user: Option<u64>) -> PresenceSettings {
    PresenceSettings {
        channels: channels(),
        designated_user: designated_user.map(UserId::new),
    }
}

fn router(platform: &FakePlatform) -> PresenceRouter<FakePlatform> {
    PresenceRouter::new(platform.clone(), settings(Some(TARGET_USER)))
}
