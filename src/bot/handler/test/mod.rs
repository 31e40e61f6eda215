use crate::{
    bot::handler::{
        message::command_for,
        voice_state::{schedule_reaction, transition_in_guild},
    },
    model::{
        command::Command,
        presence::{EvaluationReason, PresenceChannels},
    },
    scheduler::dispatcher::{self, Dispatcher, DispatcherHandle},
    service::presence::{
        fake::{FakePlatform, MAIN_ID, WAITING_ID},
        triggers::{Reaction, RELOCATE_DELAY, SETTLE_DELAY},
        PresenceRouter, PresenceSettings,
    },
};
use serenity::all::{ChannelId, GuildId, UserId};
use std::time::Duration;
use test_utils::serenity::{create_test_message, create_test_voice_state};
use tokio::time::sleep;


const GUILD: u64 = 1;
const TARGET_USER: u64 = 500;

fn spawn_dispatcher(platform: &FakePlatform) -> DispatcherHandle {
    let settings = PresenceSettings {
        channels: PresenceChannels {
            main: ChannelId::new(MAIN_ID),
            waiting_area: ChannelId::new(WAITING_ID),
        },
        designated_user: Some(UserId::new(TARGET_USER)),
    };
    let (handle, inbox) = dispatcher::channel();
    tokio::spawn(Dispatcher::new(PresenceRouter::new(platform.clone(), settings), inbox).run());
    handle
}
