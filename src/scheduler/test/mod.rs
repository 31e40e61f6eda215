use crate::{
    model::{
        command::Command,
        presence::{EvaluationReason, PresenceChannels},
    },
    scheduler::dispatcher::{self, Dispatcher, DispatcherHandle, Task},
    service::presence::{
        command::CommandReply,
        fake::{FakePlatform, MAIN_ID, WAITING_ID},
        triggers::{RECONNECT_DELAY, RELOCATE_DELAY, SETTLE_DELAY},
        PresenceRouter, PresenceSettings,
    },
};
use serenity::all::{ChannelId, UserId};
use std::time::Duration;
use tokio::time::sleep;

mod dispatcher_run;

const TARGET_USER: u64 = 500;

/// Spawns a dispatcher over `platform` and returns its handle.
fn spawn_dispatcher(platform: &FakePlatform) -> DispatcherHandle {
    let settings = PresenceSettings {
        channels: PresenceChannels {
            main: ChannelId::new(MAIN_ID),
            waiting_area: ChannelId::new(WAITING_ID),
        },
        designated_user: Some(UserId::new(TARGET_USER)),
    };
    let (handle, inbox) = dispatcher::channel();
    let router = PresenceRouter::new(platform.clone(), settings);
    tokio::spawn(Dispatcher::new(router, inbox).run());
    handle
}

