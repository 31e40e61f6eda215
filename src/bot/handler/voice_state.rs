use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, VoiceState};

use super::Handler;
use crate::{
    model::presence::{EvaluationReason, VoiceTransition},
    scheduler::dispatcher::{DispatcherHandle, Task},
    service::presence::triggers::Reaction,
};

/// Handle a voice state change in any guild the bot can see
///
/// Events from other guilds are dropped. For the configured guild the change is
/// mapped to a [`Reaction`] and scheduled on the dispatcher; the handler itself
/// returns immediately.
pub async fn handle_voice_state_update(
    handler: &Handler,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(transition) = transition_in_guild(handler.guild_id, old.as_ref(), &new) else {
        return;
    };

    let agent_id = ctx.cache.current_user().id;

    if let Some(reaction) = handler.settings.react_to(&transition, agent_id) {
        schedule_reaction(&handler.dispatcher, reaction);
    }
}

/// Builds the transition for a voice state update, if it belongs to `guild_id`.
pub fn transition_in_guild(
    guild_id: GuildId,
    old: Option<&VoiceState>,
    new: &VoiceState,
) -> Option<VoiceTransition> {
    if new.guild_id != Some(guild_id) {
        return None;
    }

    Some(VoiceTransition::from_states(old, new))
}

/// Queues the dispatcher work for a reaction.
pub fn schedule_reaction(dispatcher: &DispatcherHandle, reaction: Reaction) {
    match reaction {
        Reaction::Evaluate { delay, reason } => {
            match reason {
                EvaluationReason::AgentDisconnected => tracing::warn!(
                    "Bot was disconnected from voice, re-checking in {}s",
                    delay.as_secs()
                ),
                EvaluationReason::MainChannelActivity => {
                    tracing::info!("Voice state change detected in main channel")
                }
                _ => tracing::info!("Voice state change for target user"),
            }
            dispatcher.schedule(delay, Task::Evaluate(reason));
        }
        Reaction::RelocateDesignated { delay } => {
            tracing::info!(
                "Target user joined another channel, moving them to main in {}ms",
                delay.as_millis()
            );
            dispatcher.schedule(delay, Task::RelocateDesignated);
        }
    }
}
