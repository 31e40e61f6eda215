//! Voice connection lifecycle events.
//!
//! Songbird reports driver state through global events on the `Call`. These are
//! logged, and a disconnect caused by a transport failure schedules a policy
//! re-evaluation after [`RECONNECT_DELAY`] rather than reconnecting on the spot.
//! Disconnects the agent asked for itself (leaving, switching channels) are only
//! logged.

use dioxus_logger::tracing;
use serenity::async_trait;
use songbird::{
    events::context_data::DisconnectReason, Call, CoreEvent, Event, EventContext,
    EventHandler as VoiceEventHandler,
};

use crate::{
    model::presence::EvaluationReason,
    scheduler::dispatcher::{DispatcherHandle, Task},
    service::presence::triggers::RECONNECT_DELAY,
};

/// Handler attached to every connection the agent establishes.
pub struct ConnectionEvents {
    dispatcher: DispatcherHandle,
}

impl ConnectionEvents {
    /// Attaches state logging and error recovery to a call.
    pub fn register(call: &mut Call, dispatcher: &DispatcherHandle) {
        for event in [
            CoreEvent::DriverConnect,
            CoreEvent::DriverReconnect,
            CoreEvent::DriverDisconnect,
        ] {
            call.add_global_event(
                Event::Core(event),
                ConnectionEvents {
                    dispatcher: dispatcher.clone(),
                },
            );
        }
    }
}

/// Whether a driver disconnect was caused by the connection failing.
///
/// `Requested` is reported for every `leave`/`remove`, and `AttemptDiscarded` for a
/// connection attempt superseded by a newer join. Neither is a drop.
pub fn is_transport_error(reason: Option<&DisconnectReason>) -> bool {
    !matches!(
        reason,
        None | Some(DisconnectReason::Requested) | Some(DisconnectReason::AttemptDiscarded)
    )
}

#[async_trait]
impl VoiceEventHandler for ConnectionEvents {
    async fn act(&self, ctx: &EventContext<'_>) -> Option<Event> {
        match ctx {
            EventContext::DriverConnect(data) => {
                tracing::info!(
                    "Connection state changed: connecting -> ready (channel {:?})",
                    data.channel_id
                );
            }
            EventContext::DriverReconnect(data) => {
                tracing::info!(
                    "Connection state changed: reconnecting -> ready (channel {:?})",
                    data.channel_id
                );
            }
            EventContext::DriverDisconnect(data) if is_transport_error(data.reason.as_ref()) => {
                tracing::error!(
                    "Connection error during {:?}: {:?}, re-checking in {}s",
                    data.kind,
                    data.reason,
                    RECONNECT_DELAY.as_secs()
                );
                self.dispatcher.schedule(
                    RECONNECT_DELAY,
                    Task::Evaluate(EvaluationReason::ConnectionError),
                );
            }
            EventContext::DriverDisconnect(data) => {
                tracing::info!(
                    "Connection state changed: ready -> disconnected ({:?})",
                    data.reason
                );
            }
            _ => {}
        }

        None
    }
}
