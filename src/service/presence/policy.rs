use dioxus_logger::tracing;
use serenity::all::ChannelId;

use super::{PresenceRouter, VoicePlatform};
use crate::model::presence::{EvaluationReason, PresenceChannels, PresenceTarget};

/// What the routing policy wants the agent to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Join (or stay in) the target channel.
    Join(PresenceTarget),
    /// Leave the connection as it is.
    Stay,
}

/// Routing table.
///
/// | humans in main | agent in     | decision          |
/// |----------------|--------------|-------------------|
/// | 1              | any          | join main         |
/// | 2+             | any          | join waiting area |
/// | 0              | main         | stay              |
/// | 0              | other / none | join waiting area |
pub fn decide(
    main_humans: usize,
    current_channel: Option<ChannelId>,
    channels: &PresenceChannels,
) -> Decision {
    match main_humans {
        1 => Decision::Join(PresenceTarget::Main),
        0 if current_channel == Some(channels.main) => Decision::Stay,
        0 => Decision::Join(PresenceTarget::WaitingArea),
        _ => Decision::Join(PresenceTarget::WaitingArea),
    }
}

impl<P: VoicePlatform> PresenceRouter<P> {
    /// Re-runs the routing policy against current occupancy and connection.
    ///
    /// Nothing is carried between calls, so a late or duplicate evaluation still
    /// acts on fresh state.
    ///
    /// # Returns
    /// - `usize` - Humans counted in the main channel
    pub async fn evaluate(&self, reason: EvaluationReason) -> usize {
        let channels = self.settings.channels;

        // A dropped call still reports its channel; discard it so the join below
        // reconnects instead of short-circuiting.
        if reason == EvaluationReason::ConnectionError {
            if let Err(e) = self.platform.disconnect().await {
                tracing::warn!("Failed to drop broken voice connection: {}", e);
            }
        }

        let main_humans = self.count_humans(channels.main);

        tracing::info!("Users in main channel: {} ({})", main_humans, reason);

        let current_channel = self.platform.current_channel().await;

        match decide(main_humans, current_channel, &channels) {
            Decision::Join(target) => {
                tracing::info!("Joining/staying in {}", target);
                self.join_target(target).await;
            }
            Decision::Stay => tracing::info!("Alone in main channel, staying"),
        }

        main_humans
    }
}
