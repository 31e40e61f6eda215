//! Which voice state changes lead to router work, and after what delay.

use serenity::all::UserId;
use std::time::Duration;

use super::PresenceSettings;
use crate::model::presence::{EvaluationReason, VoiceTransition};

/// Wait after a voice change in main before counting, so the cache settles.
pub const SETTLE_DELAY: Duration = Duration::from_secs(1);

/// Wait after a dropped or failing connection before trying again.
pub const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Wait before pulling the designated user back into main.
pub const RELOCATE_DELAY: Duration = Duration::from_millis(500);

/// Work requested in response to a voice state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Evaluate the routing policy after `delay`.
    Evaluate {
        delay: Duration,
        reason: EvaluationReason,
    },
    /// Move the designated user to main after `delay`, then evaluate after
    /// [`SETTLE_DELAY`].
    RelocateDesignated { delay: Duration },
}

impl PresenceSettings {
    /// Maps a voice state change onto the router work it should cause.
    ///
    /// Checked in order: the agent's own state, the designated user, then anyone
    /// entering or leaving main. The first matching rule decides; a designated user
    /// event never falls through to the main channel rule.
    ///
    /// # Arguments
    /// - `transition` - The user's channel before and after the update
    /// - `agent_id` - The bot's own user id
    ///
    /// # Returns
    /// - `Some(Reaction)` - Work to schedule
    /// - `None` - The change is irrelevant to routing
    pub fn react_to(&self, transition: &VoiceTransition, agent_id: UserId) -> Option<Reaction> {
        let main = self.channels.main;

        if transition.user_id == agent_id {
            return match (transition.old_channel, transition.new_channel) {
                (Some(_), None) => Some(Reaction::Evaluate {
                    delay: RECONNECT_DELAY,
                    reason: EvaluationReason::AgentDisconnected,
                }),
                _ => None,
            };
        }

        if self.designated_user == Some(transition.user_id) {
            let follow_up = Reaction::Evaluate {
                delay: SETTLE_DELAY,
                reason: EvaluationReason::DesignatedUser,
            };

            return match (transition.old_channel, transition.new_channel) {
                (None, Some(new)) if new == main => Some(follow_up),
                (None, Some(_)) => Some(Reaction::RelocateDesignated {
                    delay: RELOCATE_DELAY,
                }),
                // Switching into main is left alone; they already arrived where the
                // relocation would have sent them.
                (Some(old), Some(new)) if old != new && new != main => {
                    Some(Reaction::RelocateDesignated {
                        delay: RELOCATE_DELAY,
                    })
                }
                (Some(old), None) if old == main => Some(follow_up),
                _ => None,
            };
        }

        if transition.touches(main) {
            return Some(Reaction::Evaluate {
                delay: SETTLE_DELAY,
                reason: EvaluationReason::MainChannelActivity,
            });
        }

        None
    }
}
