use dioxus_logger::tracing;
use std::fmt;

use super::{relocator::RelocationOutcome, PresenceRouter, VoicePlatform};
use crate::model::{
    command::Command,
    presence::{EvaluationReason, PresenceTarget},
};

/// Result of a text command, rendered as the chat reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandReply {
    /// `$check` ran; carries the main channel head count.
    Checked(usize),
    /// `$join` / `$wait` requested a join.
    Joining(PresenceTarget),
    /// `$leave` destroyed the connection.
    Left,
    /// `$leave` found no connection.
    NotConnected,
    /// `$leave` could not tear the connection down.
    LeaveFailed,
    /// `$moveuser` outcome.
    Relocation(RelocationOutcome),
}

impl fmt::Display for CommandReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checked(count) => {
                write!(f, "Checking channels... Users in main channel: {}", count)
            }
            Self::Joining(target) => write!(f, "Joining {}...", target),
            Self::Left => write!(f, "Left voice channel!"),
            Self::NotConnected => write!(f, "Not in a voice channel!"),
            Self::LeaveFailed => write!(f, "Failed to leave voice channel."),
            Self::Relocation(RelocationOutcome::Moved) => {
                write!(f, "Moved target user to main channel!")
            }
            Self::Relocation(RelocationOutcome::Failed) => write!(f, "Failed to move target user."),
            Self::Relocation(RelocationOutcome::NoTarget) => {
                write!(f, "No target user configured!")
            }
        }
    }
}

impl<P: VoicePlatform> PresenceRouter<P> {
    /// Runs a text command and produces the reply.
    ///
    /// `$join` and `$wait` reply as soon as the join was attempted; failures are only
    /// logged, matching how the policy treats them.
    pub async fn execute(&self, command: Command) -> CommandReply {
        match command {
            Command::Check => CommandReply::Checked(self.evaluate(EvaluationReason::Command).await),
            Command::Join => {
                self.join_target(PresenceTarget::Main).await;
                CommandReply::Joining(PresenceTarget::Main)
            }
            Command::Wait => {
                self.join_target(PresenceTarget::WaitingArea).await;
                CommandReply::Joining(PresenceTarget::WaitingArea)
            }
            Command::Leave => match self.leave().await {
                Ok(true) => CommandReply::Left,
                Ok(false) => CommandReply::NotConnected,
                Err(e) => {
                    tracing::error!("Failed to leave voice channel: {}", e);
                    CommandReply::LeaveFailed
                }
            },
            Command::MoveUser => CommandReply::Relocation(self.relocate_designated().await),
        }
    }
}
