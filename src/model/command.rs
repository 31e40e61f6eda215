//! Text commands for manual control of the agent.

/// Commands recognised in guild messages.
///
/// Matching is an exact, case-insensitive comparison against the whole message
/// content; there is no argument parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `$check` - evaluate the policy and report the main channel head count.
    Check,
    /// `$join` - force-join the main channel.
    Join,
    /// `$wait` - force-join the waiting area.
    Wait,
    /// `$leave` - drop the current voice connection.
    Leave,
    /// `$moveuser` - relocate the designated user to the main channel.
    MoveUser,
}

impl Command {
    pub fn parse(content: &str) -> Option<Self> {
        match content.to_lowercase().as_str() {
            "$check" => Some(Self::Check),
            "$join" => Some(Self::Join),
            "$wait" => Some(Self::Wait),
            "$leave" => Some(Self::Leave),
            "$moveuser" => Some(Self::MoveUser),
            _ => None,
        }
    }
}
