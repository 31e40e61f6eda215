//! Test factory for creating Serenity VoiceState objects.
//!
//! Voice states are what the gateway sends in `VOICE_STATE_UPDATE`. The factory
//! builds them by deserializing JSON so tests exercise the same shape the bot
//! receives at runtime.

use serenity::all::VoiceState;

/// Creates a test Serenity VoiceState for a user in a guild.
///
/// All mute and deafen flags are false and no member payload is attached.
///
/// # Arguments
/// - `user_id` - Discord user ID the state belongs to
/// - `guild_id` - Discord guild ID
/// - `channel_id` - Voice channel the user is connected to, or `None` when disconnected
///
/// # Returns
/// - `VoiceState` - A valid Serenity VoiceState struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::voice_state::create_test_voice_state;
///
/// // User connected to channel 200
/// let joined = create_test_voice_state(10, 1, Some(200));
///
/// // Same user after disconnecting
/// let left = create_test_voice_state(10, 1, None);
/// ```
pub fn create_test_voice_state(user_id: u64, guild_id: u64, channel_id: Option<u64>) -> VoiceState {
    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "channel_id": channel_id.map(|id| id.to_string()),
        "user_id": user_id.to_string(),
        "member": null,
        "session_id": "test-session",
        "deaf": false,
        "mute": false,
        "self_deaf": false,
        "self_mute": false,
        "self_stream": false,
        "self_video": false,
        "suppress": false,
        "request_to_speak_timestamp": null,
    }))
    .expect("Failed to create test voice state - invalid JSON structure")
}
