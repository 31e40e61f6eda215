//! Test factory for creating Serenity Message objects.
//!
//! Messages are built by deserializing the JSON of a gateway `MESSAGE_CREATE`
//! payload, with the author created by [`create_test_user`].

use serenity::all::Message;

use super::user::create_test_user;

/// Creates a test Serenity guild text message.
///
/// # Arguments
/// - `author_id` - Discord user ID of the author
/// - `bot` - Whether the author is a bot
/// - `channel_id` - Text channel the message was posted in
/// - `content` - Message body
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::message::create_test_message;
///
/// let message = create_test_message(123456789, false, 400, "$check");
/// assert_eq!(message.content, "$check");
/// ```
pub fn create_test_message(author_id: u64, bot: bool, channel_id: u64, content: &str) -> Message {
    let author = create_test_user(author_id, &format!("user-{}", author_id), bot);

    serde_json::from_value(serde_json::json!({
        "id": "1000",
        "channel_id": channel_id.to_string(),
        "author": author,
        "content": content,
        "timestamp": "2024-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "pinned": false,
        "webhook_id": null,
        "type": 0,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
