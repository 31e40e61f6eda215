//! Test factory for creating Serenity User objects.
//!
//! This module provides factory functions for creating mock Serenity `User` structs
//! for testing purposes. These factories create valid User objects by deserializing
//! JSON, simulating what Discord's API would return.

use serenity::all::User;

/// Creates a test Serenity User with customizable fields.
///
/// Creates a User object by deserializing JSON with the provided values. Avatar,
/// banner and global name are left unset.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account username
/// - `bot` - Whether the account is a bot
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::user::create_test_user;
///
/// let human = create_test_user(123456789, "alice", false);
/// let bot = create_test_user(987654321, "greeter", true);
/// assert!(bot.bot);
/// ```
pub fn create_test_user(user_id: u64, username: &str, bot: bool) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": bot,
        "public_flags": 0,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
