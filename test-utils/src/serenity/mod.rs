//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (User, VoiceState, Message) for testing purposes. These factories create valid Serenity
//! objects by deserializing JSON, simulating what Discord's gateway would send.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_user, create_test_voice_state};
//!
//! #[test]
//! fn test_transition() {
//!     let user = create_test_user(10, "alice", false);
//!     let old = create_test_voice_state(10, 1, Some(200));
//!     let new = create_test_voice_state(10, 1, None);
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `message::create_test_message` - Create Serenity Message objects
//! - `user::create_test_user` - Create Serenity User objects
//! - `voice_state::create_test_voice_state` - Create Serenity VoiceState objects

pub mod message;
pub mod user;
pub mod voice_state;

// Re-export commonly used functions for convenience
pub use message::create_test_message;
pub use user::create_test_user;
pub use voice_state::create_test_voice_state;
