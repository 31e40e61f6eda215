//! Presence Router Test Utils
//!
//! Shared testing utilities for the presence router. The crate offers factories that
//! build serenity gateway models from JSON, so unit tests can feed handlers and
//! conversions the same payload shapes Discord sends.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_voice_state;
//!
//! #[test]
//! fn test_voice_update() {
//!     let state = create_test_voice_state(10, 1, Some(200));
//!     assert!(state.channel_id.is_some());
//! }
//! ```

pub mod serenity;
