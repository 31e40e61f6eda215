//! Business logic for voice presence routing.
//!
//! The service layer owns the routing decisions. It never talks to serenity or
//! songbird directly; all Discord access goes through the
//! [`presence::VoicePlatform`] trait, implemented for the live bot in
//! `bot::platform` and by an in-memory fake in tests.

pub mod presence;
