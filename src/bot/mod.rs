//! Discord bot integration for voice presence routing.
//!
//! This module connects the presence router to Discord. Serenity delivers gateway
//! events to [`handler::Handler`], which turns them into dispatcher tasks; songbird
//! manages the agent's single voice connection through [`platform::DiscordPlatform`];
//! [`connection`] watches that connection for drops.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel cache, needed to resolve the configured channels
//! - `GUILD_VOICE_STATES` - Voice state updates, the main routing trigger
//! - `GUILD_MESSAGES` - Messages carrying text commands
//! - `MESSAGE_CONTENT` - Message bodies for command matching (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application. Moving the designated
//! user also needs the Move Members permission in the guild.

pub mod connection;
pub mod handler;
pub mod platform;
pub mod start;

#[cfg(test)]
mod test;
