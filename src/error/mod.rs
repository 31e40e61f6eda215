//! Error types for startup and voice routing.
//!
//! `AppError` is the top-level type returned from `main` and startup helpers.
//! Routing failures use [`presence::PresenceError`] and are logged where they occur
//! rather than propagated, so a failing Discord call never takes the bot down.

pub mod config;
pub mod presence;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates everything that can stop the process during startup: bad
/// configuration, a Discord client that fails to build or connect, and the liveness
/// listener failing to bind.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// I/O error from the liveness listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
