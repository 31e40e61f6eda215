use dioxus_logger::tracing::Level;
use serenity::all::{ChannelId, GuildId, UserId};

use crate::error::config::ConfigError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

pub struct Config {
    pub bot_token: String,

    pub guild_id: GuildId,
    pub main_channel_id: ChannelId,
    pub waiting_area_id: ChannelId,
    pub target_user_id: Option<UserId>,

    pub port: u16,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `from_env` passes `std::env::var`; tests pass a map. Empty values count as
    /// unset so a blank `TARGET_USER_ID=` line in `.env` disables the target user.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require = |name: &str| {
            get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let port = match get("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|e| invalid("PORT", &value, e.to_string()))?,
            None => DEFAULT_PORT,
        };

        let log_level = match get("LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse::<Level>()
                .map_err(|e| invalid("LOG_LEVEL", &value, e.to_string()))?,
            None => DEFAULT_LOG_LEVEL,
        };

        Ok(Self {
            bot_token: require("BOT_TOKEN")?,
            guild_id: GuildId::new(parse_id("GUILD_ID", &require("GUILD_ID")?)?),
            main_channel_id: ChannelId::new(parse_id("CHANNEL_ID", &require("CHANNEL_ID")?)?),
            waiting_area_id: ChannelId::new(parse_id(
                "WAITING_AREA_ID",
                &require("WAITING_AREA_ID")?,
            )?),
            target_user_id: get("TARGET_USER_ID")
                .map(|value| parse_id("TARGET_USER_ID", &value).map(UserId::new))
                .transpose()?,
            port,
            log_level,
        })
    }
}

/// Parses a Discord snowflake, rejecting zero since serenity ids must be non-zero.
fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(invalid(name, value, "id must be non-zero".to_string())),
        Ok(id) => Ok(id),
        Err(e) => Err(invalid(name, value, e.to_string())),
    }
}

fn invalid(name: &str, value: &str, reason: String) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    }
}
