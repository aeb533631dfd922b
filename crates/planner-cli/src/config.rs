use chrono_tz::Tz;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use planner_core::date::validate_timezone;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for environment overrides (`TODO_PORT`, `TODO_DBFILE`, ...).
pub const ENV_PREFIX: &str = "TODO_";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// SQLite database file (`TODO_DBFILE`)
    #[serde(rename = "dbfile")]
    pub database_path: PathBuf,
    /// HTTP port (`TODO_PORT`)
    pub port: u16,
    /// Directory with the static front end (`TODO_WEB_DIR`)
    pub web_dir: PathBuf,
    /// IANA timezone deciding what "today" is (`TODO_TIMEZONE`)
    pub timezone: String,
    /// Default page size for listings (`TODO_LIST_LIMIT`)
    pub list_limit: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("scheduler.db"),
            port: 7540,
            web_dir: PathBuf::from("./web"),
            timezone: detect_system_timezone(),
            list_limit: planner_core::models::DEFAULT_TASK_LIMIT,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("planner.toml"))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// The configured timezone, falling back to UTC when it is not a valid
    /// IANA name.
    pub fn tz(&self) -> Tz {
        validate_timezone(&self.timezone).unwrap_or_else(|_| {
            tracing::warn!(timezone = %self.timezone, "unknown timezone in config, using UTC");
            Tz::UTC
        })
    }
}

/// Detects the system timezone, falling back to UTC if detection fails
pub fn detect_system_timezone() -> String {
    // Method 1: Check TZ environment variable
    if let Ok(tz) = std::env::var("TZ") {
        if validate_timezone(&tz).is_ok() {
            return tz;
        }
    }

    // Method 2: Try to read from /etc/timezone (Linux)
    #[cfg(target_os = "linux")]
    {
        if let Ok(tz) = std::fs::read_to_string("/etc/timezone") {
            let tz = tz.trim();
            if validate_timezone(tz).is_ok() {
                return tz.to_string();
            }
        }
    }

    // Method 3: Ask the platform
    if let Ok(local_tz) = iana_time_zone::get_timezone() {
        if validate_timezone(&local_tz).is_ok() {
            return local_tz;
        }
    }

    // Fallback to UTC
    "UTC".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let config = Config::new()?;
            assert_eq!(config.database_path, PathBuf::from("scheduler.db"));
            assert_eq!(config.port, 7540);
            assert_eq!(config.list_limit, 50);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "planner.toml",
                r#"
                port = 8080
                timezone = "Europe/Moscow"
                "#,
            )?;
            jail.set_env("TODO_PORT", "9000");
            jail.set_env("TODO_DBFILE", "/tmp/tasks.db");

            let config = Config::new()?;
            assert_eq!(config.port, 9000);
            assert_eq!(config.database_path, PathBuf::from("/tmp/tasks.db"));
            assert_eq!(config.timezone, "Europe/Moscow");
            assert_eq!(config.tz(), chrono_tz::Europe::Moscow);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_timezone_falls_back_to_utc() {
        let config = Config {
            timezone: "Mars/Olympus_Mons".to_string(),
            ..Config::default()
        };
        assert_eq!(config.tz(), Tz::UTC);
    }
}
