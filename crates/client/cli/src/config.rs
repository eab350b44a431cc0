//! Harness configuration loaded from the environment.

use std::env;
use std::path::PathBuf;

use banqi_core::GameConfig;

/// Settings shared by every subcommand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Rule switches for dealt games.
    pub rules: GameConfig,
    /// Self-play games still running after this many turns are abandoned.
    pub max_turns: u32,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
    /// Mirror logs to stderr as well as the log file.
    pub log_stderr: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            rules: GameConfig::default(),
            max_turns: Self::DEFAULT_MAX_TURNS,
            log_dir: None,
            log_stderr: false,
        }
    }
}

impl HarnessConfig {
    pub const DEFAULT_MAX_TURNS: u32 = 500;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BANQI_MAX_TURNS` - Turn cap for self-play games (default: 500)
    /// - `BANQI_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `BANQI_LOG_STDERR` - Also log to stderr (default: false)
    /// - `BANQI_POINT_BLANK_CANNON` - Cannon captures at zero screens (default: true)
    /// - `BANQI_FRIENDLY_CHAIN` - Friendly stacks keep chains alive (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(max_turns) = read_env::<u32>("BANQI_MAX_TURNS") {
            config.max_turns = max_turns.max(1);
        }
        if let Some(dir) = read_env::<PathBuf>("BANQI_LOG_DIR") {
            config.log_dir = Some(dir);
        }
        if let Some(enabled) = read_env_bool("BANQI_LOG_STDERR") {
            config.log_stderr = enabled;
        }

        if let Some(enabled) = read_env_bool("BANQI_POINT_BLANK_CANNON") {
            config.rules = config.rules.with_point_blank_cannon(enabled);
        }
        if let Some(enabled) = read_env_bool("BANQI_FRIENDLY_CHAIN") {
            config.rules = config.rules.with_friendly_chain(enabled);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
