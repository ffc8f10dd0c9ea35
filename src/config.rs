//! Runtime configuration read from the environment: bracket layout, playoff weeks,
//! cache lifetimes and server settings.

use chrono::{Datelike, Utc};
use std::path::PathBuf;
use std::time::Duration;

/// The only bracket size the three-round layout (two byes) supports.
pub const SUPPORTED_BRACKET_SIZE: usize = 6;

/// Latest start week that still leaves room for the semifinal and final weeks.
pub const MAX_FIRST_PERIOD: u32 = u32::MAX - 2;

/// Invalid configuration value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A variable is set but does not parse.
    InvalidValue { key: &'static str, value: String },
    /// Entrant count other than the supported layout.
    UnsupportedBracketSize(usize),
    /// Playoffs must start at period 1 or later.
    InvalidFirstPeriod(u32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => write!(f, "Invalid value for {}: {:?}", key, value),
            ConfigError::UnsupportedBracketSize(n) => write!(
                f,
                "Bracket size {} is not supported (must be {})",
                n, SUPPORTED_BRACKET_SIZE
            ),
            ConfigError::InvalidFirstPeriod(p) => write!(
                f,
                "Playoff start week must be between 1 and {} (got {})",
                MAX_FIRST_PERIOD, p
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Periods the three rounds are played in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlayoffSchedule {
    pub quarterfinals: u32,
    pub semifinals: u32,
    pub final_round: u32,
}

/// Bracket size and the fixed period the quarterfinals are played in.
///
/// Rounds always run in three consecutive periods starting at `first_period`,
/// whatever the current period is when the bracket is built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BracketConfig {
    pub entrant_count: usize,
    pub first_period: u32,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            entrant_count: SUPPORTED_BRACKET_SIZE,
            first_period: 15,
        }
    }
}

impl BracketConfig {
    pub fn new(entrant_count: usize, first_period: u32) -> Result<Self, ConfigError> {
        let config = Self {
            entrant_count,
            first_period,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entrant_count != SUPPORTED_BRACKET_SIZE {
            return Err(ConfigError::UnsupportedBracketSize(self.entrant_count));
        }
        if self.first_period == 0 || self.first_period > MAX_FIRST_PERIOD {
            return Err(ConfigError::InvalidFirstPeriod(self.first_period));
        }
        Ok(())
    }

    pub fn schedule(&self) -> PlayoffSchedule {
        PlayoffSchedule {
            quarterfinals: self.first_period,
            semifinals: self.first_period.saturating_add(1),
            final_round: self.first_period.saturating_add(2),
        }
    }
}

/// How long each kind of upstream data stays cached.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CacheConfig {
    pub league_info: Duration,
    pub standings: Duration,
    /// Live scores and per-team score lookups.
    pub scoreboards: Duration,
    pub rosters: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            league_info: Duration::from_secs(60),
            standings: Duration::from_secs(60),
            scoreboards: Duration::from_secs(15),
            rosters: Duration::from_secs(15 * 60),
        }
    }
}

/// Everything the web binary needs.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub league_id: Option<String>,
    pub season: i32,
    /// League snapshot file read by the data source.
    pub data_path: PathBuf,
    /// Upper bound on each per-team score lookup during a refresh.
    pub fetch_timeout: Duration,
    pub bracket: BracketConfig,
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Read from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read using an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bracket = BracketConfig::new(
            parse_or(&get, "WAFFLE_BOWL_TEAMS", SUPPORTED_BRACKET_SIZE)?,
            parse_or(&get, "WAFFLE_BOWL_START_WEEK", 15)?,
        )?;

        let cache = CacheConfig {
            scoreboards: Duration::from_secs(parse_or(&get, "CACHE_LIVE_SCORES", 15)?),
            ..CacheConfig::default()
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&get, "PORT", 8080)?,
            league_id: get("LEAGUE_ID"),
            season: parse_or(&get, "NFL_SEASON", Utc::now().year())?,
            data_path: get("WAFFLE_BOWL_DATA")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("league.json")),
            fetch_timeout: Duration::from_secs(parse_or(&get, "FETCH_TIMEOUT_SECS", 10)?),
            bracket,
            cache,
        })
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}
