//! League data source: standings, scoreboards and rosters from the fantasy provider.

mod cache;
mod snapshot;

pub use cache::CachedSource;
pub use snapshot::{LeagueSnapshot, SnapshotSource, TeamPoints};

use crate::models::{PeriodResult, Team, TeamId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type SourceResult<T> = Result<T, SourceError>;

#[derive(Debug)]
pub enum SourceError {
    /// The provider could not be reached or is not set up.
    Unavailable(String),
    NotFound(String),
    Parse(String),
    Io(std::io::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Unavailable(msg) => write!(f, "League data unavailable: {msg}"),
            SourceError::NotFound(msg) => write!(f, "Not found: {msg}"),
            SourceError::Parse(msg) => write!(f, "Parse error: {msg}"),
            SourceError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        SourceError::Io(e)
    }
}

/// League metadata, including the period currently being played.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueInfo {
    pub league_id: String,
    pub name: String,
    pub num_teams: u32,
    pub current_period: u32,
    #[serde(default = "default_start_period")]
    pub start_period: u32,
    #[serde(default = "default_end_period")]
    pub end_period: u32,
}

fn default_start_period() -> u32 {
    1
}

fn default_end_period() -> u32 {
    17
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RosterPlayer {
    pub player_id: String,
    pub name: String,
    pub position: String,
    /// Pro team abbreviation.
    #[serde(default)]
    pub team: String,
    /// Lineup slot, "BN" for the bench.
    #[serde(default = "default_selected_position")]
    pub selected_position: String,
    #[serde(default)]
    pub points: f64,
}

fn default_selected_position() -> String {
    "BN".to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub team_id: TeamId,
    pub name: String,
    pub manager: String,
    pub period: u32,
    pub players: Vec<RosterPlayer>,
}

/// Read-only access to league data, normalized into bracket shapes.
#[async_trait]
pub trait LeagueSource: Send + Sync {
    async fn league_info(&self) -> SourceResult<LeagueInfo>;

    /// All teams, sorted by league rank.
    async fn standings(&self) -> SourceResult<Vec<Team>>;

    async fn scoreboard(&self, period: u32) -> SourceResult<PeriodResult>;

    /// One team's score for a period, for teams missing from the scoreboard
    /// (e.g. eliminated from the provider's own playoff view).
    async fn team_points(&self, team_id: &str, period: u32) -> SourceResult<Option<f64>>;

    async fn team_roster(&self, team_id: &str, period: u32) -> SourceResult<Option<Roster>>;

    async fn current_period(&self) -> SourceResult<u32> {
        Ok(self.league_info().await?.current_period)
    }
}
