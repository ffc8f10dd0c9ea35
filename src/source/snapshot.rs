//! League data read from a JSON snapshot file (exported from the provider).

use crate::models::{PeriodResult, Team, TeamId};
use crate::source::{LeagueInfo, LeagueSource, Roster, SourceError, SourceResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single team's score outside the scoreboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamPoints {
    pub team_id: TeamId,
    pub period: u32,
    pub points: f64,
}

/// Everything the source can answer, as stored on disk.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    pub info: LeagueInfo,
    pub standings: Vec<Team>,
    #[serde(default)]
    pub scoreboards: Vec<PeriodResult>,
    #[serde(default)]
    pub team_points: Vec<TeamPoints>,
    #[serde(default)]
    pub rosters: Vec<Roster>,
}

impl LeagueSnapshot {
    pub fn from_json(raw: &str) -> SourceResult<Self> {
        serde_json::from_str(raw).map_err(|e| SourceError::Parse(e.to_string()))
    }
}

/// Reads the snapshot file on every call so edits show up on the next refresh.
#[derive(Clone, Debug)]
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> SourceResult<LeagueSnapshot> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SourceError::Unavailable(format!("no league snapshot at {}", self.path.display()))
            } else {
                SourceError::Io(e)
            }
        })?;
        LeagueSnapshot::from_json(&raw)
    }
}

#[async_trait]
impl LeagueSource for SnapshotSource {
    async fn league_info(&self) -> SourceResult<LeagueInfo> {
        Ok(self.load().await?.info)
    }

    async fn standings(&self) -> SourceResult<Vec<Team>> {
        let mut teams = self.load().await?.standings;
        teams.sort_by_key(|t| t.rank);
        Ok(teams)
    }

    async fn scoreboard(&self, period: u32) -> SourceResult<PeriodResult> {
        self.load()
            .await?
            .scoreboards
            .into_iter()
            .find(|s| s.period == period)
            .ok_or_else(|| SourceError::NotFound(format!("scoreboard for week {period}")))
    }

    async fn team_points(&self, team_id: &str, period: u32) -> SourceResult<Option<f64>> {
        Ok(self
            .load()
            .await?
            .team_points
            .iter()
            .find(|p| p.team_id == team_id && p.period == period)
            .map(|p| p.points))
    }

    async fn team_roster(&self, team_id: &str, period: u32) -> SourceResult<Option<Roster>> {
        Ok(self
            .load()
            .await?
            .rosters
            .into_iter()
            .find(|r| r.team_id == team_id && r.period == period))
    }
}
