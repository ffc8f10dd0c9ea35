//! One period's scores as delivered by the league data source.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Progress of a single upstream matchup within its period.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[serde(alias = "preevent")]
    NotStarted,
    #[serde(alias = "midevent")]
    InProgress,
    #[serde(alias = "postevent")]
    Final,
}

/// Status of one upstream pairing (any league matchup, not only bracket ones).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchupStatus {
    pub team_ids: [TeamId; 2],
    pub status: MatchStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodResult {
    pub period: u32,
    /// Points per team id. Teams missing here are scored 0.0.
    #[serde(default)]
    pub team_points: HashMap<TeamId, f64>,
    /// None when the provider sent no status data for the period.
    #[serde(default)]
    pub matchup_statuses: Option<Vec<MatchupStatus>>,
}

impl PeriodResult {
    pub fn new(period: u32) -> Self {
        Self {
            period,
            ..Self::default()
        }
    }

    pub fn with_points(mut self, team_id: impl Into<TeamId>, points: f64) -> Self {
        self.team_points.insert(team_id.into(), points);
        self
    }

    pub fn with_status(mut self, team1: impl Into<TeamId>, team2: impl Into<TeamId>, status: MatchStatus) -> Self {
        self.matchup_statuses.get_or_insert_with(Vec::new).push(MatchupStatus {
            team_ids: [team1.into(), team2.into()],
            status,
        });
        self
    }

    pub fn points_for(&self, team_id: &str) -> Option<f64> {
        self.team_points.get(team_id).copied()
    }

    /// True when status data is present and every reported matchup is final.
    /// An empty status list counts as final; missing status data does not.
    pub fn all_final(&self) -> bool {
        self.matchup_statuses
            .as_ref()
            .is_some_and(|statuses| statuses.iter().all(|m| m.status == MatchStatus::Final))
    }
}
