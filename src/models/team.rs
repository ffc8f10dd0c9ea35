//! Team and TeamResult data structures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque upstream identifier for a team.
pub type TeamId = String;

/// A league team as it stands after the regular season.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub manager: String,
    pub wins: u32,
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    pub points_for: f64,
    #[serde(default)]
    pub points_against: f64,
    pub rank: u32,
    /// Bracket seed (1 = worst record). Only set on entrants.
    #[serde(default)]
    pub seed: Option<u32>,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>, wins: u32, losses: u32, points_for: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            manager: String::new(),
            wins,
            losses,
            ties: 0,
            points_for,
            points_against: 0.0,
            rank: 0,
            seed: None,
        }
    }
}

/// A team inside a matchup slot, with the points it scored in each bracket period so far.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamResult {
    pub team: Team,
    pub points_by_period: BTreeMap<u32, f64>,
}

impl TeamResult {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            points_by_period: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.team.id
    }

    /// Seed of the underlying team; 0 if it was never seeded.
    pub fn seed(&self) -> u32 {
        self.team.seed.unwrap_or(0)
    }

    /// Points for one period, if recorded.
    pub fn points(&self, period: u32) -> Option<f64> {
        self.points_by_period.get(&period).copied()
    }

    /// Set the score for a period. One entry per period; a later call for the same
    /// period replaces the live value.
    pub fn record_points(&mut self, period: u32, points: f64) {
        self.points_by_period.insert(period, points);
    }

    /// Total across every recorded bracket period.
    pub fn total_points(&self) -> f64 {
        self.points_by_period.values().sum()
    }
}
