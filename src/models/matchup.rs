//! Matchup, Side, and RoundKind for the three bracket rounds.

use crate::models::team::TeamResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which slot of a matchup.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

/// Round of the bracket a matchup belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundKind {
    Quarterfinals,
    Semifinals,
    Final,
}

impl RoundKind {
    pub fn label(&self) -> &'static str {
        match self {
            RoundKind::Quarterfinals => "Quarterfinals",
            RoundKind::Semifinals => "Semifinals",
            RoundKind::Final => "Waffle Bowl Final",
        }
    }
}

/// Fixed tag of each matchup slot in the bracket.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchupId {
    Qf1,
    Qf2,
    Sf1,
    Sf2,
    Final,
}

impl MatchupId {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchupId::Qf1 => "qf1",
            MatchupId::Qf2 => "qf2",
            MatchupId::Sf1 => "sf1",
            MatchupId::Sf2 => "sf2",
            MatchupId::Final => "final",
        }
    }
}

impl fmt::Display for MatchupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single head-to-head pairing. Empty slots wait on an earlier round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub id: MatchupId,
    pub team1: Option<TeamResult>,
    pub team2: Option<TeamResult>,
    /// None until the period is complete and the scores differ.
    pub loser: Option<Side>,
}

impl Matchup {
    pub fn new(id: MatchupId, team1: Option<TeamResult>, team2: Option<TeamResult>) -> Self {
        Self {
            id,
            team1,
            team2,
            loser: None,
        }
    }

    /// An empty matchup whose slots are filled by advancement.
    pub fn pending(id: MatchupId) -> Self {
        Self::new(id, None, None)
    }

    pub fn slot(&self, side: Side) -> Option<&TeamResult> {
        match side {
            Side::One => self.team1.as_ref(),
            Side::Two => self.team2.as_ref(),
        }
    }

    /// Both sides when both are known.
    pub fn teams_mut(&mut self) -> Option<(&mut TeamResult, &mut TeamResult)> {
        match (self.team1.as_mut(), self.team2.as_mut()) {
            (Some(t1), Some(t2)) => Some((t1, t2)),
            _ => None,
        }
    }

    pub fn is_decided(&self) -> bool {
        self.loser.is_some()
    }

    pub fn loser_team(&self) -> Option<&TeamResult> {
        self.loser.and_then(|side| self.slot(side))
    }

    pub fn winner_team(&self) -> Option<&TeamResult> {
        self.loser.and_then(|side| self.slot(side.other()))
    }
}
