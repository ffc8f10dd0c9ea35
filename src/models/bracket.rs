//! Bracket, its rounds, BracketStatus and BracketError.

use crate::models::matchup::{Matchup, MatchupId, RoundKind};
use crate::models::team::Team;
use serde::{Deserialize, Serialize};

/// Errors from seeding, building or merging a bracket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BracketError {
    /// Standings are missing or empty; nothing can be rendered.
    InsufficientData,
    /// The number of entrants does not match the configured bracket size.
    InvalidBracketSize { expected: usize, found: usize },
    /// Both sides of a completed matchup scored the same; no loser is assigned.
    UnresolvedTie(MatchupId),
}

impl std::fmt::Display for BracketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketError::InsufficientData => write!(f, "No standings available to seed the bracket"),
            BracketError::InvalidBracketSize { expected, found } => {
                write!(f, "Need {} teams, got {}", expected, found)
            }
            BracketError::UnresolvedTie(id) => write!(f, "Matchup {} ended in a tie", id),
        }
    }
}

impl std::error::Error for BracketError {}

/// First round: two matchups plus the two teams sitting it out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quarterfinals {
    pub period: u32,
    pub matchups: [Matchup; 2],
    pub byes: [Team; 2],
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Semifinals {
    pub period: u32,
    pub matchups: [Matchup; 2],
}

/// The last-place game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinalRound {
    pub period: u32,
    pub matchup: Matchup,
}

/// Full bracket: seeded entrants (worst first) and the three rounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub entrants: Vec<Team>,
    pub quarterfinals: Quarterfinals,
    pub semifinals: Semifinals,
    pub final_round: FinalRound,
}

impl Bracket {
    pub fn period_of(&self, round: RoundKind) -> u32 {
        match round {
            RoundKind::Quarterfinals => self.quarterfinals.period,
            RoundKind::Semifinals => self.semifinals.period,
            RoundKind::Final => self.final_round.period,
        }
    }

    /// Round periods in play order.
    pub fn periods(&self) -> [u32; 3] {
        [
            self.quarterfinals.period,
            self.semifinals.period,
            self.final_round.period,
        ]
    }

    /// Round played in the given period, if any.
    pub fn round_for_period(&self, period: u32) -> Option<RoundKind> {
        [RoundKind::Quarterfinals, RoundKind::Semifinals, RoundKind::Final]
            .into_iter()
            .find(|&round| self.period_of(round) == period)
    }

    pub fn round_matchups(&self, round: RoundKind) -> &[Matchup] {
        match round {
            RoundKind::Quarterfinals => &self.quarterfinals.matchups,
            RoundKind::Semifinals => &self.semifinals.matchups,
            RoundKind::Final => std::slice::from_ref(&self.final_round.matchup),
        }
    }

    pub fn round_matchups_mut(&mut self, round: RoundKind) -> &mut [Matchup] {
        match round {
            RoundKind::Quarterfinals => &mut self.quarterfinals.matchups,
            RoundKind::Semifinals => &mut self.semifinals.matchups,
            RoundKind::Final => std::slice::from_mut(&mut self.final_round.matchup),
        }
    }

    /// The season's last-place team, once the final is decided.
    pub fn last_place(&self) -> Option<&Team> {
        self.final_round.matchup.loser_team().map(|t| &t.team)
    }
}

/// Where the bracket stands relative to the current period.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCode {
    Upcoming,
    Active,
    Complete,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BracketStatus {
    pub status: StatusCode,
    pub message: String,
    pub current_round: Option<RoundKind>,
    pub current_period: u32,
}
