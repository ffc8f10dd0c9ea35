//! Data structures for the loser's bracket: teams, matchups, rounds, period results.

mod bracket;
mod matchup;
mod results;
mod team;

pub use bracket::{Bracket, BracketError, BracketStatus, FinalRound, Quarterfinals, Semifinals, StatusCode};
pub use matchup::{Matchup, MatchupId, RoundKind, Side};
pub use results::{MatchStatus, MatchupStatus, PeriodResult};
pub use team::{Team, TeamId, TeamResult};
