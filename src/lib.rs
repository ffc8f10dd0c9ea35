//! Waffle Bowl tracker: library with the loser's bracket models, logic, and league data access.

pub mod config;
pub mod logic;
pub mod models;
pub mod refresh;
pub mod source;

pub use config::{AppConfig, BracketConfig, CacheConfig, ConfigError, PlayoffSchedule};
pub use logic::{
    apply_period_results, bracket_status, build_bracket, is_period_complete, select_entrants, MergeOutcome,
};
pub use models::{
    Bracket, BracketError, BracketStatus, FinalRound, MatchStatus, Matchup, MatchupId, MatchupStatus,
    PeriodResult, Quarterfinals, RoundKind, Semifinals, Side, StatusCode, Team, TeamId, TeamResult,
};
pub use refresh::{refresh_bracket, team_details, BracketView, RefreshError, TeamDetails};
pub use source::{CachedSource, LeagueInfo, LeagueSource, Roster, RosterPlayer, SnapshotSource, SourceError};
