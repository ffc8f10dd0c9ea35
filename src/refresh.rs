//! Refresh pipeline: fetch league data, seed and build the bracket, fold in every
//! played week, and compute the status.

use crate::config::BracketConfig;
use crate::logic::{apply_period_results, bracket_status, build_bracket, select_entrants};
use crate::models::{Bracket, BracketError, BracketStatus, MatchupId, PeriodResult, Team, TeamId};
use crate::source::{LeagueSource, Roster, SourceError};
use futures_util::future::join_all;
use serde::Serialize;
use std::time::Duration;

/// Anything that stops a bracket from being produced.
#[derive(Debug)]
pub enum RefreshError {
    Source(SourceError),
    Bracket(BracketError),
}

impl std::fmt::Display for RefreshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshError::Source(e) => write!(f, "{}", e),
            RefreshError::Bracket(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RefreshError {}

impl From<SourceError> for RefreshError {
    fn from(e: SourceError) -> Self {
        RefreshError::Source(e)
    }
}

impl From<BracketError> for RefreshError {
    fn from(e: BracketError) -> Self {
        RefreshError::Bracket(e)
    }
}

/// A bracket as of the current period, ready to render.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BracketView {
    pub bracket: Bracket,
    pub status: BracketStatus,
    /// Unresolved ties found while folding results.
    pub ties: Vec<MatchupId>,
}

/// Build the bracket from scratch and fold in every week up to the current one.
///
/// A week whose scoreboard cannot be fetched stops the fold; the bracket built so
/// far is still returned.
pub async fn refresh_bracket(
    source: &dyn LeagueSource,
    config: &BracketConfig,
    fetch_timeout: Duration,
) -> Result<BracketView, RefreshError> {
    let (standings, current_period) = tokio::try_join!(source.standings(), source.current_period())?;

    let entrants = select_entrants(&standings, config.entrant_count)?;
    let mut bracket = build_bracket(entrants, config)?;
    let mut ties = Vec::new();

    for period in bracket.periods() {
        if period > current_period {
            break;
        }
        let mut results = match source.scoreboard(period).await {
            Ok(results) => results,
            Err(e) => {
                log::warn!("Could not fetch week {} scoreboard: {}", period, e);
                break;
            }
        };
        fill_missing_scores(source, &bracket.entrants, &mut results, fetch_timeout).await;

        let outcome = apply_period_results(&mut bracket, &results, current_period);
        ties.extend(outcome.ties.iter().copied());
    }

    let status = bracket_status(&bracket, current_period);
    Ok(BracketView { bracket, status, ties })
}

/// Look up scores for entrants the scoreboard left out, all at once, each bounded by
/// `fetch_timeout`. Every lookup finishes (or times out) before this returns.
async fn fill_missing_scores(
    source: &dyn LeagueSource,
    entrants: &[Team],
    results: &mut PeriodResult,
    fetch_timeout: Duration,
) {
    let period = results.period;
    let missing: Vec<&TeamId> = entrants
        .iter()
        .map(|t| &t.id)
        .filter(|id| !results.team_points.contains_key(id.as_str()))
        .collect();
    if missing.is_empty() {
        return;
    }
    log::debug!("Fetching week {} scores for {} team(s) off the scoreboard", period, missing.len());

    let lookups = missing.iter().map(|&id| async move {
        let found = match tokio::time::timeout(fetch_timeout, source.team_points(id, period)).await {
            Ok(Ok(points)) => points,
            Ok(Err(e)) => {
                log::warn!("Score lookup for team {} in week {} failed: {}", id, period, e);
                None
            }
            Err(_) => {
                log::warn!("Score lookup for team {} in week {} timed out", id, period);
                None
            }
        };
        (id, found)
    });

    for (id, points) in join_all(lookups).await {
        if let Some(points) = points {
            results.team_points.insert(id.clone(), points);
        }
    }
}

/// A team's bracket record (with seed) or standings record, plus its roster.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeamDetails {
    pub team: Option<Team>,
    pub roster: Option<Roster>,
}

/// Details for one team in the given period. Missing team or roster data is `None`.
pub async fn team_details(
    source: &dyn LeagueSource,
    config: &BracketConfig,
    team_id: &str,
    period: u32,
) -> Result<TeamDetails, RefreshError> {
    let (standings, roster) = tokio::try_join!(source.standings(), source.team_roster(team_id, period))?;

    let entrant = match select_entrants(&standings, config.entrant_count) {
        Ok(entrants) => entrants.into_iter().find(|t| t.id == team_id),
        Err(_) => None,
    };
    let team = entrant.or_else(|| standings.into_iter().find(|t| t.id == team_id));
    Ok(TeamDetails { team, roster })
}
