//! Folding a period's results into the bracket: scores, losers, advancement.

use crate::models::{Bracket, BracketError, Matchup, MatchupId, PeriodResult, RoundKind, Side, TeamResult};

/// What a single `apply_period_results` call found.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MergeOutcome {
    /// Round played in the applied period, if any.
    pub round: Option<RoundKind>,
    /// Whether the period counted as finished.
    pub period_complete: bool,
    /// Matchups whose completed scores were equal.
    pub ties: Vec<MatchupId>,
}

impl MergeOutcome {
    pub fn errors(&self) -> impl Iterator<Item = BracketError> + '_ {
        self.ties.iter().map(|&id| BracketError::UnresolvedTie(id))
    }
}

/// A period is complete once it is in the past, or when it is the current period and
/// every reported matchup is final (an empty status list qualifies). Without any
/// status data the current period is treated as still running.
pub fn is_period_complete(period: u32, current_period: u32, results: Option<&PeriodResult>) -> bool {
    if current_period > period {
        return true;
    }
    if current_period < period {
        return false;
    }
    results.is_some_and(PeriodResult::all_final)
}

/// Lower score loses; equal scores leave the matchup undecided.
fn determine_loser(team1_points: f64, team2_points: f64) -> Option<Side> {
    if team1_points < team2_points {
        Some(Side::One)
    } else if team2_points < team1_points {
        Some(Side::Two)
    } else {
        None
    }
}

/// Record scores for one matchup and, if the period is complete, decide its loser.
/// Returns false for a completed tie. Decided matchups are left untouched.
fn score_matchup(matchup: &mut Matchup, results: &PeriodResult, complete: bool) -> bool {
    if matchup.is_decided() {
        return true;
    }
    let id = matchup.id;
    let period = results.period;
    let Some((team1, team2)) = matchup.teams_mut() else {
        log::debug!("Matchup {} has an open slot, skipping week {}", id, period);
        return true;
    };

    for team in [&mut *team1, &mut *team2] {
        let points = results.points_for(team.id()).unwrap_or_else(|| {
            log::warn!("No week {} score for {} ({}), using 0.0", period, team.team.name, team.id());
            0.0
        });
        team.record_points(period, points);
    }

    if !complete {
        return true;
    }
    let p1 = team1.points(period).unwrap_or(0.0);
    let p2 = team2.points(period).unwrap_or(0.0);
    match determine_loser(p1, p2) {
        Some(side) => {
            matchup.loser = Some(side);
            if let Some(loser) = matchup.loser_team() {
                log::info!("{}: {} loses {:.2} to {:.2}", id, loser.team.name, p1.min(p2), p1.max(p2));
            }
            true
        }
        None => {
            log::warn!("{}: tied at {:.2} in week {}, no loser assigned", id, p1, period);
            false
        }
    }
}

/// Fill the semifinal team1 slots once both quarterfinal losers are known.
///
/// The loser with the higher seed number (the better regular season among the two)
/// meets seed 1 in SF2; the other meets seed 2 in SF1.
fn advance_quarterfinal_losers(bracket: &mut Bracket) {
    let [qf1, qf2] = &bracket.quarterfinals.matchups;
    let (Some(qf1_loser), Some(qf2_loser)) = (qf1.loser_team(), qf2.loser_team()) else {
        return;
    };
    let [sf1, sf2] = &mut bracket.semifinals.matchups;
    if sf1.team1.is_some() || sf2.team1.is_some() {
        return;
    }

    let (better, worse) = if qf1_loser.seed() > qf2_loser.seed() {
        (qf1_loser, qf2_loser)
    } else {
        (qf2_loser, qf1_loser)
    };
    log::info!(
        "Semifinals set: {} vs seed 2, {} vs seed 1",
        worse.team.name,
        better.team.name
    );
    sf1.team1 = Some(worse.clone());
    sf2.team1 = Some(better.clone());
}

/// Fill the final once both semifinal losers are known.
fn advance_semifinal_losers(bracket: &mut Bracket) {
    let [sf1, sf2] = &bracket.semifinals.matchups;
    let (Some(sf1_loser), Some(sf2_loser)) = (sf1.loser_team(), sf2.loser_team()) else {
        return;
    };
    let final_matchup = &mut bracket.final_round.matchup;
    if final_matchup.team1.is_some() || final_matchup.team2.is_some() {
        return;
    }
    log::info!("Final set: {} vs {}", sf1_loser.team.name, sf2_loser.team.name);
    final_matchup.team1 = Some(TeamResult::clone(sf1_loser));
    final_matchup.team2 = Some(TeamResult::clone(sf2_loser));
}

/// Apply one period's results to the bracket in place.
///
/// Scores attach to the round played in `results.period`. Losers are only assigned once
/// that period is complete, and never change afterwards, so re-applying the same
/// results is a no-op. Advancement into later rounds runs on every call.
pub fn apply_period_results(bracket: &mut Bracket, results: &PeriodResult, current_period: u32) -> MergeOutcome {
    let complete = is_period_complete(results.period, current_period, Some(results));
    let round = bracket.round_for_period(results.period);
    let mut outcome = MergeOutcome {
        round,
        period_complete: complete,
        ties: Vec::new(),
    };

    match round {
        Some(round) => {
            log::debug!(
                "Applying week {} results to {} (complete: {})",
                results.period,
                round.label(),
                complete
            );
            for matchup in bracket.round_matchups_mut(round) {
                if !score_matchup(matchup, results, complete) {
                    outcome.ties.push(matchup.id);
                }
            }
        }
        None => log::debug!("Week {} is not a bracket week", results.period),
    }

    advance_quarterfinal_losers(bracket);
    advance_semifinal_losers(bracket);
    outcome
}
