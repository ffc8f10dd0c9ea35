//! Integration tests for folding weekly results into the bracket.

mod common;

use common::{bracket, final_week, team_name, week, FINAL, QF, SF};
use waffle_bowl::{apply_period_results, is_period_complete, MatchStatus, MatchupId, PeriodResult, RoundKind, Side};

fn qf_results() -> PeriodResult {
    final_week(QF, &[("C", 80.0), ("F", 95.0), ("D", 70.0), ("E", 60.0)])
}

#[test]
fn quarterfinal_losers_advance_by_seed() {
    let mut b = bracket();
    let outcome = apply_period_results(&mut b, &qf_results(), QF);
    assert!(outcome.period_complete);
    assert_eq!(outcome.round, Some(RoundKind::Quarterfinals));
    assert!(outcome.ties.is_empty());

    let [qf1, qf2] = &b.quarterfinals.matchups;
    assert_eq!(team_name(qf1.loser_team()), Some("C"));
    assert_eq!(team_name(qf2.loser_team()), Some("E"));

    // E (seed 5) had the better season of the two losers and draws seed 1.
    let [sf1, sf2] = &b.semifinals.matchups;
    assert_eq!(team_name(sf1.team1.as_ref()), Some("C"));
    assert_eq!(team_name(sf1.team2.as_ref()), Some("B"));
    assert_eq!(team_name(sf2.team1.as_ref()), Some("E"));
    assert_eq!(team_name(sf2.team2.as_ref()), Some("A"));
}

#[test]
fn in_progress_week_records_scores_without_losers() {
    let mut b = bracket();
    let mut results = qf_results();
    results.matchup_statuses.as_mut().unwrap()[1].status = MatchStatus::InProgress;

    let outcome = apply_period_results(&mut b, &results, QF);
    assert!(!outcome.period_complete);
    for m in &b.quarterfinals.matchups {
        assert!(m.loser.is_none());
        assert!(m.team1.as_ref().unwrap().points(QF).is_some());
    }
    assert!(b.semifinals.matchups.iter().all(|m| m.team1.is_none()));
}

#[test]
fn past_week_is_complete_without_statuses() {
    let mut b = bracket();
    let results = week(QF, &[("C", 80.0), ("F", 95.0), ("D", 70.0), ("E", 60.0)], MatchStatus::InProgress);
    let results = PeriodResult {
        matchup_statuses: None,
        ..results
    };
    apply_period_results(&mut b, &results, SF);
    assert_eq!(b.quarterfinals.matchups[0].loser, Some(Side::One));
    assert_eq!(b.quarterfinals.matchups[1].loser, Some(Side::Two));
}

#[test]
fn future_week_never_assigns_losers() {
    let mut b = bracket();
    let outcome = apply_period_results(&mut b, &qf_results(), QF - 1);
    assert!(!outcome.period_complete);
    assert!(b.quarterfinals.matchups.iter().all(|m| m.loser.is_none()));
}

#[test]
fn completion_gate() {
    let done = final_week(QF, &[("C", 1.0), ("F", 2.0)]);
    let live = week(QF, &[("C", 1.0), ("F", 2.0)], MatchStatus::NotStarted);
    assert!(is_period_complete(QF, SF, None));
    assert!(!is_period_complete(QF, QF - 1, Some(&done)));
    assert!(is_period_complete(QF, QF, Some(&done)));
    assert!(!is_period_complete(QF, QF, Some(&live)));
    assert!(!is_period_complete(QF, QF, None));

    let no_status_data = PeriodResult::new(QF).with_points("C", 1.0);
    assert!(no_status_data.matchup_statuses.is_none());
    assert!(!is_period_complete(QF, QF, Some(&no_status_data)));

    let empty_statuses = PeriodResult {
        matchup_statuses: Some(Vec::new()),
        ..no_status_data
    };
    assert!(is_period_complete(QF, QF, Some(&empty_statuses)));
}

#[test]
fn empty_status_list_in_current_week_decides_losers() {
    let mut b = bracket();
    let results = PeriodResult {
        matchup_statuses: Some(Vec::new()),
        ..qf_results()
    };
    let outcome = apply_period_results(&mut b, &results, QF);
    assert!(outcome.period_complete);
    assert_eq!(team_name(b.quarterfinals.matchups[0].loser_team()), Some("C"));
    assert_eq!(team_name(b.semifinals.matchups[1].team1.as_ref()), Some("E"));
}

#[test]
fn missing_status_data_in_current_week_decides_nothing() {
    let mut b = bracket();
    let results = PeriodResult {
        matchup_statuses: None,
        ..qf_results()
    };
    let outcome = apply_period_results(&mut b, &results, QF);
    assert!(!outcome.period_complete);
    assert!(b.quarterfinals.matchups.iter().all(|m| m.loser.is_none()));
}

#[test]
fn tie_leaves_matchup_open_and_blocks_advancement() {
    let mut b = bracket();
    let results = final_week(QF, &[("C", 80.0), ("F", 80.0), ("D", 70.0), ("E", 60.0)]);
    let outcome = apply_period_results(&mut b, &results, QF);
    assert_eq!(outcome.ties, vec![MatchupId::Qf1]);
    assert_eq!(
        outcome.errors().map(|e| e.to_string()).collect::<Vec<_>>(),
        ["Matchup qf1 ended in a tie"]
    );
    assert!(b.quarterfinals.matchups[0].loser.is_none());
    assert!(b.quarterfinals.matchups[1].loser.is_some());
    assert!(b.semifinals.matchups.iter().all(|m| m.team1.is_none()));
}

#[test]
fn semifinal_tie_keeps_final_empty() {
    let mut b = bracket();
    apply_period_results(&mut b, &qf_results(), FINAL + 1);
    let sf = final_week(SF, &[("C", 90.0), ("B", 90.0), ("E", 70.0), ("A", 85.0)]);
    let outcome = apply_period_results(&mut b, &sf, FINAL + 1);

    assert_eq!(outcome.ties, vec![MatchupId::Sf1]);
    assert!(b.semifinals.matchups[0].loser.is_none());
    assert_eq!(team_name(b.semifinals.matchups[1].loser_team()), Some("E"));
    assert!(b.final_round.matchup.team1.is_none());
    assert!(b.final_round.matchup.team2.is_none());
}

#[test]
fn reapplying_same_week_changes_nothing() {
    let mut b = bracket();
    apply_period_results(&mut b, &qf_results(), QF);
    let snapshot = b.clone();
    apply_period_results(&mut b, &qf_results(), QF);
    apply_period_results(&mut b, &qf_results(), SF);
    assert_eq!(b, snapshot);
}

#[test]
fn decided_losers_are_never_reverted() {
    let mut b = bracket();
    apply_period_results(&mut b, &qf_results(), QF);
    let flipped = final_week(QF, &[("C", 120.0), ("F", 10.0), ("D", 10.0), ("E", 120.0)]);
    apply_period_results(&mut b, &flipped, SF);

    let [qf1, qf2] = &b.quarterfinals.matchups;
    assert_eq!(team_name(qf1.loser_team()), Some("C"));
    assert_eq!(team_name(qf2.loser_team()), Some("E"));
    assert_eq!(qf1.team1.as_ref().unwrap().points(QF), Some(80.0));
    assert_eq!(team_name(b.semifinals.matchups[1].team1.as_ref()), Some("E"));
}

#[test]
fn missing_score_counts_as_zero() {
    let mut b = bracket();
    let results = final_week(QF, &[("C", 80.0), ("F", 95.0), ("D", 70.0)]);
    apply_period_results(&mut b, &results, QF);
    let qf2 = &b.quarterfinals.matchups[1];
    assert_eq!(qf2.team2.as_ref().unwrap().points(QF), Some(0.0));
    assert_eq!(team_name(qf2.loser_team()), Some("E"));
}

#[test]
fn full_season_ends_with_last_place() {
    let mut b = bracket();
    apply_period_results(&mut b, &qf_results(), FINAL + 1);
    apply_period_results(
        &mut b,
        &final_week(SF, &[("C", 100.0), ("B", 90.0), ("E", 70.0), ("A", 85.0)]),
        FINAL + 1,
    );

    let final_matchup = &b.final_round.matchup;
    assert_eq!(team_name(final_matchup.team1.as_ref()), Some("B"));
    assert_eq!(team_name(final_matchup.team2.as_ref()), Some("E"));

    apply_period_results(&mut b, &final_week(FINAL, &[("B", 110.0), ("E", 105.0)]), FINAL + 1);
    assert_eq!(b.last_place().map(|t| t.id.as_str()), Some("E"));

    let e = b.final_round.matchup.team2.as_ref().unwrap();
    assert_eq!(e.points_by_period.keys().copied().collect::<Vec<_>>(), vec![QF, SF, FINAL]);
    assert_eq!(e.total_points(), 60.0 + 70.0 + 105.0);
    assert_eq!(team_name(b.final_round.matchup.winner_team()), Some("B"));
}

#[test]
fn results_for_open_round_only_trigger_advancement() {
    let mut b = bracket();
    let sf = final_week(SF, &[("B", 90.0), ("A", 85.0)]);
    let outcome = apply_period_results(&mut b, &sf, SF);
    assert_eq!(outcome.round, Some(RoundKind::Semifinals));
    assert!(b.semifinals.matchups.iter().all(|m| m.loser.is_none()));
    assert!(b.semifinals.matchups[0].team2.as_ref().unwrap().points_by_period.is_empty());
}

#[test]
fn non_bracket_week_is_ignored() {
    let mut b = bracket();
    let before = b.clone();
    let outcome = apply_period_results(&mut b, &final_week(10, &[("C", 1.0), ("F", 2.0)]), 12);
    assert_eq!(outcome.round, None);
    assert_eq!(b, before);
}
