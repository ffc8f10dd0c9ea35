//! Shared fixtures: an eight-team league whose bottom six are A (worst) through F.

#![allow(dead_code)]

use waffle_bowl::{build_bracket, select_entrants, Bracket, BracketConfig, MatchStatus, PeriodResult, Team};

pub const QF: u32 = 15;
pub const SF: u32 = 16;
pub const FINAL: u32 = 17;

pub fn team(id: &str, wins: u32, points_for: f64) -> Team {
    let mut t = Team::new(id, format!("Team {id}"), wins, 13 - wins, points_for);
    t.manager = format!("Manager {id}");
    t
}

/// Listed best-first, the way standings arrive.
pub fn league() -> Vec<Team> {
    let mut teams = vec![
        team("H", 10, 1600.0),
        team("G", 9, 1550.0),
        team("F", 7, 1400.0),
        team("E", 6, 1350.0),
        team("D", 5, 1300.0),
        team("C", 4, 1250.0),
        team("B", 3, 1200.0),
        team("A", 2, 1150.0),
    ];
    for (idx, t) in teams.iter_mut().enumerate() {
        t.rank = idx as u32 + 1;
    }
    teams
}

pub fn bracket() -> Bracket {
    let entrants = select_entrants(&league(), 6).unwrap();
    build_bracket(entrants, &BracketConfig::default()).unwrap()
}

/// Results for one week with every listed pairing final.
pub fn final_week(period: u32, scores: &[(&str, f64)]) -> PeriodResult {
    week(period, scores, MatchStatus::Final)
}

pub fn week(period: u32, scores: &[(&str, f64)], status: MatchStatus) -> PeriodResult {
    let mut result = PeriodResult::new(period);
    for (id, points) in scores {
        result = result.with_points(*id, *points);
    }
    for pair in scores.chunks(2) {
        if let [(a, _), (b, _)] = pair {
            result = result.with_status(*a, *b, status);
        }
    }
    result
}

pub fn team_name(bracket_team: Option<&waffle_bowl::TeamResult>) -> Option<&str> {
    bracket_team.map(|t| t.id())
}
