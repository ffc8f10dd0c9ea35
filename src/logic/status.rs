//! Human-readable bracket status for the current period.

use crate::models::{Bracket, BracketStatus, RoundKind, StatusCode};

pub fn bracket_status(bracket: &Bracket, current_period: u32) -> BracketStatus {
    let [qf, _, final_period] = bracket.periods();

    let (status, message, current_round) = if current_period < qf {
        (StatusCode::Upcoming, format!("Waffle Bowl starts Week {}", qf), None)
    } else if current_period > final_period {
        let message = match bracket.last_place() {
            Some(team) => format!("Last place: {} 🧇", team.name),
            None => "Waffle Bowl complete".to_string(),
        };
        (StatusCode::Complete, message, Some(RoundKind::Final))
    } else {
        // Rounds are consecutive, so exactly one matches here.
        let round = bracket
            .round_for_period(current_period)
            .unwrap_or(RoundKind::Final);
        let message = match round {
            RoundKind::Quarterfinals => "Quarterfinals in progress",
            RoundKind::Semifinals => "Semifinals in progress",
            RoundKind::Final => "🧇 WAFFLE BOWL FINAL - Last place on the line!",
        };
        (StatusCode::Active, message.to_string(), Some(round))
    };

    BracketStatus {
        status,
        message,
        current_round,
        current_period,
    }
}
