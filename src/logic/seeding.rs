//! Seeding: pick the worst teams in the league as bracket entrants.

use crate::models::{BracketError, Team};

/// Select the bottom `n` teams, worst first, and assign seeds (1 = worst).
///
/// Order is wins ascending, then points-for ascending: with equal wins the team that
/// scored less is considered worse. Returns fewer than `n` teams when the league is
/// smaller; the builder rejects an undersized field.
pub fn select_entrants(standings: &[Team], n: usize) -> Result<Vec<Team>, BracketError> {
    if standings.is_empty() {
        return Err(BracketError::InsufficientData);
    }

    let mut sorted: Vec<Team> = standings.to_vec();
    sorted.sort_by(|a, b| {
        a.wins
            .cmp(&b.wins)
            .then_with(|| a.points_for.total_cmp(&b.points_for))
    });
    sorted.truncate(n);

    for (idx, team) in sorted.iter_mut().enumerate() {
        team.seed = Some(idx as u32 + 1);
    }
    log::debug!(
        "Seeded {} entrant(s): {}",
        sorted.len(),
        sorted.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join(", ")
    );
    Ok(sorted)
}
