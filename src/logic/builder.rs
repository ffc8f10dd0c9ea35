//! Bracket skeleton: quarterfinals with two byes, empty semifinal and final slots.

use crate::config::BracketConfig;
use crate::models::{
    Bracket, BracketError, FinalRound, Matchup, MatchupId, Quarterfinals, Semifinals, Team, TeamResult,
};

/// Build the three-round bracket from seeded entrants (sorted by seed, worst first).
///
/// - QF1: seed 3 vs seed 6, QF2: seed 4 vs seed 5; seeds 1 and 2 have byes.
/// - SF1: QF loser vs seed 2, SF2: QF loser vs seed 1 (team1 slots start empty).
/// - Final: both slots empty until the semifinals resolve.
pub fn build_bracket(entrants: Vec<Team>, config: &BracketConfig) -> Result<Bracket, BracketError> {
    if entrants.len() != config.entrant_count {
        return Err(BracketError::InvalidBracketSize {
            expected: config.entrant_count,
            found: entrants.len(),
        });
    }
    let [s1, s2, s3, s4, s5, s6]: [Team; 6] = entrants.clone().try_into().map_err(|v: Vec<Team>| {
        BracketError::InvalidBracketSize {
            expected: 6,
            found: v.len(),
        }
    })?;

    let schedule = config.schedule();
    log::debug!(
        "Building bracket: quarterfinals week {}, semifinals week {}, final week {}",
        schedule.quarterfinals,
        schedule.semifinals,
        schedule.final_round
    );

    Ok(Bracket {
        entrants,
        quarterfinals: Quarterfinals {
            period: schedule.quarterfinals,
            matchups: [
                Matchup::new(MatchupId::Qf1, Some(TeamResult::new(s3)), Some(TeamResult::new(s6))),
                Matchup::new(MatchupId::Qf2, Some(TeamResult::new(s4)), Some(TeamResult::new(s5))),
            ],
            byes: [s1.clone(), s2.clone()],
        },
        semifinals: Semifinals {
            period: schedule.semifinals,
            matchups: [
                Matchup::new(MatchupId::Sf1, None, Some(TeamResult::new(s2))),
                Matchup::new(MatchupId::Sf2, None, Some(TeamResult::new(s1))),
            ],
        },
        final_round: FinalRound {
            period: schedule.final_round,
            matchup: Matchup::pending(MatchupId::Final),
        },
    })
}
