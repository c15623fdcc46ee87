//! Round robin: every team meets every other team once (circle method).

use crate::logic::clock::MatchClock;
use crate::logic::validation::{validate_options, validate_teams};
use crate::models::{ScheduleError, ScheduleOptions, ScheduledMatch, Stage, Team};

/// Generate a single round robin.
///
/// 1. Pad an odd field with a bye so every round pairs everyone.
/// 2. For each of `n - 1` rounds pair slot `i` with slot `n - 1 - i`, skipping bye pairings.
/// 3. Rotate every slot except the first by one position.
///
/// Kickoffs fill each day in emission order; a round can spill into the next day.
pub fn generate_round_robin_schedule(
    teams: &[Team],
    options: &ScheduleOptions,
) -> Result<Vec<ScheduledMatch>, ScheduleError> {
    let kickoff = validate_options(options).map_err(|e| e.in_stage(Stage::RoundRobin))?;
    validate_teams(teams).map_err(|e| e.in_stage(Stage::RoundRobin))?;

    let bye = Team::bye();
    let mut slots: Vec<&Team> = teams.iter().collect();
    if slots.len() % 2 == 1 {
        slots.push(&bye);
    }
    let n = slots.len();

    let mut clock = MatchClock::new(kickoff, options.matches_per_day, options.match_duration);
    let mut matches = Vec::with_capacity(teams.len() * (teams.len() - 1) / 2);

    for _round in 0..n - 1 {
        for i in 0..n / 2 {
            let (home, away) = (slots[i], slots[n - 1 - i]);
            if home.is_bye() || away.is_bye() {
                continue;
            }
            matches.push(ScheduledMatch::new(
                options,
                home.id.as_str(),
                away.id.as_str(),
                clock.next_kickoff().map_err(|e| e.in_stage(Stage::RoundRobin))?,
            ));
        }
        slots[1..].rotate_right(1);
    }

    log::debug!(
        "round robin: {} teams, {} rounds, {} matches",
        teams.len(),
        n - 1,
        matches.len()
    );
    Ok(matches)
}
