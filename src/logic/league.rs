//! League: home and away round robin.

use chrono::Duration;

use crate::logic::round_robin::generate_round_robin_schedule;
use crate::logic::validation::{validate_options, validate_teams};
use crate::models::{ScheduleError, ScheduleOptions, ScheduledMatch, Stage, Team};

/// Days between a first-leg fixture and its return fixture.
pub const RETURN_LEG_OFFSET_DAYS: i64 = 30;

/// First leg is a plain round robin; the second leg replays it with home and away swapped,
/// each fixture 30 days after its first-leg counterpart.
pub fn generate_league_schedule(
    teams: &[Team],
    options: &ScheduleOptions,
) -> Result<Vec<ScheduledMatch>, ScheduleError> {
    validate_options(options).map_err(|e| e.in_stage(Stage::League))?;
    validate_teams(teams).map_err(|e| e.in_stage(Stage::League))?;

    let first_leg =
        generate_round_robin_schedule(teams, options).map_err(|e| e.in_stage(Stage::League))?;
    let offset = Duration::days(RETURN_LEG_OFFSET_DAYS);
    let second_leg = first_leg
        .iter()
        .map(|m| {
            m.date
                .checked_add_signed(offset)
                .map(|date| m.reversed(date))
                .ok_or(ScheduleError::DateOutOfRange)
        })
        .collect::<Result<Vec<_>, ScheduleError>>()
        .map_err(|e| e.in_stage(Stage::League))?;

    let mut matches = first_leg;
    matches.extend(second_leg);
    log::debug!("league: {} teams, {} matches", teams.len(), matches.len());
    Ok(matches)
}
