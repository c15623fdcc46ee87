//! Format dispatcher: pick a generator by format name.

use crate::logic::group_stage::generate_group_stage_schedule;
use crate::logic::knockout::generate_knockout_schedule;
use crate::logic::league::generate_league_schedule;
use crate::logic::round_robin::generate_round_robin_schedule;
use crate::logic::validation::{validate_options, validate_teams};
use crate::models::{ScheduleError, ScheduleOptions, ScheduledMatch, Stage, Team, TournamentFormat};

/// Generate the schedule for a format given by its wire name (e.g. `"round_robin"`).
///
/// Options and teams are validated before the format name is looked at.
pub fn generate_schedule(
    format: &str,
    teams: &[Team],
    options: &ScheduleOptions,
) -> Result<Vec<ScheduledMatch>, ScheduleError> {
    check_inputs(teams, options)
        .and_then(|()| format.parse::<TournamentFormat>())
        .and_then(|format| dispatch(format, teams, options))
        .map_err(|e| e.in_stage(Stage::Schedule))
}

/// Generate the schedule for an already parsed format.
pub fn generate_schedule_for(
    format: TournamentFormat,
    teams: &[Team],
    options: &ScheduleOptions,
) -> Result<Vec<ScheduledMatch>, ScheduleError> {
    check_inputs(teams, options)
        .and_then(|()| dispatch(format, teams, options))
        .map_err(|e| e.in_stage(Stage::Schedule))
}

fn check_inputs(teams: &[Team], options: &ScheduleOptions) -> Result<(), ScheduleError> {
    validate_options(options)?;
    validate_teams(teams)
}

fn dispatch(
    format: TournamentFormat,
    teams: &[Team],
    options: &ScheduleOptions,
) -> Result<Vec<ScheduledMatch>, ScheduleError> {
    let required = format.min_teams();
    if teams.len() < required {
        return Err(ScheduleError::NotEnoughTeamsForFormat {
            format,
            required,
            found: teams.len(),
        });
    }

    match format {
        TournamentFormat::SingleElimination | TournamentFormat::DoubleElimination => {
            generate_knockout_schedule(teams, options)
        }
        TournamentFormat::RoundRobin => generate_round_robin_schedule(teams, options),
        TournamentFormat::League => generate_league_schedule(teams, options),
        TournamentFormat::GroupStageKnockout => generate_group_stage_schedule(teams, options),
    }
}
