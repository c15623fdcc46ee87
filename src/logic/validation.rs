//! Input guards run before any match is generated.

use std::collections::HashSet;

use crate::models::{
    parse_default_time, parse_start_date, Kickoff, ScheduleError, ScheduleOptions, Team,
};

/// Check every required option and parse the first kickoff.
pub fn validate_options(options: &ScheduleOptions) -> Result<Kickoff, ScheduleError> {
    require("tournamentId", &options.tournament_id)?;
    require("startDate", &options.start_date)?;
    require("defaultTime", &options.default_time)?;
    require("venue", &options.venue)?;
    if options.match_duration < 1 {
        return Err(ScheduleError::MatchDurationTooShort);
    }
    if options.matches_per_day < 1 {
        return Err(ScheduleError::NoMatchesPerDay);
    }
    require("gameType", &options.game_type)?;

    Ok(Kickoff {
        date: parse_start_date(&options.start_date)?,
        time: parse_default_time(&options.default_time)?,
    })
}

/// At least two teams, each with an id and a name, ids unique.
pub fn validate_teams(teams: &[Team]) -> Result<(), ScheduleError> {
    if teams.len() < 2 {
        return Err(ScheduleError::NotEnoughTeams {
            required: 2,
            found: teams.len(),
        });
    }
    let mut seen = HashSet::with_capacity(teams.len());
    for team in teams {
        if team.id.trim().is_empty() {
            return Err(ScheduleError::MissingTeamId);
        }
        if team.name.trim().is_empty() {
            return Err(ScheduleError::MissingTeamName);
        }
        if !seen.insert(team.id.as_str()) {
            return Err(ScheduleError::DuplicateTeamId(team.id.clone()));
        }
    }
    Ok(())
}

fn require(field: &'static str, value: &str) -> Result<(), ScheduleError> {
    if value.trim().is_empty() {
        Err(ScheduleError::MissingOption(field))
    } else {
        Ok(())
    }
}
