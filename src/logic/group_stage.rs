//! Group stage: split teams into groups of up to four, round robin inside each group.

use chrono::Days;

use crate::logic::round_robin::generate_round_robin_schedule;
use crate::logic::validation::{validate_options, validate_teams};
use crate::models::{ScheduleError, ScheduleOptions, ScheduledMatch, Stage, Team};

pub const MAX_GROUP_SIZE: usize = 4;

/// Days between the starts of consecutive groups.
pub const GROUP_START_OFFSET_DAYS: u64 = 7;

/// Deal teams into `ceil(n / 4)` groups: team `i` goes to group `i % group_count`.
pub fn assign_groups(teams: &[Team]) -> Vec<Vec<Team>> {
    let group_count = teams.len().div_ceil(MAX_GROUP_SIZE);
    let mut groups = vec![Vec::with_capacity(MAX_GROUP_SIZE); group_count];
    for (i, team) in teams.iter().enumerate() {
        groups[i % group_count].push(team.clone());
    }
    groups
}

/// Round robin per group, group `k` starting `7 * k` days after `start_date`.
/// Matches are returned group by group.
pub fn generate_group_stage_schedule(
    teams: &[Team],
    options: &ScheduleOptions,
) -> Result<Vec<ScheduledMatch>, ScheduleError> {
    let kickoff = validate_options(options).map_err(|e| e.in_stage(Stage::GroupStage))?;
    validate_teams(teams).map_err(|e| e.in_stage(Stage::GroupStage))?;

    let groups = assign_groups(teams);
    let mut matches = Vec::new();
    for (k, group) in groups.iter().enumerate() {
        let start = kickoff
            .date
            .checked_add_days(Days::new(GROUP_START_OFFSET_DAYS * k as u64))
            .ok_or_else(|| ScheduleError::DateOutOfRange.in_stage(Stage::GroupStage))?;
        let group_matches = generate_round_robin_schedule(group, &options.starting_on(start))
            .map_err(|e| e.in_stage(Stage::GroupStage))?;
        log::debug!("group {}: {} teams, {} matches", k + 1, group.len(), group_matches.len());
        matches.extend(group_matches);
    }
    Ok(matches)
}
