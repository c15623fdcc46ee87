//! Knockout: opening round of an elimination bracket with random seeding.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::logic::clock::MatchClock;
use crate::logic::validation::{validate_options, validate_teams};
use crate::models::{ScheduleError, ScheduleOptions, ScheduledMatch, Stage, Team};

/// Shuffle the teams and pair them off `(0, 1), (2, 3), ...`.
/// With an odd count the last team gets an unrecorded bye.
pub fn generate_knockout_schedule(
    teams: &[Team],
    options: &ScheduleOptions,
) -> Result<Vec<ScheduledMatch>, ScheduleError> {
    generate_knockout_schedule_with_rng(teams, options, &mut rand::thread_rng())
}

/// Same as [`generate_knockout_schedule`], seeding the bracket from `rng`.
pub fn generate_knockout_schedule_with_rng<R: Rng + ?Sized>(
    teams: &[Team],
    options: &ScheduleOptions,
    rng: &mut R,
) -> Result<Vec<ScheduledMatch>, ScheduleError> {
    let kickoff = validate_options(options).map_err(|e| e.in_stage(Stage::Knockout))?;
    validate_teams(teams).map_err(|e| e.in_stage(Stage::Knockout))?;

    let mut seeded: Vec<&Team> = teams.iter().collect();
    seeded.shuffle(rng);

    let mut clock = MatchClock::new(kickoff, options.matches_per_day, options.match_duration);
    let matches = seeded
        .chunks_exact(2)
        .map(|pair| {
            let date = clock.next_kickoff()?;
            Ok(ScheduledMatch::new(options, pair[0].id.as_str(), pair[1].id.as_str(), date))
        })
        .collect::<Result<Vec<_>, ScheduleError>>()
        .map_err(|e| e.in_stage(Stage::Knockout))?;

    if let Some(bye) = seeded.chunks_exact(2).remainder().first() {
        log::debug!("knockout: team {} receives a bye", bye.id);
    }
    log::debug!("knockout: {} teams, {} matches", teams.len(), matches.len());
    Ok(matches)
}
