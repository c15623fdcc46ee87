//! Cricket tournament fixtures: library that turns a team list and schedule options
//! into dated match records for round robin, knockout, league and group stage formats.

pub mod export;
pub mod logic;
pub mod models;

pub use logic::{
    assign_groups, generate_group_stage_schedule, generate_knockout_schedule,
    generate_knockout_schedule_with_rng, generate_league_schedule, generate_round_robin_schedule,
    generate_schedule, generate_schedule_for, validate_options, validate_teams,
};
pub use models::{
    Kickoff, MatchStatus, ScheduleError, ScheduleOptions, ScheduledMatch, Stage, Team,
    TournamentFormat, BYE_TEAM_ID,
};
