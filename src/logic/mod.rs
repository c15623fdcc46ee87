//! Fixture generation: validation, per-format generators and the format dispatcher.

mod clock;
mod dispatch;
mod group_stage;
mod knockout;
mod league;
mod round_robin;
mod validation;

pub use dispatch::{generate_schedule, generate_schedule_for};
pub use group_stage::{
    assign_groups, generate_group_stage_schedule, GROUP_START_OFFSET_DAYS, MAX_GROUP_SIZE,
};
pub use knockout::{generate_knockout_schedule, generate_knockout_schedule_with_rng};
pub use league::{generate_league_schedule, RETURN_LEG_OFFSET_DAYS};
pub use round_robin::generate_round_robin_schedule;
pub use validation::{validate_options, validate_teams};
