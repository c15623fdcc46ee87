//! Data structures for fixture generation: teams, options, generated matches, formats, errors.

mod error;
mod fixture;
mod format;
mod options;
mod team;

pub use error::{ScheduleError, Stage};
pub use fixture::{MatchStatus, ScheduledMatch};
pub use format::TournamentFormat;
pub use options::{Kickoff, ScheduleOptions};
pub use team::{Team, BYE_TEAM_ID};

pub(crate) use options::{parse_default_time, parse_start_date};
