//! Schedule generation errors.

use crate::models::format::TournamentFormat;

/// Generation step that failed; prefixes wrapped error messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    RoundRobin,
    Knockout,
    League,
    GroupStage,
    /// The format dispatcher.
    Schedule,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::RoundRobin => write!(f, "Failed to generate round robin schedule"),
            Stage::Knockout => write!(f, "Failed to generate knockout schedule"),
            Stage::League => write!(f, "Failed to generate league schedule"),
            Stage::GroupStage => write!(f, "Failed to generate group stage schedule"),
            Stage::Schedule => write!(f, "Failed to generate schedule"),
        }
    }
}

/// Errors that can occur while generating a schedule. Nothing is produced when one is returned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    /// A required option is empty (field name as the caller knows it).
    MissingOption(&'static str),
    InvalidStartDate(String),
    InvalidDefaultTime(String),
    /// `matchDuration` below one hour.
    MatchDurationTooShort,
    /// `matchesPerDay` below one.
    NoMatchesPerDay,
    NotEnoughTeams { required: usize, found: usize },
    MissingTeamId,
    MissingTeamName,
    DuplicateTeamId(String),
    /// Team count below the chosen format's minimum.
    NotEnoughTeamsForFormat {
        format: TournamentFormat,
        required: usize,
        found: usize,
    },
    UnsupportedFormat(String),
    /// A kickoff falls outside the dates chrono can represent.
    DateOutOfRange,
    /// Failure inside a generation stage.
    Stage {
        stage: Stage,
        source: Box<ScheduleError>,
    },
}

impl ScheduleError {
    pub(crate) fn in_stage(self, stage: Stage) -> Self {
        ScheduleError::Stage {
            stage,
            source: Box::new(self),
        }
    }

    /// Innermost cause, with every stage wrapper removed.
    pub fn root(&self) -> &ScheduleError {
        match self {
            ScheduleError::Stage { source, .. } => source.root(),
            other => other,
        }
    }

    /// Outermost stage that reported the failure, if wrapped.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            ScheduleError::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::MissingOption(field) => match *field {
                "tournamentId" => write!(f, "Tournament ID is required"),
                "startDate" => write!(f, "Start date is required"),
                "defaultTime" => write!(f, "Default time is required"),
                "venue" => write!(f, "Venue is required"),
                "gameType" => write!(f, "Game type is required"),
                other => write!(f, "{} is required", other),
            },
            ScheduleError::InvalidStartDate(text) => write!(f, "Invalid start date '{}'", text),
            ScheduleError::InvalidDefaultTime(text) => {
                write!(f, "Invalid default time '{}' (expected HH:MM)", text)
            }
            ScheduleError::MatchDurationTooShort => {
                write!(f, "Match duration must be at least 1 hour")
            }
            ScheduleError::NoMatchesPerDay => write!(f, "Must have at least 1 match per day"),
            ScheduleError::NotEnoughTeams { required, found } => write!(
                f,
                "At least {} teams are required to generate a schedule (got {})",
                required, found
            ),
            ScheduleError::MissingTeamId => write!(f, "Each team must have an ID"),
            ScheduleError::MissingTeamName => write!(f, "Each team must have a name"),
            ScheduleError::DuplicateTeamId(id) => {
                write!(f, "Team ID '{}' appears more than once", id)
            }
            ScheduleError::NotEnoughTeamsForFormat {
                format,
                required,
                found,
            } => write!(
                f,
                "At least {} teams are required for {} format (got {})",
                required,
                format.label(),
                found
            ),
            ScheduleError::UnsupportedFormat(name) => {
                write!(f, "Unsupported tournament format: {}", name)
            }
            ScheduleError::DateOutOfRange => write!(f, "Match date is out of range"),
            ScheduleError::Stage { stage, source } => write!(f, "{}: {}", stage, source),
        }
    }
}

impl std::error::Error for ScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScheduleError::Stage { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
