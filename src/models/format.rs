//! Tournament formats the dispatcher understands.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::error::ScheduleError;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    SingleElimination,
    /// Alias of single elimination: only the opening round is generated.
    DoubleElimination,
    RoundRobin,
    /// Home and away round robin.
    League,
    /// Group round robins only; no knockout round follows.
    GroupStageKnockout,
}

impl TournamentFormat {
    pub const ALL: [TournamentFormat; 5] = [
        TournamentFormat::SingleElimination,
        TournamentFormat::DoubleElimination,
        TournamentFormat::RoundRobin,
        TournamentFormat::League,
        TournamentFormat::GroupStageKnockout,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TournamentFormat::SingleElimination => "single_elimination",
            TournamentFormat::DoubleElimination => "double_elimination",
            TournamentFormat::RoundRobin => "round_robin",
            TournamentFormat::League => "league",
            TournamentFormat::GroupStageKnockout => "group_stage_knockout",
        }
    }

    /// Smallest team count the format accepts.
    pub fn min_teams(self) -> usize {
        match self {
            TournamentFormat::SingleElimination | TournamentFormat::DoubleElimination => 4,
            TournamentFormat::RoundRobin | TournamentFormat::League => 2,
            TournamentFormat::GroupStageKnockout => 8,
        }
    }

    /// Human label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            TournamentFormat::SingleElimination => "single elimination",
            TournamentFormat::DoubleElimination => "double elimination",
            TournamentFormat::RoundRobin => "round robin",
            TournamentFormat::League => "league",
            TournamentFormat::GroupStageKnockout => "group stage knockout",
        }
    }
}

impl std::fmt::Display for TournamentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentFormat {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TournamentFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ScheduleError::UnsupportedFormat(s.to_string()))
    }
}
