//! Generated match record and its status.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::options::ScheduleOptions;

/// Lifecycle status of a match. The generator only ever produces `Upcoming`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Upcoming,
    Live,
    Completed,
}

impl MatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Live => "live",
            MatchStatus::Completed => "completed",
        }
    }
}

/// One fixture as handed to the persistence layer.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMatch {
    pub tournament_id: String,
    /// Game type, e.g. `T20` or `ODI`.
    #[serde(rename = "type")]
    pub match_type: String,
    pub team1_id: String,
    pub team2_id: String,
    pub venue: String,
    /// Local kickoff, serialized as ISO-8601.
    pub date: NaiveDateTime,
    pub status: MatchStatus,
}

impl ScheduledMatch {
    /// A new upcoming match between two teams, stamped with the tournament, game type and venue.
    pub fn new(
        options: &ScheduleOptions,
        team1_id: impl Into<String>,
        team2_id: impl Into<String>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            tournament_id: options.tournament_id.clone(),
            match_type: options.game_type.clone(),
            team1_id: team1_id.into(),
            team2_id: team2_id.into(),
            venue: options.venue.clone(),
            date,
            status: MatchStatus::Upcoming,
        }
    }

    /// Same fixture with home and away swapped, kicking off at `date`.
    pub fn reversed(&self, date: NaiveDateTime) -> Self {
        Self {
            team1_id: self.team2_id.clone(),
            team2_id: self.team1_id.clone(),
            date,
            ..self.clone()
        }
    }
}
