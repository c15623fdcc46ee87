//! Schedule configuration supplied by the caller.

use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::error::ScheduleError;

/// Options for one generation call.
///
/// Dates and times stay as the caller's text until validation parses them into a [`Kickoff`].
/// Missing JSON fields fall back to the scheduling form defaults (14:00, 3 hour slots,
/// 2 matches per day, T20); `startDate`, `venue` and `tournamentId` have no usable default.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduleOptions {
    /// `YYYY-MM-DD`, or an RFC 3339 timestamp whose date is used.
    pub start_date: String,
    /// `HH:MM` (seconds allowed).
    pub default_time: String,
    /// Hours between same-day kickoffs.
    pub match_duration: u32,
    pub matches_per_day: u32,
    pub venue: String,
    pub game_type: String,
    pub tournament_id: String,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            start_date: String::new(),
            default_time: "14:00".to_string(),
            match_duration: 3,
            matches_per_day: 2,
            venue: String::new(),
            game_type: "T20".to_string(),
            tournament_id: String::new(),
        }
    }
}

impl ScheduleOptions {
    /// Copy of these options starting on another date.
    pub fn starting_on(&self, date: NaiveDate) -> Self {
        Self {
            start_date: date.format("%Y-%m-%d").to_string(),
            ..self.clone()
        }
    }
}

/// Parsed first-match date and daily kickoff time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Kickoff {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

pub(crate) fn parse_start_date(text: &str) -> Result<NaiveDate, ScheduleError> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(text).map(|dt| dt.date_naive()))
        .map_err(|_| ScheduleError::InvalidStartDate(text.to_string()))
}

pub(crate) fn parse_default_time(text: &str) -> Result<NaiveTime, ScheduleError> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .map_err(|_| ScheduleError::InvalidDefaultTime(text.to_string()))
}
