//! Kickoff times for consecutive matches: fill a day up to `matches_per_day`, then move on.

use chrono::{Days, Duration, NaiveDateTime};

use crate::models::{Kickoff, ScheduleError};

/// Running match index shared by every generator; the day follows from the index.
pub(crate) struct MatchClock {
    kickoff: Kickoff,
    index: u32,
    matches_per_day: u32,
    match_duration: u32,
}

impl MatchClock {
    pub(crate) fn new(kickoff: Kickoff, matches_per_day: u32, match_duration: u32) -> Self {
        Self {
            kickoff,
            index: 0,
            matches_per_day,
            match_duration,
        }
    }

    /// Kickoff for the next match. Advances to the next day once the day is full.
    /// Fails when the kickoff falls outside the representable calendar.
    pub(crate) fn next_kickoff(&mut self) -> Result<NaiveDateTime, ScheduleError> {
        let day = u64::from(self.index / self.matches_per_day);
        let slot = i64::from(self.index % self.matches_per_day);
        self.index += 1;

        let offset = slot
            .checked_mul(i64::from(self.match_duration))
            .and_then(Duration::try_hours)
            .ok_or(ScheduleError::DateOutOfRange)?;
        self.kickoff
            .date
            .checked_add_days(Days::new(day))
            .and_then(|date| date.and_time(self.kickoff.time).checked_add_signed(offset))
            .ok_or(ScheduleError::DateOutOfRange)
    }
}
