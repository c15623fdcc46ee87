//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use cricket_fixtures::{ScheduleOptions, ScheduledMatch, Team};

pub fn teams(n: usize) -> Vec<Team> {
    (0..n)
        .map(|i| Team::new(format!("T{i}"), format!("Team {i}")))
        .collect()
}

pub fn options() -> ScheduleOptions {
    ScheduleOptions {
        start_date: "2025-03-01".to_string(),
        default_time: "14:00".to_string(),
        match_duration: 3,
        matches_per_day: 2,
        venue: "Eden Gardens".to_string(),
        game_type: "T20".to_string(),
        tournament_id: "cup-2025".to_string(),
    }
}

/// Unordered pairings, one per match.
pub fn pairings(matches: &[ScheduledMatch]) -> Vec<(String, String)> {
    matches
        .iter()
        .map(|m| {
            if m.team1_id < m.team2_id {
                (m.team1_id.clone(), m.team2_id.clone())
            } else {
                (m.team2_id.clone(), m.team1_id.clone())
            }
        })
        .collect()
}

pub fn distinct_pairings(matches: &[ScheduledMatch]) -> HashSet<(String, String)> {
    pairings(matches).into_iter().collect()
}
