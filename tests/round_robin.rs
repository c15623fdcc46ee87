//! Integration tests for the circle-method round robin and kickoff spacing.

mod common;

use common::{distinct_pairings, options, teams};
use cricket_fixtures::{
    generate_round_robin_schedule, MatchStatus, ScheduleError, ScheduleOptions, Stage, BYE_TEAM_ID,
};

#[test]
fn every_pair_meets_exactly_once() {
    for n in 2..=9 {
        let t = teams(n);
        let matches = generate_round_robin_schedule(&t, &options()).unwrap();
        assert_eq!(matches.len(), n * (n - 1) / 2, "n = {n}");
        assert_eq!(distinct_pairings(&matches).len(), matches.len(), "n = {n}");
        for m in &matches {
            assert_ne!(m.team1_id, m.team2_id);
            assert_ne!(m.team1_id, BYE_TEAM_ID);
            assert_ne!(m.team2_id, BYE_TEAM_ID);
        }
    }
}

#[test]
fn two_teams_play_once() {
    let matches = generate_round_robin_schedule(&teams(2), &options()).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].team1_id, "T0");
    assert_eq!(matches[0].team2_id, "T1");
    assert_eq!(matches[0].status, MatchStatus::Upcoming);
    assert_eq!(matches[0].venue, "Eden Gardens");
    assert_eq!(matches[0].match_type, "T20");
    assert_eq!(matches[0].tournament_id, "cup-2025");
}

#[test]
fn three_teams_skip_bye_pairings() {
    // Padded to A B C bye: each round one team sits out.
    let matches = generate_round_robin_schedule(&teams(3), &options()).unwrap();
    let pairs: Vec<(&str, &str)> = matches
        .iter()
        .map(|m| (m.team1_id.as_str(), m.team2_id.as_str()))
        .collect();
    assert_eq!(pairs, vec![("T1", "T2"), ("T0", "T2"), ("T0", "T1")]);
}

#[test]
fn four_teams_follow_circle_rotation() {
    let matches = generate_round_robin_schedule(&teams(4), &options()).unwrap();
    let pairs: Vec<(&str, &str)> = matches
        .iter()
        .map(|m| (m.team1_id.as_str(), m.team2_id.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("T0", "T3"),
            ("T1", "T2"),
            ("T0", "T2"),
            ("T3", "T1"),
            ("T0", "T1"),
            ("T2", "T3"),
        ]
    );
}

#[test]
fn same_input_gives_same_schedule() {
    let a = generate_round_robin_schedule(&teams(7), &options()).unwrap();
    let b = generate_round_robin_schedule(&teams(7), &options()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn kickoffs_fill_days_in_order() {
    let matches = generate_round_robin_schedule(&teams(4), &options()).unwrap();
    let dates: Vec<String> = matches.iter().map(|m| m.date.to_string()).collect();
    assert_eq!(
        dates,
        vec![
            "2025-03-01 14:00:00",
            "2025-03-01 17:00:00",
            "2025-03-02 14:00:00",
            "2025-03-02 17:00:00",
            "2025-03-03 14:00:00",
            "2025-03-03 17:00:00",
        ]
    );
    assert!(matches.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn day_cap_ignores_round_boundaries() {
    // 3 matches per day with 2 matches per round: round 2 straddles days one and two.
    let o = ScheduleOptions {
        matches_per_day: 3,
        match_duration: 4,
        default_time: "10:30".to_string(),
        ..options()
    };
    let matches = generate_round_robin_schedule(&teams(4), &o).unwrap();
    let dates: Vec<String> = matches.iter().map(|m| m.date.to_string()).collect();
    assert_eq!(dates[2], "2025-03-01 18:30:00");
    assert_eq!(dates[3], "2025-03-02 10:30:00");
}

#[test]
fn date_serializes_as_iso_timestamp() {
    let matches = generate_round_robin_schedule(&teams(2), &options()).unwrap();
    let json = serde_json::to_value(&matches[0]).unwrap();
    assert_eq!(json["date"], "2025-03-01T14:00:00");
    assert_eq!(json["type"], "T20");
    assert_eq!(json["status"], "upcoming");
}

#[test]
fn missing_venue_fails_before_generating() {
    let o = ScheduleOptions {
        venue: String::new(),
        ..options()
    };
    let err = generate_round_robin_schedule(&teams(4), &o).unwrap_err();
    assert_eq!(err.stage(), Some(Stage::RoundRobin));
    assert_eq!(err.root(), &ScheduleError::MissingOption("venue"));
    assert_eq!(
        err.to_string(),
        "Failed to generate round robin schedule: Venue is required"
    );
}

#[test]
fn single_team_fails() {
    let err = generate_round_robin_schedule(&teams(1), &options()).unwrap_err();
    assert!(matches!(
        err.root(),
        ScheduleError::NotEnoughTeams { required: 2, found: 1 }
    ));
}

#[test]
fn oversized_match_duration_is_an_error_not_a_panic() {
    let o = ScheduleOptions {
        match_duration: u32::MAX,
        matches_per_day: 2,
        ..options()
    };
    let err = generate_round_robin_schedule(&teams(3), &o).unwrap_err();
    assert_eq!(err.stage(), Some(Stage::RoundRobin));
    assert_eq!(err.root(), &ScheduleError::DateOutOfRange);
    assert_eq!(
        err.to_string(),
        "Failed to generate round robin schedule: Match date is out of range"
    );
}
