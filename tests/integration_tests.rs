// Integration tests for the recap pipeline.
//
// These tests exercise the full system end-to-end using the library crate's
// public API: generate a weekly league snapshot, run the award engine over
// it, and render the newsletter summary. They verify that the subsystems
// (simulator, award engine, manager lookup, formatter) work together
// correctly.

use gridiron_recap::awards::{compute_awards, format_awards_summary, WeeklyAwards};
use gridiron_recap::model::WeeklyLeagueData;
use gridiron_recap::sim::generate_mock_league_data;

// ===========================================================================
// Test helpers
// ===========================================================================

/// Run the whole pipeline for one week.
fn recap_for_week(week: u32) -> (WeeklyLeagueData, WeeklyAwards, String) {
    let data = generate_mock_league_data(week);
    let awards = compute_awards(&data).expect("generated snapshot must produce awards");
    let summary = format_awards_summary(&awards);
    (data, awards, summary)
}

// ===========================================================================
// End-to-end pipeline
// ===========================================================================

#[test]
fn full_pipeline_produces_complete_summary() {
    let (_, awards, summary) = recap_for_week(5);

    assert_eq!(awards.matchup_results.len(), 5);
    assert_eq!(awards.standings.len(), 10);

    assert!(summary.starts_with("=== WEEKLY AWARDS ==="));
    assert!(summary.contains("🏆 POINT LEADER"));
    assert!(summary.contains("💩 WORST PERFORMANCE"));
    assert!(summary.contains("⚔️ CLOSEST MATCHUP"));
    assert!(summary.contains("💥 BIGGEST BLOWOUT"));
    assert!(summary.contains("=== MATCHUP RESULTS ==="));
    assert!(summary.contains("=== STANDINGS ==="));

    // Five result lines and ten standings lines.
    assert_eq!(summary.matches(" vs ").count(), 5);
    assert!(summary.contains("\n1. "));
    assert!(summary.contains("\n10. "));
}

#[test]
fn awards_reference_real_league_teams() {
    let (data, awards, summary) = recap_for_week(3);

    let team_names: Vec<&str> = data
        .users
        .iter()
        .filter_map(|u| u.metadata.team_name.as_deref())
        .collect();
    assert_eq!(team_names.len(), 10);

    assert!(team_names.contains(&awards.point_leader.manager.team_name.as_str()));
    assert!(team_names.contains(&awards.worst_performance.manager.team_name.as_str()));
    for entry in &awards.standings {
        assert!(team_names.contains(&entry.manager.team_name.as_str()));
        assert!(summary.contains(&entry.manager.team_name));
    }
}

#[test]
fn point_leader_and_worst_match_snapshot_extremes() {
    let (data, awards, _) = recap_for_week(8);

    let max = data
        .matchups
        .iter()
        .map(|m| m.points)
        .fold(f64::MIN, f64::max);
    let min = data
        .matchups
        .iter()
        .map(|m| m.points)
        .fold(f64::MAX, f64::min);

    assert_eq!(awards.point_leader.points, max);
    assert_eq!(awards.worst_performance.points, min);
}

#[test]
fn closest_is_never_wider_than_blowout() {
    for week in 1..=18 {
        let (_, awards, _) = recap_for_week(week);
        assert!(
            awards.closest_matchup.differential <= awards.biggest_blowout.differential,
            "week {week}: closest {} > blowout {}",
            awards.closest_matchup.differential,
            awards.biggest_blowout.differential
        );
    }
}

#[test]
fn standings_are_sorted_by_wins_then_points() {
    let (_, awards, _) = recap_for_week(10);

    for pair in awards.standings.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.wins > b.wins || (a.wins == b.wins && a.total_points >= b.total_points),
            "standings out of order: {} before {}",
            a.manager.team_name,
            b.manager.team_name
        );
    }
}

// ===========================================================================
// Determinism
// ===========================================================================

#[test]
fn same_week_renders_identical_newsletters() {
    let (_, _, first) = recap_for_week(5);
    let (_, _, second) = recap_for_week(5);
    assert_eq!(first, second);
}

#[test]
fn different_weeks_render_different_newsletters() {
    let (_, _, week4) = recap_for_week(4);
    let (_, _, week11) = recap_for_week(11);
    assert_ne!(week4, week11);
}

#[test]
fn every_regular_season_week_recaps_cleanly() {
    for week in 1..=18 {
        let (_, awards, summary) = recap_for_week(week);
        assert_eq!(awards.matchup_results.len(), 5, "week {week}");
        assert!(summary.len() > 200, "week {week} summary too short");
    }
}

// ===========================================================================
// Snapshot persistence
// ===========================================================================

#[test]
fn snapshot_survives_json_round_trip_with_same_recap() {
    let (data, _, summary) = recap_for_week(6);

    let json = serde_json::to_string(&data).expect("snapshot serializes");
    let restored: WeeklyLeagueData = serde_json::from_str(&json).expect("snapshot deserializes");

    let awards = compute_awards(&restored).expect("restored snapshot computes");
    assert_eq!(format_awards_summary(&awards), summary);
}
