// Renders the award bundle into the fixed-layout text block handed to the
// downstream newsletter generator.
//
// String in, string out: the layout is deterministic, every point value is
// printed with exactly two decimals, and optional awards simply contribute
// no line.

use super::engine::WeeklyAwards;

/// Format the weekly awards as a multi-line summary.
pub fn format_awards_summary(awards: &WeeklyAwards) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("=== WEEKLY AWARDS ===\n".to_string());

    lines.push(format!(
        "🏆 POINT LEADER: {} ({}) with {:.2} points",
        awards.point_leader.manager.team_name,
        awards.point_leader.manager.display_name,
        awards.point_leader.points
    ));

    lines.push(format!(
        "💩 WORST PERFORMANCE: {} ({}) with {:.2} points",
        awards.worst_performance.manager.team_name,
        awards.worst_performance.manager.display_name,
        awards.worst_performance.points
    ));

    if let Some(bench) = &awards.best_bench_player {
        lines.push(format!(
            "💺 BEST BENCH PLAYER: {} on {}'s bench with {:.2} points",
            bench.player_name, bench.manager.team_name, bench.bench_points
        ));
    }

    if let Some(waiver) = &awards.best_waiver_pickup {
        let bid_str = match waiver.waiver_bid {
            Some(bid) => format!(" (FAAB bid: ${bid})"),
            None => String::new(),
        };
        lines.push(format!(
            "🔄 BEST WAIVER PICKUP: {} picked up by {}{} — scored {:.2} points",
            waiver.player_name, waiver.manager.team_name, bid_str, waiver.points
        ));
    }

    lines.push(format!(
        "⚔️ CLOSEST MATCHUP: {} ({:.2}) beat {} ({:.2}) by {:.2} points",
        awards.closest_matchup.winner.team_name,
        awards.closest_matchup.winner_points,
        awards.closest_matchup.loser.team_name,
        awards.closest_matchup.loser_points,
        awards.closest_matchup.differential
    ));

    lines.push(format!(
        "💥 BIGGEST BLOWOUT: {} ({:.2}) crushed {} ({:.2}) by {:.2} points",
        awards.biggest_blowout.winner.team_name,
        awards.biggest_blowout.winner_points,
        awards.biggest_blowout.loser.team_name,
        awards.biggest_blowout.loser_points,
        awards.biggest_blowout.differential
    ));

    lines.push("\n=== MATCHUP RESULTS ===\n".to_string());
    for result in &awards.matchup_results {
        lines.push(format!(
            "{} ({:.2}) vs {} ({:.2}) — Winner: {}",
            result.team1.manager.team_name,
            result.team1.points,
            result.team2.manager.team_name,
            result.team2.points,
            result.winner.team_name
        ));
    }

    lines.push("\n=== STANDINGS ===\n".to_string());
    for (i, standing) in awards.standings.iter().enumerate() {
        lines.push(format!(
            "{}. {} ({}) — {}W-{}L-{}T — {:.2} PF",
            i + 1,
            standing.manager.team_name,
            standing.manager.display_name,
            standing.wins,
            standing.losses,
            standing.ties,
            standing.total_points
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::awards::compute_awards;
    use crate::sim::generate_mock_league_data;

    fn week_5_summary() -> (crate::model::WeeklyLeagueData, WeeklyAwards, String) {
        let data = generate_mock_league_data(5);
        let awards = compute_awards(&data).unwrap();
        let summary = format_awards_summary(&awards);
        (data, awards, summary)
    }

    // -- Section layout --

    #[test]
    fn summary_contains_all_sections() {
        let (_, _, summary) = week_5_summary();
        assert!(summary.contains("=== WEEKLY AWARDS ==="));
        assert!(summary.contains("POINT LEADER"));
        assert!(summary.contains("WORST PERFORMANCE"));
        assert!(summary.contains("BENCH"));
        assert!(summary.contains("=== MATCHUP RESULTS ==="));
        assert!(summary.contains("=== STANDINGS ==="));
    }

    #[test]
    fn sections_appear_in_order() {
        let (_, _, summary) = week_5_summary();
        let awards_at = summary.find("=== WEEKLY AWARDS ===").unwrap();
        let results_at = summary.find("=== MATCHUP RESULTS ===").unwrap();
        let standings_at = summary.find("=== STANDINGS ===").unwrap();
        assert!(awards_at < results_at);
        assert!(results_at < standings_at);
    }

    #[test]
    fn summary_is_substantial() {
        let (_, _, summary) = week_5_summary();
        assert!(summary.len() > 200);
    }

    // -- Content --

    #[test]
    fn summary_names_actual_teams() {
        let (data, _, summary) = week_5_summary();
        let found = data
            .users
            .iter()
            .filter_map(|u| u.metadata.team_name.as_deref())
            .any(|name| summary.contains(name));
        assert!(found, "no simulated team name appeared in the summary");
    }

    #[test]
    fn scores_use_two_decimal_places() {
        let (_, awards, summary) = week_5_summary();
        assert!(summary.contains(&format!("{:.2} points", awards.point_leader.points)));
        assert!(summary.contains(&format!("{:.2} points", awards.worst_performance.points)));
        assert!(summary.contains(&format!("{:.2} PF", awards.standings[0].total_points)));
    }

    #[test]
    fn standings_lines_are_one_indexed() {
        let (_, _, summary) = week_5_summary();
        assert!(summary.contains("\n1. "));
        assert!(summary.contains("\n10. "));
    }

    #[test]
    fn matchup_results_render_one_line_each() {
        let (_, awards, summary) = week_5_summary();
        let result_lines = summary.lines().filter(|l| l.contains(" vs ")).count();
        assert_eq!(result_lines, awards.matchup_results.len());
    }

    // -- Optional awards --

    #[test]
    fn null_optional_awards_emit_no_lines() {
        let (_, mut awards, _) = week_5_summary();
        awards.best_bench_player = None;
        awards.best_waiver_pickup = None;
        let summary = format_awards_summary(&awards);
        assert!(!summary.contains("BEST BENCH PLAYER"));
        assert!(!summary.contains("BEST WAIVER PICKUP"));
        assert!(summary.contains("POINT LEADER"));
    }

    #[test]
    fn waiver_line_includes_faab_bid_when_present() {
        let (_, mut awards, _) = week_5_summary();
        awards.best_waiver_pickup = Some(crate::awards::BestWaiverPickupAward {
            kind: crate::awards::engine::AwardKind::BestWaiverPickup,
            manager: awards.point_leader.manager.clone(),
            player_name: "T.J. Hockenson (TE - MIN)".into(),
            player_id: "p_te11".into(),
            points: 14.3,
            waiver_bid: Some(23),
        });
        let summary = format_awards_summary(&awards);
        assert!(summary.contains("(FAAB bid: $23)"));
        assert!(summary.contains("scored 14.30 points"));
    }
}
