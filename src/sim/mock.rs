// Assembles a complete, internally-consistent weekly league snapshot from
// nothing but a week number.
//
// Everything downstream of the week seed is deterministic: the draft, the
// scoring draws, the matchup pairings, the season records, and the
// transaction timestamps (derived from the season schedule, never from the
// wall clock). Calling this twice with the same week yields byte-identical
// snapshots.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use crate::model::{
    LeagueInfo, LeagueUser, MatchupEntry, Roster, RosterSettings, Transaction, TransactionKind,
    TransactionSettings, TransactionStatus, UserMetadata, WeeklyLeagueData,
};
use crate::players::{build_player_directory, position_of, PLAYER_SEEDS};

use super::draft::{simulate_draft, LEAGUE_SIZE};
use super::rng::{round_to, Mulberry32};
use super::scoring::simulate_player_points;

const LEAGUE_ID: &str = "sim_league_001";
const SEASON: &str = "2025";

// ---------------------------------------------------------------------------
// Manager seed table
// ---------------------------------------------------------------------------

struct FantasyTeam {
    user_id: &'static str,
    username: &'static str,
    display_name: &'static str,
    team_name: &'static str,
}

const FANTASY_TEAMS: &[FantasyTeam] = &[
    FantasyTeam { user_id: "u01", username: "gridiron_guru", display_name: "Mike", team_name: "Gridiron Gurus" },
    FantasyTeam { user_id: "u02", username: "td_machine", display_name: "Sarah", team_name: "Touchdown Machines" },
    FantasyTeam { user_id: "u03", username: "waiver_king", display_name: "Jake", team_name: "Waiver Wire Kings" },
    FantasyTeam { user_id: "u04", username: "benchwarmer", display_name: "Emma", team_name: "Benchwarmer Brigade" },
    FantasyTeam { user_id: "u05", username: "redzone_rob", display_name: "Rob", team_name: "Red Zone Rockets" },
    FantasyTeam { user_id: "u06", username: "fantasy_flop", display_name: "Lisa", team_name: "Fantasy Flops" },
    FantasyTeam { user_id: "u07", username: "qb_whisperer", display_name: "Tom", team_name: "QB Whisperers" },
    FantasyTeam { user_id: "u08", username: "trade_shark", display_name: "Priya", team_name: "Trade Sharks" },
    FantasyTeam { user_id: "u09", username: "sleeper_pick", display_name: "Carlos", team_name: "Sleeper Picks" },
    FantasyTeam { user_id: "u10", username: "dynasty_dan", display_name: "Dan", team_name: "Dynasty Destroyers" },
];

// ---------------------------------------------------------------------------
// Schedule-derived timestamps
// ---------------------------------------------------------------------------

/// Epoch millis of the given week's Thursday-night kickoff. Transaction
/// timestamps hang off this instead of the wall clock so snapshots stay
/// reproducible.
fn week_anchor_millis(week: u32) -> i64 {
    let opening_kickoff = NaiveDate::from_ymd_opt(2025, 9, 4)
        .and_then(|d| d.and_hms_opt(20, 15, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(0);
    opening_kickoff + (week as i64 - 1) * 7 * 86_400_000
}

// ---------------------------------------------------------------------------
// Snapshot generation
// ---------------------------------------------------------------------------

/// Generate the full league snapshot for one week.
pub fn generate_mock_league_data(week: u32) -> WeeklyLeagueData {
    let mut rng = Mulberry32::for_week(week);
    let players = build_player_directory();
    let drafted = simulate_draft(&mut rng);

    let league = LeagueInfo {
        league_id: LEAGUE_ID.to_string(),
        name: "Sunday Scaries Fantasy League".to_string(),
        season: SEASON.to_string(),
        total_rosters: LEAGUE_SIZE as u32,
        status: "in_season".to_string(),
        sport: "nfl".to_string(),
    };

    let users: Vec<LeagueUser> = FANTASY_TEAMS
        .iter()
        .map(|t| LeagueUser {
            user_id: t.user_id.to_string(),
            username: t.username.to_string(),
            display_name: Some(t.display_name.to_string()),
            metadata: UserMetadata {
                team_name: Some(t.team_name.to_string()),
            },
            is_owner: t.user_id == "u01",
        })
        .collect();

    // Cumulative records prior to this week. Each (week, team) result
    // reseeds independently so a single team's history is reproducible
    // without replaying the whole league. Win chance tilts slightly toward
    // lower draft-order indices.
    let records: Vec<(u32, u32)> = (0..LEAGUE_SIZE)
        .map(|idx| {
            let mut wins = 0;
            let mut losses = 0;
            for w in 1..week {
                let mut week_rng = Mulberry32::for_team_week(w, idx as u32);
                let win_chance = 0.35 + (10 - idx) as f64 * 0.03;
                if week_rng.next_f64() < win_chance {
                    wins += 1;
                } else {
                    losses += 1;
                }
            }
            (wins, losses)
        })
        .collect();

    // Rosters: starters are the positional template leaders, with the FLEX
    // slot a coin flip between the extra RB and the extra WR.
    let rosters: Vec<Roster> = drafted
        .iter()
        .enumerate()
        .map(|(idx, dr)| {
            let all_players = dr.all_players();
            let flex = if rng.next_f64() > 0.5 {
                dr.rb[2].clone()
            } else {
                dr.wr[2].clone()
            };
            let starters = vec![
                dr.qb[0].clone(),
                dr.rb[0].clone(),
                dr.rb[1].clone(),
                dr.wr[0].clone(),
                dr.wr[1].clone(),
                dr.te[0].clone(),
                flex,
                dr.k[0].clone(),
                dr.def[0].clone(),
            ];

            let (wins, losses) = records[idx];
            let fpts = (60.0 + wins as f64 * 25.0 + rng.next_f64() * 200.0).round() as u32;
            let waiver_budget_used = (rng.next_f64() * 50.0) as u32;
            let total_moves = (rng.next_f64() * 10.0) as u32;
            let fpts_decimal = (rng.next_f64() * 100.0) as u32;
            let fpts_against = (fpts as f64 - 50.0 + rng.next_f64() * 100.0).round() as u32;
            let fpts_against_decimal = (rng.next_f64() * 100.0) as u32;

            Roster {
                roster_id: idx as u32 + 1,
                owner_id: FANTASY_TEAMS[idx].user_id.to_string(),
                starters,
                players: all_players,
                settings: RosterSettings {
                    wins,
                    losses,
                    ties: 0,
                    fpts,
                    fpts_decimal,
                    fpts_against,
                    fpts_against_decimal,
                    waiver_position: idx as u32 + 1,
                    waiver_budget_used,
                    total_moves,
                },
            }
        })
        .collect();

    // Matchup pairing: full Fisher-Yates over the team indices, then pair
    // sequentially into five matchups.
    let mut order: Vec<usize> = (0..LEAGUE_SIZE).collect();
    for i in (1..order.len()).rev() {
        let j = (rng.next_f64() * (i + 1) as f64) as usize;
        order.swap(i, j);
    }

    let mut matchups: Vec<MatchupEntry> = Vec::with_capacity(LEAGUE_SIZE);
    for matchup_id in 1..=(LEAGUE_SIZE as u32 / 2) {
        let pair_start = (matchup_id as usize - 1) * 2;
        for &team_idx in &order[pair_start..pair_start + 2] {
            let roster = &rosters[team_idx];
            let mut players_points: BTreeMap<String, f64> = BTreeMap::new();
            for pid in &roster.players {
                let position = position_of(&players, pid);
                let is_starter = roster.starters.contains(pid);
                players_points.insert(
                    pid.clone(),
                    simulate_player_points(&mut rng, position, is_starter),
                );
            }
            let total = round_to(
                roster
                    .starters
                    .iter()
                    .map(|pid| players_points.get(pid).copied().unwrap_or(0.0))
                    .sum(),
                2,
            );
            matchups.push(MatchupEntry {
                roster_id: roster.roster_id,
                matchup_id,
                points: total,
                players_points,
                starters: roster.starters.clone(),
                players: roster.players.clone(),
            });
        }
    }

    // Transactions: a few completed pickups from the undrafted pool, each
    // optionally dropping the acquiring roster's last bench player.
    let num_transactions = 2 + (rng.next_f64() * 3.0) as usize;
    let drafted_ids: HashSet<&str> = rosters
        .iter()
        .flat_map(|r| r.players.iter().map(String::as_str))
        .collect();
    let undrafted: Vec<&str> = PLAYER_SEEDS
        .iter()
        .map(|s| s.id)
        .filter(|id| !drafted_ids.contains(id))
        .collect();

    let anchor = week_anchor_millis(week);
    let mut transactions: Vec<Transaction> = Vec::new();
    for (i, added) in undrafted.iter().take(num_transactions).enumerate() {
        let roster_idx = rng.index(LEAGUE_SIZE);
        let roster = &rosters[roster_idx];

        let dropped = roster
            .players
            .iter()
            .filter(|pid| !roster.starters.contains(*pid))
            .last()
            .cloned();

        let is_waiver = rng.next_f64() > 0.4;
        let settings = if is_waiver {
            Some(TransactionSettings {
                waiver_bid: Some((rng.next_f64() * 30.0) as u32 + 1),
            })
        } else {
            None
        };

        let mut adds = BTreeMap::new();
        adds.insert(added.to_string(), roster.roster_id);
        let mut drops = BTreeMap::new();
        if let Some(d) = dropped {
            drops.insert(d, roster.roster_id);
        }

        // Claims clear through the day before kickoff.
        let created = anchor - 86_400_000 + i as i64 * 3_600_000;
        transactions.push(Transaction {
            transaction_id: format!("sim_tx_{week}_{i}"),
            kind: if is_waiver {
                TransactionKind::Waiver
            } else {
                TransactionKind::FreeAgent
            },
            status: TransactionStatus::Complete,
            settings,
            adds,
            drops,
            roster_ids: vec![roster.roster_id],
            consenter_ids: vec![roster.roster_id],
            creator: FANTASY_TEAMS[roster_idx].user_id.to_string(),
            leg: week,
            created,
            status_updated: created + 3_600_000,
        });
    }

    WeeklyLeagueData {
        league,
        season: SEASON.to_string(),
        week,
        users,
        rosters,
        matchups,
        transactions,
        players,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
