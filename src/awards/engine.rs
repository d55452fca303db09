// Award computation: a pure transformation from one week's league snapshot
// to the award bundle plus full standings.
//
// Tie-break policy is deliberate and stable throughout: pair winners use
// `>=` (an exact tie goes to the first-listed entry, matching Sleeper's
// convention), and every "best so far" fold uses strict `>` so the
// first-seen candidate keeps the award on a tie.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::model::{LeagueUser, MatchupEntry, Roster, WeeklyLeagueData};
use crate::players::resolve_player_name;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum AwardError {
    /// The snapshot contained no matchup entries at all. Callers must not
    /// request awards for a week without games.
    #[error("no matchup entries in snapshot for week {week}")]
    NoMatchups { week: u32 },

    /// Entries were present but none formed a valid head-to-head pair, so
    /// there is nothing to rank.
    #[error("no valid head-to-head matchup pairs in snapshot for week {week}")]
    NoValidMatchups { week: u32 },
}

// ---------------------------------------------------------------------------
// Award types
// ---------------------------------------------------------------------------

/// Display info for the manager behind a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerInfo {
    pub roster_id: u32,
    pub user_id: String,
    pub display_name: String,
    pub team_name: String,
}

/// Award discriminant, serialized alongside each award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardKind {
    PointLeader,
    WorstPerformance,
    BestBenchPlayer,
    BestWaiverPickup,
    ClosestMatchup,
    BiggestBlowout,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointLeaderAward {
    pub kind: AwardKind,
    pub manager: ManagerInfo,
    pub points: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorstPerformanceAward {
    pub kind: AwardKind,
    pub manager: ManagerInfo,
    pub points: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestBenchPlayerAward {
    pub kind: AwardKind,
    pub manager: ManagerInfo,
    pub player_name: String,
    pub player_id: String,
    pub bench_points: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestWaiverPickupAward {
    pub kind: AwardKind,
    pub manager: ManagerInfo,
    pub player_name: String,
    pub player_id: String,
    pub points: f64,
    pub waiver_bid: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosestMatchupAward {
    pub kind: AwardKind,
    pub winner: ManagerInfo,
    pub loser: ManagerInfo,
    pub winner_points: f64,
    pub loser_points: f64,
    pub differential: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiggestBlowoutAward {
    pub kind: AwardKind,
    pub winner: ManagerInfo,
    pub loser: ManagerInfo,
    pub winner_points: f64,
    pub loser_points: f64,
    pub differential: f64,
}

/// One team's side of a resolved matchup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamScore {
    pub manager: ManagerInfo,
    pub points: f64,
}

/// A resolved head-to-head result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchupResult {
    pub matchup_id: u32,
    pub team1: TeamScore,
    pub team2: TeamScore,
    pub winner: ManagerInfo,
    pub loser: ManagerInfo,
    pub differential: f64,
}

impl MatchupResult {
    /// Points scored by the given roster in this result.
    fn points_for(&self, roster_id: u32) -> f64 {
        if self.team1.manager.roster_id == roster_id {
            self.team1.points
        } else {
            self.team2.points
        }
    }
}

/// Season-to-date standing for one roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingEntry {
    pub manager: ManagerInfo,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub total_points: f64,
}

/// The full weekly award bundle. Bench and waiver awards are absent when no
/// candidate exists; that is an expected outcome, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyAwards {
    pub point_leader: PointLeaderAward,
    pub worst_performance: WorstPerformanceAward,
    pub best_bench_player: Option<BestBenchPlayerAward>,
    pub best_waiver_pickup: Option<BestWaiverPickupAward>,
    pub closest_matchup: ClosestMatchupAward,
    pub biggest_blowout: BiggestBlowoutAward,
    pub matchup_results: Vec<MatchupResult>,
    pub standings: Vec<StandingEntry>,
}

// ---------------------------------------------------------------------------
// Manager lookup
// ---------------------------------------------------------------------------

/// Join users to rosters, producing roster id -> manager display info.
///
/// Fallback chain per field: display name falls back to username then
/// "Unknown"; team name falls back to display name then "Unknown". Rebuilt
/// fresh for every computation; holds no cross-week state.
pub fn build_manager_lookup(
    users: &[LeagueUser],
    rosters: &[Roster],
) -> HashMap<u32, ManagerInfo> {
    let user_by_id: HashMap<&str, &LeagueUser> =
        users.iter().map(|u| (u.user_id.as_str(), u)).collect();

    let mut lookup = HashMap::new();
    for roster in rosters {
        let user = user_by_id.get(roster.owner_id.as_str()).copied();
        let display_name = match user {
            Some(u) => u.display_name.clone().unwrap_or_else(|| u.username.clone()),
            None => "Unknown".to_string(),
        };
        let team_name = match user {
            Some(u) => u
                .metadata
                .team_name
                .clone()
                .or_else(|| u.display_name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            None => "Unknown".to_string(),
        };
        lookup.insert(
            roster.roster_id,
            ManagerInfo {
                roster_id: roster.roster_id,
                user_id: roster.owner_id.clone(),
                display_name,
                team_name,
            },
        );
    }
    lookup
}

/// Resolve a roster id to manager info, substituting a placeholder on a
/// miss so the engine never fails over absent reference data.
fn manager_or_unknown(lookup: &HashMap<u32, ManagerInfo>, roster_id: u32) -> ManagerInfo {
    lookup.get(&roster_id).cloned().unwrap_or_else(|| {
        warn!("no manager info for roster {roster_id}, substituting placeholder");
        ManagerInfo {
            roster_id,
            user_id: "unknown".to_string(),
            display_name: "Unknown Manager".to_string(),
            team_name: "Unknown Team".to_string(),
        }
    })
}

// ---------------------------------------------------------------------------
// Main computation
// ---------------------------------------------------------------------------

/// Compute the full award bundle for one week's snapshot.
pub fn compute_awards(data: &WeeklyLeagueData) -> Result<WeeklyAwards, AwardError> {
    let matchups = &data.matchups;
    if matchups.is_empty() {
        return Err(AwardError::NoMatchups { week: data.week });
    }

    let lookup = build_manager_lookup(&data.users, &data.rosters);
    let manager = |roster_id: u32| manager_or_unknown(&lookup, roster_id);

    // Group entries by matchup id, preserving first-seen order.
    let mut groups: Vec<(u32, Vec<&MatchupEntry>)> = Vec::new();
    for m in matchups {
        match groups.iter_mut().find(|(id, _)| *id == m.matchup_id) {
            Some((_, group)) => group.push(m),
            None => groups.push((m.matchup_id, vec![m])),
        }
    }

    // Resolve valid head-to-head pairs. Anything that is not exactly two
    // entries is a data integrity problem and is skipped.
    let mut matchup_results: Vec<MatchupResult> = Vec::new();
    for (matchup_id, teams) in &groups {
        if teams.len() != 2 {
            warn!(
                "matchup {matchup_id} has {} entries, expected 2; skipping",
                teams.len()
            );
            continue;
        }
        let (a, b) = (teams[0], teams[1]);
        // `>=` hands an exact tie to the first-listed entry.
        let (winner, loser) = if a.points >= b.points { (a, b) } else { (b, a) };
        matchup_results.push(MatchupResult {
            matchup_id: *matchup_id,
            team1: TeamScore {
                manager: manager(a.roster_id),
                points: a.points,
            },
            team2: TeamScore {
                manager: manager(b.roster_id),
                points: b.points,
            },
            winner: manager(winner.roster_id),
            loser: manager(loser.roster_id),
            differential: (a.points - b.points).abs(),
        });
    }
    if matchup_results.is_empty() {
        return Err(AwardError::NoValidMatchups { week: data.week });
    }

    // Point leader and worst performance scan every entry, including any
    // that sat in a malformed group.
    let mut leader = &matchups[0];
    let mut worst = &matchups[0];
    for m in matchups {
        if m.points > leader.points {
            leader = m;
        }
        if m.points < worst.points {
            worst = m;
        }
    }

    let point_leader = PointLeaderAward {
        kind: AwardKind::PointLeader,
        manager: manager(leader.roster_id),
        points: leader.points,
    };
    let worst_performance = WorstPerformanceAward {
        kind: AwardKind::WorstPerformance,
        manager: manager(worst.roster_id),
        points: worst.points,
    };

    // Best bench player: highest-scoring non-starter across the league.
    let mut best_bench_player: Option<BestBenchPlayerAward> = None;
    for m in matchups {
        let starter_set: HashSet<&str> = m.starters.iter().map(String::as_str).collect();
        for pid in &m.players {
            if starter_set.contains(pid.as_str()) {
                continue;
            }
            let pts = m.players_points.get(pid).copied().unwrap_or(0.0);
            let better = match &best_bench_player {
                None => true,
                Some(best) => pts > best.bench_points,
            };
            if better {
                best_bench_player = Some(BestBenchPlayerAward {
                    kind: AwardKind::BestBenchPlayer,
                    manager: manager(m.roster_id),
                    player_name: resolve_player_name(&data.players, pid),
                    player_id: pid.clone(),
                    bench_points: pts,
                });
            }
        }
    }

    // Best waiver pickup: cross-reference completed waiver/free-agent adds
    // with the points scored this week. A player belongs to exactly one
    // roster per week, so the last-write-wins insert below should never
    // actually collide.
    let mut weekly_player_points: HashMap<&str, (f64, u32)> = HashMap::new();
    for m in matchups {
        for (pid, pts) in &m.players_points {
            weekly_player_points.insert(pid.as_str(), (*pts, m.roster_id));
        }
    }

    let mut best_waiver_pickup: Option<BestWaiverPickupAward> = None;
    for tx in data.transactions.iter().filter(|t| t.is_completed_pickup()) {
        for (pid, acquiring_roster) in &tx.adds {
            let Some(&(pts, _)) = weekly_player_points.get(pid.as_str()) else {
                continue;
            };
            let better = match &best_waiver_pickup {
                None => true,
                Some(best) => pts > best.points,
            };
            if better {
                best_waiver_pickup = Some(BestWaiverPickupAward {
                    kind: AwardKind::BestWaiverPickup,
                    manager: manager(*acquiring_roster),
                    player_name: resolve_player_name(&data.players, pid),
                    player_id: pid.clone(),
                    points: pts,
                    waiver_bid: tx.settings.as_ref().and_then(|s| s.waiver_bid),
                });
            }
        }
    }

    // Closest matchup and biggest blowout from the differential ordering.
    // With a single result both awards point at the same matchup.
    let mut by_differential = matchup_results.clone();
    by_differential.sort_by(|a, b| a.differential.total_cmp(&b.differential));
    let closest = &by_differential[0];
    let blowout = &by_differential[by_differential.len() - 1];

    let closest_matchup = ClosestMatchupAward {
        kind: AwardKind::ClosestMatchup,
        winner: closest.winner.clone(),
        loser: closest.loser.clone(),
        winner_points: closest.points_for(closest.winner.roster_id),
        loser_points: closest.points_for(closest.loser.roster_id),
        differential: closest.differential,
    };
    let biggest_blowout = BiggestBlowoutAward {
        kind: AwardKind::BiggestBlowout,
        winner: blowout.winner.clone(),
        loser: blowout.loser.clone(),
        winner_points: blowout.points_for(blowout.winner.roster_id),
        loser_points: blowout.points_for(blowout.loser.roster_id),
        differential: blowout.differential,
    };

    // Standings: wins desc, then season points desc. The sort is stable so
    // equal records keep input order.
    let mut standings: Vec<StandingEntry> = data
        .rosters
        .iter()
        .map(|r| StandingEntry {
            manager: manager(r.roster_id),
            wins: r.settings.wins,
            losses: r.settings.losses,
            ties: r.settings.ties,
            total_points: r.settings.total_points(),
        })
        .collect();
    standings.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then(b.total_points.total_cmp(&a.total_points))
    });

    Ok(WeeklyAwards {
        point_leader,
        worst_performance,
        best_bench_player,
        best_waiver_pickup,
        closest_matchup,
        biggest_blowout,
        matchup_results,
        standings,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
