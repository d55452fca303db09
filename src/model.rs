// League data contract shared by the live data collector and the simulator.
//
// These shapes mirror the Sleeper API payloads (users, rosters, matchups,
// transactions) trimmed to the fields the awards engine consumes. Both
// producers build a complete `WeeklyLeagueData` value atomically; the engine
// treats it as immutable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::players::PlayerDirectory;

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Free-form user metadata. Sleeper stores the custom team name here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

/// A manager in the league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueUser {
    pub user_id: String,
    pub username: String,
    /// Display name is optional on the wire; the manager lookup falls back
    /// to the username and then to "Unknown".
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub metadata: UserMetadata,
    #[serde(default)]
    pub is_owner: bool,
}

// ---------------------------------------------------------------------------
// Rosters
// ---------------------------------------------------------------------------

/// Season-cumulative record and points for one roster.
///
/// Total points are stored split: `fpts` is the whole-number component and
/// `fpts_decimal` the hundredths, reconstructed as `fpts + fpts_decimal / 100`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterSettings {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    #[serde(default)]
    pub fpts: u32,
    #[serde(default)]
    pub fpts_decimal: u32,
    #[serde(default)]
    pub fpts_against: u32,
    #[serde(default)]
    pub fpts_against_decimal: u32,
    #[serde(default)]
    pub waiver_position: u32,
    #[serde(default)]
    pub waiver_budget_used: u32,
    #[serde(default)]
    pub total_moves: u32,
}

impl RosterSettings {
    /// Season total points for standings ordering.
    pub fn total_points(&self) -> f64 {
        self.fpts as f64 + self.fpts_decimal as f64 / 100.0
    }
}

/// One team's roster snapshot for a league week.
///
/// Invariant: every id in `starters` is also present in `players`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub roster_id: u32,
    pub owner_id: String,
    pub starters: Vec<String>,
    pub players: Vec<String>,
    pub settings: RosterSettings,
}

// ---------------------------------------------------------------------------
// Matchups
// ---------------------------------------------------------------------------

/// A single team's side of a head-to-head matchup for one week.
///
/// A valid matchup id is shared by exactly two entries. `points` equals the
/// sum of `players_points` over `starters` within floating-point tolerance
/// (0.1). Any player in `players` but not in `starters` is a bench player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchupEntry {
    pub roster_id: u32,
    pub matchup_id: u32,
    pub points: f64,
    /// Per-player point breakdown for every rostered player.
    pub players_points: BTreeMap<String, f64>,
    pub starters: Vec<String>,
    pub players: Vec<String>,
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Waiver,
    FreeAgent,
    Trade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Complete,
    Failed,
}

/// Per-transaction settings. Only waiver claims carry a FAAB bid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionSettings {
    #[serde(default)]
    pub waiver_bid: Option<u32>,
}

/// A roster move: waiver claim, free-agent pickup, or trade.
///
/// Only completed waiver/free-agent transactions with a non-empty `adds`
/// mapping participate in award computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    #[serde(default)]
    pub settings: Option<TransactionSettings>,
    /// Added player id -> acquiring roster id.
    #[serde(default)]
    pub adds: BTreeMap<String, u32>,
    /// Dropped player id -> releasing roster id.
    #[serde(default)]
    pub drops: BTreeMap<String, u32>,
    #[serde(default)]
    pub roster_ids: Vec<u32>,
    #[serde(default)]
    pub consenter_ids: Vec<u32>,
    pub creator: String,
    /// Week the transaction applies to.
    pub leg: u32,
    /// Epoch milliseconds.
    pub created: i64,
    pub status_updated: i64,
}

impl Transaction {
    /// Whether this transaction counts toward the waiver-pickup award.
    pub fn is_completed_pickup(&self) -> bool {
        matches!(
            self.kind,
            TransactionKind::Waiver | TransactionKind::FreeAgent
        ) && self.status == TransactionStatus::Complete
            && !self.adds.is_empty()
    }
}

// ---------------------------------------------------------------------------
// League metadata and the aggregate root
// ---------------------------------------------------------------------------

/// League-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueInfo {
    pub league_id: String,
    pub name: String,
    pub season: String,
    pub total_rosters: u32,
    pub status: String,
    pub sport: String,
}

/// Everything the awards engine needs for one (league, week) pair.
///
/// Built atomically by a live collector or by the simulator, consumed once,
/// then discarded. The core never mutates or caches this value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyLeagueData {
    pub league: LeagueInfo,
    pub season: String,
    pub week: u32,
    pub users: Vec<LeagueUser>,
    pub rosters: Vec<Roster>,
    pub matchups: Vec<MatchupEntry>,
    pub transactions: Vec<Transaction>,
    pub players: PlayerDirectory,
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Season point reconstruction --

    #[test]
    fn total_points_combines_whole_and_decimal() {
        let settings = RosterSettings {
            fpts: 1234,
            fpts_decimal: 56,
            ..Default::default()
        };
        assert!((settings.total_points() - 1234.56).abs() < f64::EPSILON);
    }

    #[test]
    fn total_points_zero_decimal() {
        let settings = RosterSettings {
            fpts: 100,
            ..Default::default()
        };
        assert!((settings.total_points() - 100.0).abs() < f64::EPSILON);
    }

    // -- Pickup filter --

    #[test]
    fn completed_waiver_with_adds_is_pickup() {
        let mut adds = BTreeMap::new();
        adds.insert("p_te11".to_string(), 3);
        let tx = Transaction {
            transaction_id: "t1".into(),
            kind: TransactionKind::Waiver,
            status: TransactionStatus::Complete,
            settings: Some(TransactionSettings {
                waiver_bid: Some(12),
            }),
            adds,
            drops: BTreeMap::new(),
            roster_ids: vec![3],
            consenter_ids: vec![3],
            creator: "u03".into(),
            leg: 5,
            created: 0,
            status_updated: 0,
        };
        assert!(tx.is_completed_pickup());
    }

    #[test]
    fn trades_and_failed_and_empty_adds_are_not_pickups() {
        let mut adds = BTreeMap::new();
        adds.insert("p_wr01".to_string(), 1);

        let base = Transaction {
            transaction_id: "t2".into(),
            kind: TransactionKind::FreeAgent,
            status: TransactionStatus::Complete,
            settings: None,
            adds,
            drops: BTreeMap::new(),
            roster_ids: vec![1],
            consenter_ids: vec![1],
            creator: "u01".into(),
            leg: 5,
            created: 0,
            status_updated: 0,
        };
        assert!(base.is_completed_pickup());

        let trade = Transaction {
            kind: TransactionKind::Trade,
            ..base.clone()
        };
        assert!(!trade.is_completed_pickup());

        let failed = Transaction {
            status: TransactionStatus::Failed,
            ..base.clone()
        };
        assert!(!failed.is_completed_pickup());

        let empty = Transaction {
            adds: BTreeMap::new(),
            ..base
        };
        assert!(!empty.is_completed_pickup());
    }

    // -- Wire shape --

    #[test]
    fn transaction_kind_uses_sleeper_names() {
        let json = serde_json::to_string(&TransactionKind::FreeAgent).unwrap();
        assert_eq!(json, "\"free_agent\"");
        let parsed: TransactionKind = serde_json::from_str("\"waiver\"").unwrap();
        assert_eq!(parsed, TransactionKind::Waiver);
    }
}
