// Player directory: positions, descriptive records, and the simulation seed
// table.
//
// In production the directory comes from an external data source; the
// simulator synthesizes it from the seed table below. The seed table is
// process-wide read-only configuration data, never mutated.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Positions
// ---------------------------------------------------------------------------

/// Fantasy-relevant NFL positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    Qb,
    Rb,
    Wr,
    Te,
    K,
    Def,
    Unknown,
}

impl Position {
    /// Parse a position abbreviation. Unrecognized strings map to `Unknown`.
    pub fn from_abbrev(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "QB" => Position::Qb,
            "RB" => Position::Rb,
            "WR" => Position::Wr,
            "TE" => Position::Te,
            "K" => Position::K,
            "DEF" | "DST" | "D/ST" => Position::Def,
            _ => Position::Unknown,
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Qb => "QB",
            Position::Rb => "RB",
            Position::Wr => "WR",
            Position::Te => "TE",
            Position::K => "K",
            Position::Def => "DEF",
            Position::Unknown => "?",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

// ---------------------------------------------------------------------------
// Player records and the directory
// ---------------------------------------------------------------------------

/// Descriptive record for one player, keyed by id in the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player_id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: Position,
    pub team: String,
}

impl PlayerRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// player id -> record. Ordered so serialized snapshots are reproducible.
pub type PlayerDirectory = BTreeMap<String, PlayerRecord>;

/// Whether an id looks like a defense/special-teams unit (a 2-3 letter
/// uppercase team abbreviation rather than a person's id).
pub fn is_defense_id(id: &str) -> bool {
    (2..=3).contains(&id.len()) && id.bytes().all(|b| b.is_ascii_uppercase())
}

/// Resolve a player id to `"First Last (POS - TEAM)"`, with documented
/// fallbacks for ids missing from the directory.
pub fn resolve_player_name(directory: &PlayerDirectory, player_id: &str) -> String {
    match directory.get(player_id) {
        Some(p) => format!("{} {} ({} - {})", p.first_name, p.last_name, p.position, p.team),
        None if is_defense_id(player_id) => format!("{player_id} D/ST"),
        None => format!("Unknown ({player_id})"),
    }
}

/// Resolve a player id to just `"First Last"`.
pub fn resolve_player_short_name(directory: &PlayerDirectory, player_id: &str) -> String {
    match directory.get(player_id) {
        Some(p) => p.full_name(),
        None if is_defense_id(player_id) => format!("{player_id} D/ST"),
        None => format!("Unknown ({player_id})"),
    }
}

/// Position of a player for scoring purposes. Unknown ids that look like
/// team abbreviations are treated as defenses; everything else scores as a
/// receiver.
pub fn position_of(directory: &PlayerDirectory, player_id: &str) -> Position {
    match directory.get(player_id) {
        Some(p) => p.position,
        None if is_defense_id(player_id) => Position::Def,
        None => Position::Wr,
    }
}

// ---------------------------------------------------------------------------
// Simulation seed table
// ---------------------------------------------------------------------------

/// One row of the static seed table.
#[derive(Debug, Clone, Copy)]
pub struct PlayerSeed {
    pub id: &'static str,
    pub first: &'static str,
    pub last: &'static str,
    pub pos: Position,
    pub team: &'static str,
}

const fn seed(
    id: &'static str,
    first: &'static str,
    last: &'static str,
    pos: Position,
    team: &'static str,
) -> PlayerSeed {
    PlayerSeed { id, first, last, pos, team }
}

/// A curated set of ~100 real NFL players for a 2025-era league, in rough
/// draft order within each position.
pub const PLAYER_SEEDS: &[PlayerSeed] = &[
    // Quarterbacks (20)
    seed("p_qb01", "Josh", "Allen", Position::Qb, "BUF"),
    seed("p_qb02", "Patrick", "Mahomes", Position::Qb, "KC"),
    seed("p_qb03", "Lamar", "Jackson", Position::Qb, "BAL"),
    seed("p_qb04", "Jalen", "Hurts", Position::Qb, "PHI"),
    seed("p_qb05", "Joe", "Burrow", Position::Qb, "CIN"),
    seed("p_qb06", "Jayden", "Daniels", Position::Qb, "WAS"),
    seed("p_qb07", "C.J.", "Stroud", Position::Qb, "HOU"),
    seed("p_qb08", "Dak", "Prescott", Position::Qb, "DAL"),
    seed("p_qb09", "Jared", "Goff", Position::Qb, "DET"),
    seed("p_qb10", "Baker", "Mayfield", Position::Qb, "TB"),
    seed("p_qb11", "Kyler", "Murray", Position::Qb, "ARI"),
    seed("p_qb12", "Caleb", "Williams", Position::Qb, "CHI"),
    seed("p_qb13", "Jordan", "Love", Position::Qb, "GB"),
    seed("p_qb14", "Tua", "Tagovailoa", Position::Qb, "MIA"),
    seed("p_qb15", "Anthony", "Richardson", Position::Qb, "IND"),
    seed("p_qb16", "Sam", "Darnold", Position::Qb, "SEA"),
    seed("p_qb17", "Matthew", "Stafford", Position::Qb, "LAR"),
    seed("p_qb18", "Brock", "Purdy", Position::Qb, "SF"),
    seed("p_qb19", "Justin", "Herbert", Position::Qb, "LAC"),
    seed("p_qb20", "Trevor", "Lawrence", Position::Qb, "JAX"),
    // Running backs (30)
    seed("p_rb01", "Saquon", "Barkley", Position::Rb, "PHI"),
    seed("p_rb02", "Derrick", "Henry", Position::Rb, "BAL"),
    seed("p_rb03", "Bijan", "Robinson", Position::Rb, "ATL"),
    seed("p_rb04", "Jahmyr", "Gibbs", Position::Rb, "DET"),
    seed("p_rb05", "Christian", "McCaffrey", Position::Rb, "SF"),
    seed("p_rb06", "Breece", "Hall", Position::Rb, "NYJ"),
    seed("p_rb07", "Josh", "Jacobs", Position::Rb, "GB"),
    seed("p_rb08", "De'Von", "Achane", Position::Rb, "MIA"),
    seed("p_rb09", "Jonathan", "Taylor", Position::Rb, "IND"),
    seed("p_rb10", "Kenneth", "Walker III", Position::Rb, "SEA"),
    seed("p_rb11", "James", "Cook", Position::Rb, "BUF"),
    seed("p_rb12", "Kyren", "Williams", Position::Rb, "LAR"),
    seed("p_rb13", "Alvin", "Kamara", Position::Rb, "NO"),
    seed("p_rb14", "Isiah", "Pacheco", Position::Rb, "KC"),
    seed("p_rb15", "Joe", "Mixon", Position::Rb, "HOU"),
    seed("p_rb16", "David", "Montgomery", Position::Rb, "DET"),
    seed("p_rb17", "Aaron", "Jones", Position::Rb, "MIN"),
    seed("p_rb18", "Tony", "Pollard", Position::Rb, "TEN"),
    seed("p_rb19", "Rhamondre", "Stevenson", Position::Rb, "NE"),
    seed("p_rb20", "Travis", "Etienne", Position::Rb, "JAX"),
    seed("p_rb21", "Chuba", "Hubbard", Position::Rb, "CAR"),
    seed("p_rb22", "Najee", "Harris", Position::Rb, "LAC"),
    seed("p_rb23", "Rico", "Dowdle", Position::Rb, "CAR"),
    seed("p_rb24", "Chase", "Brown", Position::Rb, "CIN"),
    seed("p_rb25", "Zack", "Moss", Position::Rb, "CIN"),
    seed("p_rb26", "Rachaad", "White", Position::Rb, "TB"),
    seed("p_rb27", "Jerome", "Ford", Position::Rb, "CLE"),
    seed("p_rb28", "D'Andre", "Swift", Position::Rb, "CHI"),
    seed("p_rb29", "Javonte", "Williams", Position::Rb, "DEN"),
    seed("p_rb30", "Zamir", "White", Position::Rb, "LV"),
    // Wide receivers (30)
    seed("p_wr01", "Ja'Marr", "Chase", Position::Wr, "CIN"),
    seed("p_wr02", "CeeDee", "Lamb", Position::Wr, "DAL"),
    seed("p_wr03", "Amon-Ra", "St. Brown", Position::Wr, "DET"),
    seed("p_wr04", "Tyreek", "Hill", Position::Wr, "MIA"),
    seed("p_wr05", "A.J.", "Brown", Position::Wr, "PHI"),
    seed("p_wr06", "Malik", "Nabers", Position::Wr, "NYG"),
    seed("p_wr07", "Nico", "Collins", Position::Wr, "HOU"),
    seed("p_wr08", "Puka", "Nacua", Position::Wr, "LAR"),
    seed("p_wr09", "Justin", "Jefferson", Position::Wr, "MIN"),
    seed("p_wr10", "Davante", "Adams", Position::Wr, "LAR"),
    seed("p_wr11", "Drake", "London", Position::Wr, "ATL"),
    seed("p_wr12", "Garrett", "Wilson", Position::Wr, "NYJ"),
    seed("p_wr13", "DK", "Metcalf", Position::Wr, "PIT"),
    seed("p_wr14", "Terry", "McLaurin", Position::Wr, "WAS"),
    seed("p_wr15", "Mike", "Evans", Position::Wr, "TB"),
    seed("p_wr16", "Chris", "Olave", Position::Wr, "NO"),
    seed("p_wr17", "Stefon", "Diggs", Position::Wr, "HOU"),
    seed("p_wr18", "DeVonta", "Smith", Position::Wr, "PHI"),
    seed("p_wr19", "Brandon", "Aiyuk", Position::Wr, "SF"),
    seed("p_wr20", "Jaylen", "Waddle", Position::Wr, "MIA"),
    seed("p_wr21", "Tee", "Higgins", Position::Wr, "CIN"),
    seed("p_wr22", "Cooper", "Kupp", Position::Wr, "LAR"),
    seed("p_wr23", "Zay", "Flowers", Position::Wr, "BAL"),
    seed("p_wr24", "Rashod", "Bateman", Position::Wr, "BAL"),
    seed("p_wr25", "Jaxon", "Smith-Njigba", Position::Wr, "SEA"),
    seed("p_wr26", "George", "Pickens", Position::Wr, "DAL"),
    seed("p_wr27", "Ladd", "McConkey", Position::Wr, "LAC"),
    seed("p_wr28", "Rome", "Odunze", Position::Wr, "CHI"),
    seed("p_wr29", "Khalil", "Shakir", Position::Wr, "BUF"),
    seed("p_wr30", "Keenan", "Allen", Position::Wr, "LAC"),
    // Tight ends (12)
    seed("p_te01", "Sam", "LaPorta", Position::Te, "DET"),
    seed("p_te02", "Travis", "Kelce", Position::Te, "KC"),
    seed("p_te03", "Trey", "McBride", Position::Te, "ARI"),
    seed("p_te04", "George", "Kittle", Position::Te, "SF"),
    seed("p_te05", "Mark", "Andrews", Position::Te, "BAL"),
    seed("p_te06", "Brock", "Bowers", Position::Te, "LV"),
    seed("p_te07", "Dallas", "Goedert", Position::Te, "PHI"),
    seed("p_te08", "Evan", "Engram", Position::Te, "JAX"),
    seed("p_te09", "David", "Njoku", Position::Te, "CLE"),
    seed("p_te10", "Kyle", "Pitts", Position::Te, "ATL"),
    seed("p_te11", "T.J.", "Hockenson", Position::Te, "MIN"),
    seed("p_te12", "Dalton", "Kincaid", Position::Te, "BUF"),
    // Kickers (10)
    seed("p_k01", "Harrison", "Butker", Position::K, "KC"),
    seed("p_k02", "Justin", "Tucker", Position::K, "BAL"),
    seed("p_k03", "Jake", "Moody", Position::K, "SF"),
    seed("p_k04", "Brandon", "Aubrey", Position::K, "DAL"),
    seed("p_k05", "Cameron", "Dicker", Position::K, "LAC"),
    seed("p_k06", "Ka'imi", "Fairbairn", Position::K, "HOU"),
    seed("p_k07", "Tyler", "Bass", Position::K, "BUF"),
    seed("p_k08", "Younghoe", "Koo", Position::K, "ATL"),
    seed("p_k09", "Jason", "Sanders", Position::K, "MIA"),
    seed("p_k10", "Jake", "Elliott", Position::K, "PHI"),
];

/// Defense "players" are identified by team abbreviation.
pub const DEFENSE_TEAMS: &[&str] = &[
    "SF", "DAL", "BAL", "CLE", "NYJ", "BUF", "MIA", "PIT", "DET", "KC",
];

/// Build the full simulated player directory: seed-table players plus one
/// D/ST record per defense team.
pub fn build_player_directory() -> PlayerDirectory {
    let mut directory = PlayerDirectory::new();

    for s in PLAYER_SEEDS {
        directory.insert(
            s.id.to_string(),
            PlayerRecord {
                player_id: s.id.to_string(),
                first_name: s.first.to_string(),
                last_name: s.last.to_string(),
                position: s.pos,
                team: s.team.to_string(),
            },
        );
    }

    for team in DEFENSE_TEAMS {
        directory.insert(
            team.to_string(),
            PlayerRecord {
                player_id: team.to_string(),
                first_name: team.to_string(),
                last_name: "D/ST".to_string(),
                position: Position::Def,
                team: team.to_string(),
            },
        );
    }

    directory
}
