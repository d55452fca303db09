// Draft simulation: bounded-window shuffles over per-position pools, then a
// round-robin fill of ten rosters from a fixed positional template.

use crate::players::{PlayerSeed, Position, DEFENSE_TEAMS, PLAYER_SEEDS};

use super::rng::Mulberry32;

/// Number of teams in the simulated league.
pub const LEAGUE_SIZE: usize = 10;

/// Positional template: players drafted per roster.
pub const QB_PER_ROSTER: usize = 2;
pub const RB_PER_ROSTER: usize = 3;
pub const WR_PER_ROSTER: usize = 3;
pub const TE_PER_ROSTER: usize = 1;
pub const K_PER_ROSTER: usize = 1;
pub const DEF_PER_ROSTER: usize = 1;

/// How far ahead of its pool slot a player may be swapped during the draft
/// shuffle. Keeps the general draft-order shape while adding variance.
const SHUFFLE_WINDOW: usize = 3;

/// One simulated team's drafted players, grouped by position.
#[derive(Debug, Clone)]
pub struct DraftedRoster {
    pub qb: Vec<String>,
    pub rb: Vec<String>,
    pub wr: Vec<String>,
    pub te: Vec<String>,
    pub k: Vec<String>,
    pub def: Vec<String>,
}

impl DraftedRoster {
    /// All drafted player ids in positional order.
    pub fn all_players(&self) -> Vec<String> {
        let mut players = Vec::with_capacity(
            self.qb.len() + self.rb.len() + self.wr.len() + self.te.len() + self.k.len()
                + self.def.len(),
        );
        players.extend(self.qb.iter().cloned());
        players.extend(self.rb.iter().cloned());
        players.extend(self.wr.iter().cloned());
        players.extend(self.te.iter().cloned());
        players.extend(self.k.iter().cloned());
        players.extend(self.def.iter().cloned());
        players
    }
}

/// Swap each element only with a nearby one (within `SHUFFLE_WINDOW`): the
/// result keeps rough draft order but varies between seeds.
pub fn soft_shuffle(rng: &mut Mulberry32, items: &[String]) -> Vec<String> {
    let mut result = items.to_vec();
    for i in 0..result.len() {
        let swap_range = SHUFFLE_WINDOW.min(result.len() - i - 1);
        if swap_range > 0 {
            let j = i + (rng.next_f64() * (swap_range + 1) as f64) as usize;
            result.swap(i, j);
        }
    }
    result
}

fn pool(position: Position) -> Vec<String> {
    PLAYER_SEEDS
        .iter()
        .filter(|s| s.pos == position)
        .map(|s: &PlayerSeed| s.id.to_string())
        .collect()
}

/// Run the simulated draft: shuffle each position pool, then deal players
/// round-robin into `LEAGUE_SIZE` rosters per the positional template.
///
/// The seed table always holds enough players per position for ten rosters,
/// so the draws below cannot run dry.
pub fn simulate_draft(rng: &mut Mulberry32) -> Vec<DraftedRoster> {
    let qbs = soft_shuffle(rng, &pool(Position::Qb));
    let rbs = soft_shuffle(rng, &pool(Position::Rb));
    let wrs = soft_shuffle(rng, &pool(Position::Wr));
    let tes = soft_shuffle(rng, &pool(Position::Te));
    let ks = soft_shuffle(rng, &pool(Position::K));
    let defs = soft_shuffle(
        rng,
        &DEFENSE_TEAMS.iter().map(|t| t.to_string()).collect::<Vec<_>>(),
    );

    let mut qb_idx = 0;
    let mut rb_idx = 0;
    let mut wr_idx = 0;
    let mut te_idx = 0;
    let mut k_idx = 0;
    let mut def_idx = 0;

    let mut take = |pool: &[String], idx: &mut usize, count: usize| -> Vec<String> {
        let slice = pool[*idx..*idx + count].to_vec();
        *idx += count;
        slice
    };

    (0..LEAGUE_SIZE)
        .map(|_| DraftedRoster {
            qb: take(&qbs, &mut qb_idx, QB_PER_ROSTER),
            rb: take(&rbs, &mut rb_idx, RB_PER_ROSTER),
            wr: take(&wrs, &mut wr_idx, WR_PER_ROSTER),
            te: take(&tes, &mut te_idx, TE_PER_ROSTER),
            k: take(&ks, &mut k_idx, K_PER_ROSTER),
            def: take(&defs, &mut def_idx, DEF_PER_ROSTER),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    // -- Soft shuffle --

    #[test]
    fn soft_shuffle_preserves_multiset() {
        let items: Vec<String> = (0..20).map(|i| format!("p{i:02}")).collect();
        let mut rng = Mulberry32::new(42);
        let shuffled = soft_shuffle(&mut rng, &items);

        let mut sorted = shuffled.clone();
        sorted.sort();
        let mut expected = items.clone();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn soft_shuffle_is_deterministic() {
        let items: Vec<String> = (0..20).map(|i| format!("p{i:02}")).collect();
        let a = soft_shuffle(&mut Mulberry32::new(9), &items);
        let b = soft_shuffle(&mut Mulberry32::new(9), &items);
        assert_eq!(a, b);
    }

    #[test]
    fn soft_shuffle_handles_tiny_inputs() {
        let mut rng = Mulberry32::new(1);
        assert!(soft_shuffle(&mut rng, &[]).is_empty());
        let one = vec!["only".to_string()];
        assert_eq!(soft_shuffle(&mut rng, &one), one);
    }

    // -- Draft --

    #[test]
    fn draft_fills_ten_rosters_per_template() {
        let mut rng = Mulberry32::for_week(5);
        let rosters = simulate_draft(&mut rng);
        assert_eq!(rosters.len(), LEAGUE_SIZE);

        for roster in &rosters {
            assert_eq!(roster.qb.len(), QB_PER_ROSTER);
            assert_eq!(roster.rb.len(), RB_PER_ROSTER);
            assert_eq!(roster.wr.len(), WR_PER_ROSTER);
            assert_eq!(roster.te.len(), TE_PER_ROSTER);
            assert_eq!(roster.k.len(), K_PER_ROSTER);
            assert_eq!(roster.def.len(), DEF_PER_ROSTER);
            assert_eq!(roster.all_players().len(), 11);
        }
    }

    #[test]
    fn drafted_players_are_unique_across_rosters() {
        let mut rng = Mulberry32::for_week(2);
        let rosters = simulate_draft(&mut rng);

        let all: Vec<String> = rosters.iter().flat_map(|r| r.all_players()).collect();
        let unique: HashSet<&String> = all.iter().collect();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn draft_varies_between_weeks() {
        let week2 = simulate_draft(&mut Mulberry32::for_week(2));
        let week9 = simulate_draft(&mut Mulberry32::for_week(9));
        let order2: Vec<String> = week2.iter().flat_map(|r| r.all_players()).collect();
        let order9: Vec<String> = week9.iter().flat_map(|r| r.all_players()).collect();
        assert_ne!(order2, order9);
    }
}
