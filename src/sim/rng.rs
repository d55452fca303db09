// Seeded pseudo-random source for the simulator.
//
// Mulberry32: 32-bit state, advanced by a fixed mixing recurrence. The bit
// manipulation is a frozen contract -- cross-week reproducibility depends on
// it, so the constants must not be substituted for "equivalent" mixers.

/// Deterministic PRNG with explicit integer state.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Mulberry32 { state: seed }
    }

    /// Seed for a given week's snapshot.
    pub fn for_week(week: u32) -> Self {
        Mulberry32::new(week.wrapping_mul(7919).wrapping_add(42))
    }

    /// Independent seed for one team's result in one week, so season-record
    /// synthesis is reproducible in isolation.
    pub fn for_team_week(week: u32, team_idx: u32) -> Self {
        Mulberry32::new(
            week.wrapping_mul(7919)
                .wrapping_add(team_idx.wrapping_mul(31))
                .wrapping_add(42),
        )
    }

    /// Next value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = (self.state ^ (self.state >> 15)).wrapping_mul(1 | self.state);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        (t ^ (t >> 14)) as f64 / 4_294_967_296.0
    }

    /// Uniform value in [min, max).
    pub fn in_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform index in [0, n).
    pub fn index(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize
    }

    /// Bernoulli draw.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

/// Round to the given number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
