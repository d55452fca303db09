// Deterministic league simulator: seeded RNG, draft, scoring model, and the
// full weekly snapshot generator.

pub mod draft;
pub mod mock;
pub mod rng;
pub mod scoring;

pub use mock::generate_mock_league_data;
