// Library root: re-exports all modules so integration tests and external
// consumers can access the crate's public API.

pub mod awards;
pub mod config;
pub mod model;
pub mod players;
pub mod sim;
