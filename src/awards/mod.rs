// Weekly awards: computation engine and summary formatting.

pub mod engine;
pub mod summary;

pub use engine::{
    compute_awards, AwardError, AwardKind, BestBenchPlayerAward, BestWaiverPickupAward, BiggestBlowoutAward,
    ClosestMatchupAward, ManagerInfo, MatchupResult, PointLeaderAward, StandingEntry, TeamScore,
    WeeklyAwards, WorstPerformanceAward,
};
pub use summary::format_awards_summary;
