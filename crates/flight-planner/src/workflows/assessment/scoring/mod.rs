mod aggregate;
mod classifier;
mod gap;
mod trajectory;

pub use aggregate::{category_scores, overall_score};
pub use classifier::classify;
pub use gap::{analyze_gap, months_to_close, GapAnalysis};
pub use trajectory::{project, HorizonLevels, TrajectoryProjection, PROJECTION_HORIZONS};

/// Points of maturity gained per twelve months.
pub const DEFAULT_ANNUAL_VELOCITY: f64 = 8.5;
pub const DEFAULT_BENCHMARK_TARGET: i32 = 70;
pub const DEFAULT_MARKET_LEADER_TARGET: i32 = 82;

/// Rounds half away from negative infinity, so 58.5 becomes 59 and -2.5 becomes -2.
pub(crate) fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
