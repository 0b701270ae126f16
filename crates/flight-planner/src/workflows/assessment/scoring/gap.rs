use serde::{Deserialize, Serialize};

/// Distance from the current score to the two reference targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub vs_industry_benchmark: i32,
    pub vs_market_leaders: i32,
    pub benchmark_target: i32,
    pub market_leader_target: i32,
    /// `None` when the gap is open and the velocity can never close it.
    pub months_to_close_benchmark: Option<u32>,
    pub months_to_close_market_leaders: Option<u32>,
}

/// Gaps are clamped at zero once a target is met. Months-to-close uses the
/// same annual velocity as the trajectory projection.
pub fn analyze_gap(
    current: i32,
    benchmark_target: i32,
    market_leader_target: i32,
    annual_velocity: f64,
) -> GapAnalysis {
    let benchmark_gap = (benchmark_target - current).max(0);
    let leader_gap = (market_leader_target - current).max(0);

    GapAnalysis {
        vs_industry_benchmark: benchmark_gap,
        vs_market_leaders: leader_gap,
        benchmark_target,
        market_leader_target,
        months_to_close_benchmark: months_to_close(benchmark_gap, annual_velocity),
        months_to_close_market_leaders: months_to_close(leader_gap, annual_velocity),
    }
}

/// Whole months needed to close `gap` at `annual_velocity`, rounded up.
pub fn months_to_close(gap: i32, annual_velocity: f64) -> Option<u32> {
    if gap <= 0 {
        return Some(0);
    }

    if annual_velocity <= 0.0 || !annual_velocity.is_finite() {
        return None;
    }

    let months = (f64::from(gap) * 12.0 / annual_velocity).ceil();
    if months > f64::from(u32::MAX) {
        None
    } else {
        Some(months as u32)
    }
}
