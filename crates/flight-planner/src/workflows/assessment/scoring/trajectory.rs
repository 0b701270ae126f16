use super::super::domain::{MaturityLevel, MAX_SCORE};
use super::{classify, round_half_up};
use serde::{Deserialize, Serialize};

/// Months ahead at which a projection is reported.
pub const PROJECTION_HORIZONS: [u32; 3] = [6, 12, 24];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorizonLevels {
    pub current: MaturityLevel,
    pub months_6: MaturityLevel,
    pub months_12: MaturityLevel,
    pub months_24: MaturityLevel,
}

/// Linear forward projection of the overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryProjection {
    pub months_6: i32,
    pub months_12: i32,
    pub months_24: i32,
    pub annual_velocity: f64,
    pub maturity_levels: HorizonLevels,
}

impl TrajectoryProjection {
    /// Projected scores paired with their horizon in months.
    pub fn horizons(&self) -> [(u32, i32, MaturityLevel); 3] {
        [
            (6, self.months_6, self.maturity_levels.months_6),
            (12, self.months_12, self.maturity_levels.months_12),
            (24, self.months_24, self.maturity_levels.months_24),
        ]
    }
}

/// Grows `current` by `annual_velocity` points per year, capped at the
/// maximum score. Velocity is taken as given, including zero or negative.
pub fn project(current: i32, annual_velocity: f64) -> TrajectoryProjection {
    let at = |months: u32| {
        let projected = f64::from(current) + annual_velocity * f64::from(months) / 12.0;
        projected.min(f64::from(MAX_SCORE))
    };

    let [six, twelve, twenty_four] = PROJECTION_HORIZONS.map(at);

    TrajectoryProjection {
        months_6: round_half_up(six),
        months_12: round_half_up(twelve),
        months_24: round_half_up(twenty_four),
        annual_velocity,
        maturity_levels: HorizonLevels {
            current: classify(f64::from(current)),
            months_6: classify(six),
            months_12: classify(twelve),
            months_24: classify(twenty_four),
        },
    }
}
