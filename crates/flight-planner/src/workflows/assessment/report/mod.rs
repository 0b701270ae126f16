mod export;
mod text;

pub use export::{to_csv, to_json, write_csv, ExportError, FlightPlanDocument};
pub use text::render_text;

use super::domain::AssessmentResult;
use super::quick_wins::QuickWin;
use super::roadmap::Roadmap;
use super::scoring::{GapAnalysis, TrajectoryProjection};
use serde::{Deserialize, Serialize};

/// Composite report handed to presentation and export layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPlan {
    pub assessment: AssessmentResult,
    pub trajectory: TrajectoryProjection,
    pub gap_analysis: GapAnalysis,
    pub quick_wins: Vec<QuickWin>,
    pub roadmap: Roadmap,
}
