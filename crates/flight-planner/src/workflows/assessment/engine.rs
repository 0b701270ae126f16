use super::categories::CategoryMap;
use super::domain::{AssessmentResult, CategoryScore, MaturityLevel, ResponseSet};
use super::quick_wins::{QuickWin, QuickWinCatalog, DEFAULT_QUICK_WIN_LIMIT};
use super::report::FlightPlan;
use super::roadmap::Roadmap;
use super::scoring::{
    self, GapAnalysis, TrajectoryProjection, DEFAULT_ANNUAL_VELOCITY, DEFAULT_BENCHMARK_TARGET,
    DEFAULT_MARKET_LEADER_TARGET,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Numeric knobs shared by the projection, gap, and quick-win steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringParameters {
    pub annual_velocity: f64,
    pub benchmark_target: i32,
    pub market_leader_target: i32,
    pub quick_win_limit: usize,
}

impl Default for ScoringParameters {
    fn default() -> Self {
        Self {
            annual_velocity: DEFAULT_ANNUAL_VELOCITY,
            benchmark_target: DEFAULT_BENCHMARK_TARGET,
            market_leader_target: DEFAULT_MARKET_LEADER_TARGET,
            quick_win_limit: DEFAULT_QUICK_WIN_LIMIT,
        }
    }
}

/// Reference data and parameters the engine is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub parameters: ScoringParameters,
    pub categories: CategoryMap,
    pub catalog: QuickWinCatalog,
    pub roadmap: Roadmap,
}

impl EngineConfig {
    pub fn standard() -> Self {
        Self::with_parameters(ScoringParameters::default())
    }

    pub fn with_parameters(parameters: ScoringParameters) -> Self {
        Self {
            parameters,
            categories: CategoryMap::standard(),
            catalog: QuickWinCatalog::standard(),
            roadmap: Roadmap::standard(),
        }
    }
}

/// Stateless engine turning a response set into a flight plan. Every method
/// is a pure function of its arguments and the configuration.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: EngineConfig,
}

impl ScoringEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn standard() -> Self {
        Self::new(EngineConfig::standard())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn assess(&self, responses: &ResponseSet) -> AssessmentResult {
        self.assess_at(responses, Utc::now())
    }

    pub fn assess_at(&self, responses: &ResponseSet, timestamp: DateTime<Utc>) -> AssessmentResult {
        let overall_score = scoring::overall_score(responses);
        let categories = scoring::category_scores(responses, &self.config.categories);

        AssessmentResult {
            overall_score,
            normalized_score: overall_score,
            maturity_level: MaturityLevel::from_score(overall_score),
            categories,
            timestamp,
            responses: responses.clone(),
        }
    }

    pub fn trajectory(&self, current_score: i32) -> TrajectoryProjection {
        scoring::project(current_score, self.config.parameters.annual_velocity)
    }

    pub fn gap_analysis(&self, current_score: i32) -> GapAnalysis {
        let parameters = &self.config.parameters;
        scoring::analyze_gap(
            current_score,
            parameters.benchmark_target,
            parameters.market_leader_target,
            parameters.annual_velocity,
        )
    }

    pub fn quick_wins(&self, categories: &[CategoryScore]) -> Vec<QuickWin> {
        self.config
            .catalog
            .recommend(categories, self.config.parameters.quick_win_limit)
    }

    /// The roadmap is the same template for every starting score.
    pub fn roadmap(&self, _current_score: i32) -> Roadmap {
        self.config.roadmap.clone()
    }

    pub fn flight_plan(&self, responses: &ResponseSet) -> FlightPlan {
        self.flight_plan_at(responses, Utc::now())
    }

    pub fn flight_plan_at(&self, responses: &ResponseSet, timestamp: DateTime<Utc>) -> FlightPlan {
        let assessment = self.assess_at(responses, timestamp);
        let trajectory = self.trajectory(assessment.overall_score);
        let gap_analysis = self.gap_analysis(assessment.overall_score);
        let quick_wins = self.quick_wins(&assessment.categories);
        let roadmap = self.roadmap(assessment.overall_score);

        debug!(
            responses = responses.len(),
            overall_score = assessment.overall_score,
            level = %assessment.maturity_level,
            quick_wins = quick_wins.len(),
            "flight plan computed"
        );

        FlightPlan {
            assessment,
            trajectory,
            gap_analysis,
            quick_wins,
            roadmap,
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}
