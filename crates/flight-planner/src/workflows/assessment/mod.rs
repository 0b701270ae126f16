//! Marketing maturity assessment: scoring, projection, recommendations, and
//! the session workflow that collects answers.

pub mod categories;
pub mod domain;
mod engine;
pub mod questionnaire;
pub mod quick_wins;
pub mod report;
pub mod roadmap;
pub mod router;
pub mod scoring;
pub mod session;
pub mod validation;

#[cfg(test)]
mod tests;

pub use categories::{Category, CategoryMap, CategoryMapError};
pub use domain::{
    AnswerValue, AssessmentResult, CategoryScore, MaturityLevel, Question, QuestionOption,
    ResponseSet, MAX_SCORE,
};
pub use engine::{EngineConfig, ScoringEngine, ScoringParameters};
pub use questionnaire::Questionnaire;
pub use quick_wins::{Effort, Impact, QuickWin, QuickWinCatalog};
pub use report::{render_text, FlightPlan, FlightPlanDocument};
pub use roadmap::{Roadmap, RoadmapPhase, RoadmapStage};
pub use router::assessment_router;
pub use scoring::{GapAnalysis, TrajectoryProjection};
pub use session::{
    AssessmentSessionService, SessionError, SessionId, SessionProgress, SessionRecord,
    SessionStore, SessionStoreError,
};
pub use validation::{ResponseValidator, ValidationIssue, ValidationReport};
