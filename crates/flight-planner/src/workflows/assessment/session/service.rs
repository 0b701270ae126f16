use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use super::super::engine::ScoringEngine;
use super::super::questionnaire::Questionnaire;
use super::super::report::FlightPlan;
use super::repository::{SessionId, SessionRecord, SessionStore, SessionStoreError};

/// How far a respondent has got through the question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionProgress {
    pub answered: usize,
    pub total: usize,
    pub percent: u8,
}

impl SessionProgress {
    fn new(answered: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            ((answered as f64 / total as f64) * 100.0).round().clamp(0.0, 100.0) as u8
        };

        Self {
            answered,
            total,
            percent,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered >= self.total
    }
}

/// Service composing the session store with the scoring engine.
pub struct AssessmentSessionService<S> {
    store: Arc<S>,
    engine: Arc<ScoringEngine>,
    questionnaire: Arc<Questionnaire>,
}

impl<S> AssessmentSessionService<S>
where
    S: SessionStore + 'static,
{
    pub fn new(store: Arc<S>, engine: ScoringEngine, questionnaire: Questionnaire) -> Self {
        Self {
            store,
            engine: Arc::new(engine),
            questionnaire: Arc::new(questionnaire),
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    /// Record one answer, creating the session on first write.
    pub fn update_response(
        &self,
        id: &SessionId,
        question_id: &str,
        value: i32,
    ) -> Result<SessionProgress, SessionError> {
        let now = Utc::now();
        let mut record = self
            .store
            .fetch(id)?
            .unwrap_or_else(|| SessionRecord::empty(now));

        record.responses.insert(question_id, value);
        record.updated_at = now;
        let progress = self.progress_for(&record);

        self.store.save(id, record)?;
        Ok(progress)
    }

    pub fn progress(&self, id: &SessionId) -> Result<SessionProgress, SessionError> {
        let record = self.store.fetch(id)?.ok_or(SessionError::NotFound)?;
        Ok(self.progress_for(&record))
    }

    /// Score a fully answered session and keep the resulting plan.
    pub fn submit(&self, id: &SessionId) -> Result<FlightPlan, SessionError> {
        let mut record = self.store.fetch(id)?.ok_or(SessionError::NotFound)?;

        let progress = self.progress_for(&record);
        if !progress.is_complete() {
            return Err(SessionError::Incomplete {
                answered: progress.answered,
                total: progress.total,
            });
        }

        let plan = self.engine.flight_plan(&record.responses);
        info!(
            session = %id,
            overall_score = plan.assessment.overall_score,
            level = %plan.assessment.maturity_level,
            "assessment submitted"
        );

        record.flight_plan = Some(plan.clone());
        record.updated_at = Utc::now();
        self.store.save(id, record)?;

        Ok(plan)
    }

    pub fn flight_plan(&self, id: &SessionId) -> Result<FlightPlan, SessionError> {
        let record = self.store.fetch(id)?.ok_or(SessionError::NotFound)?;
        record.flight_plan.ok_or(SessionError::PlanNotReady)
    }

    pub fn reset(&self, id: &SessionId) -> Result<(), SessionError> {
        self.store.remove(id)?;
        Ok(())
    }

    fn progress_for(&self, record: &SessionRecord) -> SessionProgress {
        let answered = self
            .questionnaire
            .questions()
            .iter()
            .filter(|question| record.responses.contains(&question.id))
            .count();
        SessionProgress::new(answered, self.questionnaire.len())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session not found")]
    NotFound,
    #[error("{answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },
    #[error("session has not been submitted yet")]
    PlanNotReady,
    #[error(transparent)]
    Store(#[from] SessionStoreError),
}
