use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::assessment::questionnaire::Questionnaire;
use crate::workflows::assessment::session::{
    AssessmentSessionService, SessionId, SessionRecord, SessionStore, SessionStoreError,
};
use crate::workflows::assessment::{assessment_router, ResponseSet, ScoringEngine};

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionStore for MemoryStore {
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError> {
        Ok(self.records.lock().unwrap().get(id).cloned())
    }

    fn save(&self, id: &SessionId, record: SessionRecord) -> Result<(), SessionStoreError> {
        self.records.lock().unwrap().insert(id.clone(), record);
        Ok(())
    }

    fn remove(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        self.records.lock().unwrap().remove(id);
        Ok(())
    }
}

impl MemoryStore {
    pub(super) fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

pub(super) struct OfflineStore;

impl SessionStore for OfflineStore {
    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError> {
        Err(SessionStoreError::Unavailable("cache offline".to_string()))
    }

    fn save(&self, _id: &SessionId, _record: SessionRecord) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable("cache offline".to_string()))
    }

    fn remove(&self, _id: &SessionId) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable("cache offline".to_string()))
    }
}

pub(super) fn assessed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 14, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Every standard question answered with the same value.
pub(super) fn uniform_responses(value: i32) -> ResponseSet {
    Questionnaire::standard()
        .questions()
        .iter()
        .map(|question| (question.id.clone(), value))
        .collect()
}

pub(super) fn build_service() -> (AssessmentSessionService<MemoryStore>, MemoryStore) {
    let store = MemoryStore::default();
    let service = AssessmentSessionService::new(
        Arc::new(store.clone()),
        ScoringEngine::standard(),
        Questionnaire::standard(),
    );
    (service, store)
}

pub(super) fn build_router() -> axum::Router {
    let (service, _) = build_service();
    assessment_router(Arc::new(service))
}

pub(super) async fn read_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    serde_json::from_str(&read_body(response).await).expect("json payload")
}
