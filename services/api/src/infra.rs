use flight_planner::error::AppError;
use flight_planner::workflows::assessment::{
    ResponseSet, SessionId, SessionRecord, SessionStore, SessionStoreError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local session store. Sessions do not survive a restart.
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionStore {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl InMemorySessionStore {
    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<SessionId, SessionRecord>>, SessionStoreError>
    {
        self.records
            .lock()
            .map_err(|_| SessionStoreError::Unavailable("session mutex poisoned".to_string()))
    }
}

impl SessionStore for InMemorySessionStore {
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn save(&self, id: &SessionId, record: SessionRecord) -> Result<(), SessionStoreError> {
        self.lock()?.insert(id.clone(), record);
        Ok(())
    }

    fn remove(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        self.lock()?.remove(id);
        Ok(())
    }
}

/// Reads a JSON object of question id to answer value.
pub(crate) fn load_responses(path: &Path) -> Result<ResponseSet, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_responses(&raw)
}

pub(crate) fn parse_responses(raw: &str) -> Result<ResponseSet, AppError> {
    Ok(serde_json::from_str(raw)?)
}
