use super::super::domain::ResponseSet;
use super::super::report::FlightPlan;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Everything stored under one session key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub responses: ResponseSet,
    pub flight_plan: Option<FlightPlan>,
    pub updated_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            responses: ResponseSet::new(),
            flight_plan: None,
            updated_at: now,
        }
    }
}

/// Durable key-value storage keyed by session. Writes replace the whole
/// record; the last write wins.
pub trait SessionStore: Send + Sync {
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError>;
    fn save(&self, id: &SessionId, record: SessionRecord) -> Result<(), SessionStoreError>;
    fn remove(&self, id: &SessionId) -> Result<(), SessionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
