//! Per-respondent answer collection backed by a pluggable store.

pub mod repository;
pub mod service;

pub use repository::{SessionId, SessionRecord, SessionStore, SessionStoreError};
pub use service::{AssessmentSessionService, SessionError, SessionProgress};
