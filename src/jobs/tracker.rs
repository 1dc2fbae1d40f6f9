//! Keyed store of generation jobs for the current session.
//!
//! Every write names the session it belongs to; writes for a session that has
//! since been replaced are dropped, so late results from an abandoned batch
//! never leak into the new one.
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

pub type SessionId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Done { image: String },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    #[serde(flatten)]
    pub status: JobStatus,
    /// Exact text sent to the model; regeneration reuses it verbatim.
    pub prompt: Option<String>,
}

impl Job {
    pub fn pending(prompt: impl Into<String>) -> Self {
        Job { status: JobStatus::Pending, prompt: Some(prompt.into()) }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, JobStatus::Pending)
    }

    pub fn image(&self) -> Option<&str> {
        match &self.status {
            JobStatus::Done { image } => Some(image),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            JobStatus::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Jobs in insertion (display) order, tagged with the session they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub session: SessionId,
    pub jobs: IndexMap<String, Job>,
}

impl Snapshot {
    pub fn is_settled(&self) -> bool {
        self.jobs.values().all(|j| !j.is_pending())
    }
}

#[derive(Clone)]
pub struct JobTracker {
    inner: Arc<RwLock<Snapshot>>,
}

impl Default for JobTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl JobTracker {
    pub fn new() -> Self {
        JobTracker { inner: Arc::new(RwLock::new(Snapshot { session: Uuid::new_v4(), jobs: IndexMap::new() })) }
    }

    /// Replace the whole job set and open a new session.
    pub async fn start_session(&self, jobs: IndexMap<String, Job>) -> SessionId {
        let mut state = self.inner.write().await;
        state.session = Uuid::new_v4();
        state.jobs = jobs;
        tracing::info!(session = %state.session, jobs = state.jobs.len(), "session started");
        state.session
    }

    pub async fn clear(&self) -> SessionId {
        self.start_session(IndexMap::new()).await
    }

    pub async fn session(&self) -> SessionId {
        self.inner.read().await.session
    }

    pub async fn get(&self, key: &str) -> Option<Job> {
        self.inner.read().await.jobs.get(key).cloned()
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.inner.read().await.clone()
    }

    /// Record the outcome of a job. Returns false when the write was dropped
    /// because the session moved on or the key no longer exists.
    pub async fn complete(&self, session: SessionId, key: &str, outcome: AppResult<String>) -> bool {
        let mut state = self.inner.write().await;
        if state.session != session {
            tracing::debug!(key, %session, "discarding result from a stale session");
            return false;
        }
        let Some(job) = state.jobs.get_mut(key) else {
            tracing::debug!(key, "discarding result for unknown job");
            return false;
        };
        job.status = match outcome {
            Ok(image) => JobStatus::Done { image },
            Err(e) => JobStatus::Error { message: e.to_string() },
        };
        true
    }

    /// Put a settled job back to pending, keeping its prompt, and hand back the
    /// prompt to re-issue. A job without a stored prompt is marked as failed.
    pub async fn begin_regeneration(&self, key: &str) -> AppResult<(SessionId, String)> {
        let mut state = self.inner.write().await;
        let session = state.session;
        let job = state.jobs.get_mut(key).ok_or_else(|| AppError::UnknownJob(key.to_string()))?;
        if job.is_pending() {
            return Err(AppError::JobInFlight(key.to_string()));
        }
        let prompt = match job.prompt.as_deref().filter(|p| !p.is_empty()) {
            Some(p) => p.to_string(),
            None => {
                let err = AppError::MissingPrompt(key.to_string());
                tracing::error!(key, "regeneration failed: {}", err);
                job.status = JobStatus::Error { message: err.to_string() };
                return Err(err);
            }
        };
        job.status = JobStatus::Pending;
        Ok((session, prompt))
    }

    /// Label to image of every finished job, in display order.
    pub async fn completed(&self) -> IndexMap<String, String> {
        self.inner
            .read()
            .await
            .jobs
            .iter()
            .filter_map(|(key, job)| job.image().map(|img| (key.clone(), img.to_string())))
            .collect()
    }
}
