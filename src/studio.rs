//! Orchestration layer tying selections, prompts, the job tracker and the
//! worker pool together for one user session.
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::generation::generator::Generator;
use crate::generation::suggest::{SuggestionField, Suggester};
use crate::image::InlineImage;
use crate::jobs::{BatchScheduler, BatchSummary, Job, JobSpec, JobTracker, SessionId, Snapshot};
use crate::prompt::builder;
use crate::selection::{self, Selection, IMAGINATION_KEY};

/// Prompts a selection resolves to, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedJob {
    pub key: String,
    pub prompt: String,
    pub context: String,
}

/// Jobs registered with the tracker and ready to be driven. Awaiting `run`
/// settles every one of them.
pub struct BatchRun {
    scheduler: BatchScheduler,
    session: SessionId,
    source: String,
    jobs: Vec<JobSpec>,
}

impl BatchRun {
    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.jobs.iter().map(|j| j.key.as_str())
    }

    pub async fn run(self) -> BatchSummary {
        self.scheduler.run(self.session, &self.source, self.jobs).await
    }
}

#[derive(Clone)]
pub struct Studio {
    scheduler: BatchScheduler,
    suggester: Suggester,
    tracker: JobTracker,
    source: Arc<RwLock<Option<String>>>,
}

impl Studio {
    pub fn new(generator: Generator, suggester: Suggester, workers: usize) -> Self {
        let tracker = JobTracker::new();
        Studio {
            scheduler: BatchScheduler::new(generator, tracker.clone(), workers),
            suggester,
            tracker,
            source: Arc::new(RwLock::new(None)),
        }
    }

    pub fn tracker(&self) -> &JobTracker {
        &self.tracker
    }

    /// Accept a new source photo; previous results are discarded.
    pub async fn upload(&self, image: String) -> AppResult<SessionId> {
        InlineImage::from_data_url(&image)?;
        *self.source.write().await = Some(image);
        Ok(self.tracker.clear().await)
    }

    pub async fn reset(&self) -> SessionId {
        *self.source.write().await = None;
        self.tracker.clear().await
    }

    /// Resolve a selection into keyed prompts without touching the tracker.
    pub async fn preview(&self, selection: &Selection) -> AppResult<Vec<PlannedJob>> {
        let planned = match selection {
            Selection::Quick(trip) => selection::quick_eras(trip)?
                .into_iter()
                .map(|era| PlannedJob { prompt: builder::era_prompt(&era), context: era.clone(), key: era })
                .collect(),
            Selection::Cultural(look) => {
                let prompt = builder::cultural_prompt(look.country.as_deref(), look.region.as_deref())?;
                let key = look.theme_key().ok_or(AppError::MissingSelection("country and region"))?;
                if !look.is_catalogued() {
                    tracing::debug!(look = %key, "cultural look is not in the catalog");
                }
                vec![PlannedJob { key: key.clone(), prompt, context: key }]
            }
            Selection::Imagination(inputs) => {
                let prompt = builder::imagination_prompt(inputs, &self.suggester).await?;
                vec![PlannedJob { key: IMAGINATION_KEY.to_string(), prompt, context: inputs.context() }]
            }
            Selection::Filter(choice) => {
                let prompt = builder::filter_prompt(choice.name.as_deref())?;
                let name = choice.name.as_deref().unwrap_or_default().trim().to_string();
                vec![PlannedJob { key: name.clone(), prompt, context: name }]
            }
        };
        Ok(planned)
    }

    /// Replace the job set with pending jobs for `selection` and hand back the run.
    /// Incomplete selections fail here, before any job exists.
    pub async fn launch(&self, selection: &Selection) -> AppResult<BatchRun> {
        let source = self.source.read().await.clone().ok_or(AppError::NoSourceImage)?;
        let planned = self.preview(selection).await?;

        let jobs: IndexMap<String, Job> =
            planned.iter().map(|p| (p.key.clone(), Job::pending(p.prompt.clone()))).collect();
        let session = self.tracker.start_session(jobs).await;
        tracing::info!(%session, mode = selection.mode(), jobs = planned.len(), "generation launched");

        Ok(BatchRun {
            scheduler: self.scheduler.clone(),
            session,
            source,
            jobs: planned.into_iter().map(|p| JobSpec::new(p.key, p.prompt, p.context)).collect(),
        })
    }

    /// Re-issue one job with its stored prompt, leaving the rest of the session alone.
    /// The job key doubles as the fallback context.
    pub async fn regenerate(&self, key: &str) -> AppResult<BatchRun> {
        let source = self.source.read().await.clone().ok_or(AppError::NoSourceImage)?;
        let (session, prompt) = self.tracker.begin_regeneration(key).await?;
        tracing::info!(%session, key, "regenerating");
        Ok(BatchRun {
            scheduler: self.scheduler.clone(),
            session,
            source,
            jobs: vec![JobSpec::new(key, prompt, key)],
        })
    }

    /// Launch and wait for every job to settle.
    pub async fn generate(&self, selection: &Selection) -> AppResult<Snapshot> {
        self.launch(selection).await?.run().await;
        Ok(self.tracker.snapshot().await)
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.tracker.snapshot().await
    }

    /// Finished images keyed by label, as consumed by the album compositor.
    pub async fn album(&self) -> IndexMap<String, String> {
        self.tracker.completed().await
    }

    pub async fn suggest(&self, field: SuggestionField) -> AppResult<String> {
        self.suggester.suggest(field).await
    }
}
