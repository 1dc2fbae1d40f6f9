//! Fixed-size worker pool draining a shared queue of jobs.
//!
//! Workers are futures polled together on the calling task, so the worker count
//! is a ceiling on in-flight model calls rather than a thread count.
use std::collections::VecDeque;

use futures::future::join_all;
use tokio::sync::Mutex;

use crate::generation::generator::Generator;

use super::tracker::{JobTracker, SessionId};

pub const DEFAULT_WORKERS: usize = 2;

/// One unit of work: the tracker key, the prompt to send and the fallback context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpec {
    pub key: String,
    pub prompt: String,
    pub context: String,
}

impl JobSpec {
    pub fn new(key: impl Into<String>, prompt: impl Into<String>, context: impl Into<String>) -> Self {
        JobSpec { key: key.into(), prompt: prompt.into(), context: context.into() }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub done: usize,
    pub failed: usize,
    /// Results that arrived after their session was replaced.
    pub discarded: usize,
}

impl BatchSummary {
    fn merge(mut self, other: BatchSummary) -> Self {
        self.done += other.done;
        self.failed += other.failed;
        self.discarded += other.discarded;
        self
    }
}

#[derive(Clone)]
pub struct BatchScheduler {
    generator: Generator,
    tracker: JobTracker,
    workers: usize,
}

impl BatchScheduler {
    pub fn new(generator: Generator, tracker: JobTracker, workers: usize) -> Self {
        BatchScheduler { generator, tracker, workers: workers.max(1) }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Drive every job to `done` or `error`. A failing job never stops the others.
    pub async fn run(&self, session: SessionId, source: &str, jobs: Vec<JobSpec>) -> BatchSummary {
        let total = jobs.len();
        let queue = Mutex::new(VecDeque::from(jobs));
        let worker_count = self.workers.min(total);
        tracing::info!(%session, total, workers = worker_count, "batch started");

        let summaries = join_all((0..worker_count).map(|worker| self.worker(worker, session, source, &queue))).await;
        let summary = summaries.into_iter().fold(BatchSummary::default(), BatchSummary::merge);

        tracing::info!(
            %session,
            done = summary.done,
            failed = summary.failed,
            discarded = summary.discarded,
            "batch settled"
        );
        summary
    }

    async fn worker(&self, worker: usize, session: SessionId, source: &str, queue: &Mutex<VecDeque<JobSpec>>) -> BatchSummary {
        let mut summary = BatchSummary::default();
        loop {
            let next = queue.lock().await.pop_front();
            let Some(job) = next else { break };

            tracing::debug!(worker, key = %job.key, "claimed job");
            let outcome = self.generator.generate(source, &job.prompt, &job.context).await;
            let succeeded = outcome.is_ok();
            match &outcome {
                Ok(_) => tracing::info!(key = %job.key, "job done"),
                Err(e) => tracing::error!(key = %job.key, "job failed: {}", e),
            }

            if !self.tracker.complete(session, &job.key, outcome).await {
                summary.discarded += 1;
            } else if succeeded {
                summary.done += 1;
            } else {
                summary.failed += 1;
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};
    use crate::generation::retry::RetryPolicy;
    use crate::generation::{ImageModel, ModelReply};
    use crate::image::InlineImage;
    use crate::jobs::tracker::Job;
    use async_trait::async_trait;
    use indexmap::IndexMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex as StdMutex};
    use std::time::Duration;

    const SOURCE: &str = "data:image/png;base64,AAAA";

    /// Takes 100ms per call; prompts containing "fail" get a hard error.
    #[derive(Default)]
    struct Slow {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
        order: StdMutex<Vec<String>>,
    }

    #[async_trait]
    impl ImageModel for Slow {
        async fn edit_image(&self, _source: &InlineImage, prompt: &str) -> AppResult<ModelReply> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            self.order.lock().unwrap().push(prompt.to_string());
            tokio::time::sleep(Duration::from_millis(100)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            if prompt.contains("fail") {
                Err(AppError::Gemini("Status: 400, Body: rejected".into()))
            } else {
                Ok(ModelReply::Image(InlineImage::new("image/png", prompt)))
            }
        }
    }

    async fn setup(keys: &[&str], workers: usize) -> (Arc<Slow>, JobTracker, BatchScheduler, SessionId, Vec<JobSpec>) {
        let model = Arc::new(Slow::default());
        let tracker = JobTracker::new();
        let specs: Vec<JobSpec> = keys.iter().map(|k| JobSpec::new(*k, format!("prompt {k}"), *k)).collect();
        let jobs: IndexMap<String, Job> = specs.iter().map(|s| (s.key.clone(), Job::pending(s.prompt.clone()))).collect();
        let session = tracker.start_session(jobs).await;
        let generator = Generator::new(model.clone(), RetryPolicy::default());
        let scheduler = BatchScheduler::new(generator, tracker.clone(), workers);
        (model, tracker, scheduler, session, specs)
    }

    #[tokio::test(start_paused = true)]
    async fn never_more_than_two_in_flight() {
        let keys = ["a", "b", "c", "d", "e", "f", "g"];
        let (model, tracker, scheduler, session, specs) = setup(&keys, DEFAULT_WORKERS).await;

        let summary = scheduler.run(session, SOURCE, specs).await;

        assert_eq!(summary, BatchSummary { done: 7, failed: 0, discarded: 0 });
        assert_eq!(model.peak.load(Ordering::SeqCst), 2);
        assert!(tracker.snapshot().await.is_settled());
    }

    #[tokio::test(start_paused = true)]
    async fn queue_is_claimed_first_come_first_served() {
        let keys = ["Viking Warrior", "Cyberpunk Hacker", "Ghibli"];
        let (model, tracker, scheduler, session, specs) = setup(&keys, 2).await;

        scheduler.run(session, SOURCE, specs).await;

        let order = model.order.lock().unwrap().clone();
        assert_eq!(&order[..2], &["prompt Viking Warrior".to_string(), "prompt Cyberpunk Hacker".to_string()]);
        assert_eq!(order[2], "prompt Ghibli");
        let snap = tracker.snapshot().await;
        assert_eq!(snap.jobs.keys().collect::<Vec<_>>(), keys.to_vec());
    }

    #[tokio::test(start_paused = true)]
    async fn failures_do_not_stop_the_batch() {
        let keys = ["ok-1", "fail-2", "ok-3", "fail-4"];
        let (_model, tracker, scheduler, session, specs) = setup(&keys, 2).await;

        let summary = scheduler.run(session, SOURCE, specs).await;

        assert_eq!(summary.done, 2);
        assert_eq!(summary.failed, 2);
        let snap = tracker.snapshot().await;
        assert!(snap.jobs["fail-2"].error().unwrap().contains("rejected"));
        assert!(snap.jobs["ok-3"].image().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn results_for_replaced_session_are_discarded() {
        let keys = ["a", "b"];
        let (_model, tracker, scheduler, session, specs) = setup(&keys, 2).await;
        let newer = tracker.clear().await;
        assert_ne!(newer, session);

        let summary = scheduler.run(session, SOURCE, specs).await;

        assert_eq!(summary.discarded, 2);
        assert!(tracker.snapshot().await.jobs.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn single_worker_runs_sequentially() {
        let (model, _tracker, scheduler, session, specs) = setup(&["a", "b", "c"], 1).await;
        let started = tokio::time::Instant::now();
        scheduler.run(session, SOURCE, specs).await;
        assert_eq!(model.peak.load(Ordering::SeqCst), 1);
        assert_eq!(started.elapsed(), Duration::from_millis(300));
    }
}
