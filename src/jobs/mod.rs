//! Per-session job bookkeeping and the worker pool that drives jobs.
pub mod scheduler;
pub mod tracker;

pub use scheduler::{BatchScheduler, BatchSummary, JobSpec};
pub use tracker::{Job, JobStatus, JobTracker, SessionId, Snapshot};
