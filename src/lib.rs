//! Kritrim generation core
//!
//! Turns a photo plus a user's selection into AI-generated variants.
//!
//! Modules:
//! - `selection`: the four generation modes and their editing rules.
//! - `catalog`: built-in eras, filters and imagination options.
//! - `prompt`: prompt templates and the fallback prompt heuristic.
//! - `generation`: model traits, retry/backoff, image generation, suggestions.
//! - `jobs`: per-session job tracker and the worker pool that drives jobs.
//! - `studio`: orchestration of one user session.
//! - `gemini`: REST client implementing the model traits.
//! - `api`: Axum handlers and router used by the server binary.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gemini;
pub mod generation;
pub mod image;
pub mod jobs;
pub mod prompt;
pub mod selection;
pub mod studio;

use std::sync::Arc;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use gemini::GeminiClient;
pub use selection::Selection;
pub use studio::Studio;

use generation::generator::Generator;
use generation::suggest::Suggester;

/// Wire a `Studio` to the Gemini backend described by `config`.
pub fn studio_from_config(config: &Config) -> Studio {
    let client = Arc::new(GeminiClient::from_config(config));
    Studio::new(
        Generator::new(client.clone(), config.retry_policy()),
        Suggester::new(client),
        config.batch_concurrency,
    )
}
