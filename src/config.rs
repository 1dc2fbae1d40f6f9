//! Env-driven configuration for the server, the CLI and the library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binaries. Everything except the API key has a default.
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::generation::retry::RetryPolicy;
use crate::jobs::scheduler::DEFAULT_WORKERS;

pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub image_model: String,
    pub text_model: String,
    pub batch_concurrency: usize,
    pub retry_max_attempts: u32,
    pub retry_base_delay_ms: u64,
    pub api_host: String,
    pub api_port: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> AppResult<Self> {
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| AppError::Config("GEMINI_API_KEY is not set".to_string()))?;
        Ok(Config {
            gemini_api_key,
            gemini_api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string()),
            image_model: env::var("GEMINI_IMAGE_MODEL").unwrap_or_else(|_| "gemini-2.5-flash-image-preview".to_string()),
            text_model: env::var("GEMINI_TEXT_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            batch_concurrency: parse_var("BATCH_CONCURRENCY", DEFAULT_WORKERS)?,
            retry_max_attempts: parse_var("RETRY_MAX_ATTEMPTS", 3)?,
            retry_base_delay_ms: parse_var("RETRY_BASE_DELAY_MS", 1000)?,
            api_host: env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            api_port: env::var("API_PORT").unwrap_or_else(|_| "8190".to_string()),
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.retry_max_attempts,
            base_delay: Duration::from_millis(self.retry_base_delay_ms),
        }
    }

    pub fn print_env_vars() {
        for name in [
            "GEMINI_API_BASE",
            "GEMINI_IMAGE_MODEL",
            "GEMINI_TEXT_MODEL",
            "BATCH_CONCURRENCY",
            "RETRY_MAX_ATTEMPTS",
            "RETRY_BASE_DELAY_MS",
            "API_HOST",
            "API_PORT",
        ] {
            println!("{}: {}", name, env::var(name).unwrap_or_else(|_| "<unset>".to_string()));
        }
        let key = if env::var("GEMINI_API_KEY").is_ok() { "<set>" } else { "<unset>" };
        println!("GEMINI_API_KEY: {}", key);
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} has an invalid value '{}'", name, raw))),
        Err(_) => Ok(default),
    }
}
