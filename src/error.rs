//! Common error type and result alias.
use std::fmt;

use thiserror::Error;

use crate::prompt::fallback::FallbackKind;

/// Which prompt a generation attempt was issued with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStage {
    Primary,
    Fallback,
}

impl fmt::Display for PromptStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptStage::Primary => f.write_str("original"),
            PromptStage::Fallback => f.write_str("fallback"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Gemini API error: {0}")]
    Gemini(String),

    #[error("Invalid image data URL format. Expected 'data:image/...;base64,...'")]
    InvalidImageFormat,

    #[error("The AI model failed with both original and fallback prompts ({classification} fallback). Last response: \"{last_text}\"")]
    GenerationBlocked {
        classification: FallbackKind,
        last_text: String,
    },

    #[error("The AI model failed to generate an image with the {stage} prompt. Details: {message}")]
    GenerationFailed { stage: PromptStage, message: String },

    #[error("Missing selection: {0}")]
    MissingSelection(&'static str),

    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Could not find original prompt to regenerate \"{0}\"")]
    MissingPrompt(String),

    #[error("Failed to get a suggestion. Please try again.")]
    SuggestionFailed(String),

    #[error("Received an empty suggestion from the API.")]
    EmptySuggestion,

    #[error("Invalid category for suggestion: {0}")]
    InvalidCategory(String),

    #[error("No job named \"{0}\" in the current session")]
    UnknownJob(String),

    #[error("Job \"{0}\" is still being generated")]
    JobInFlight(String),

    #[error("No source image uploaded")]
    NoSourceImage,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Server-side failures worth another attempt: HTTP 500 or an `INTERNAL` status marker.
    /// Only the provider's status and body are inspected, never the request URL.
    pub fn is_transient(&self) -> bool {
        match self {
            AppError::Gemini(reply) => reply.contains("500") || reply.contains("INTERNAL"),
            AppError::HttpClient(err) => err.status() == Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
            _ => false,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
