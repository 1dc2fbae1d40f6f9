//! Image generation for one job: retrying transport, then a single fallback
//! prompt when the model answers with text instead of an image.
use std::sync::Arc;

use crate::error::{AppError, AppResult, PromptStage};
use crate::image::InlineImage;
use crate::prompt::fallback::{classify, fallback_prompt};

use super::retry::{retry_with_backoff, RetryPolicy};
use super::{ImageModel, ModelReply};

const NO_TEXT: &str = "No text response received.";

#[derive(Clone)]
pub struct Generator {
    model: Arc<dyn ImageModel>,
    retry: RetryPolicy,
}

impl Generator {
    pub fn new(model: Arc<dyn ImageModel>, retry: RetryPolicy) -> Self {
        Generator { model, retry }
    }

    /// Generate a variant of `source` (a data URL) and return the result as a data URL.
    ///
    /// `context` is the short label (era, theme) the fallback prompt is built from.
    pub async fn generate(&self, source: &str, prompt: &str, context: &str) -> AppResult<String> {
        let image = InlineImage::from_data_url(source)?;

        tracing::info!(context, "generating with original prompt");
        tracing::debug!(prompt, "original prompt");
        match self.attempt(&image, prompt).await {
            Ok(ModelReply::Image(out)) => return Ok(out.to_data_url()),
            Ok(ModelReply::Text(text)) => {
                tracing::warn!(context, reply = %text, "original prompt likely blocked, trying fallback prompt");
            }
            Err(err) => {
                return Err(AppError::GenerationFailed { stage: PromptStage::Primary, message: err.to_string() });
            }
        }

        let classification = classify(context);
        let fallback = fallback_prompt(context);
        tracing::info!(context, %classification, "generating with fallback prompt");
        match self.attempt(&image, &fallback).await {
            Ok(ModelReply::Image(out)) => Ok(out.to_data_url()),
            Ok(ModelReply::Text(text)) => {
                let last_text = if text.trim().is_empty() { NO_TEXT.to_string() } else { text };
                tracing::error!(context, reply = %last_text, "fallback prompt also blocked");
                Err(AppError::GenerationBlocked { classification, last_text })
            }
            Err(err) => {
                tracing::error!(context, "fallback prompt failed: {}", err);
                Err(AppError::GenerationFailed { stage: PromptStage::Fallback, message: err.to_string() })
            }
        }
    }

    async fn attempt(&self, image: &InlineImage, prompt: &str) -> AppResult<ModelReply> {
        let model = &self.model;
        retry_with_backoff(&self.retry, AppError::is_transient, move || model.edit_image(image, prompt)).await
    }
}
