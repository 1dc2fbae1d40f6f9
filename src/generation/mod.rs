//! Calls into the generative models: image generation with retry and fallback,
//! plus the short-text suggestion and refinement helpers.
//!
//! The orchestration code only sees the two capability traits below; the
//! Gemini REST client is one implementation of both.
use async_trait::async_trait;

use crate::error::AppResult;
use crate::image::InlineImage;

pub mod generator;
pub mod retry;
pub mod suggest;

/// What an image call produced. `Text` means the model declined to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelReply {
    Image(InlineImage),
    Text(String),
}

#[async_trait]
pub trait ImageModel: Send + Sync {
    async fn edit_image(&self, source: &InlineImage, prompt: &str) -> AppResult<ModelReply>;
}

#[async_trait]
pub trait TextModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}
