//! Thin HTTP client for the Gemini `generateContent` endpoint.
//!
//! - image edits go to the image model with both IMAGE and TEXT response modalities.
//! - suggestions and refinements go to the text model.
use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::generation::{ImageModel, ModelReply, TextModel};
use crate::image::InlineImage;

use super::wire::{Content, GenerateRequest, GenerateResponse, GenerationConfig, Part};

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    image_model: String,
    text_model: String,
}

impl GeminiClient {
    pub fn new(base_url: String, api_key: String, image_model: String, text_model: String) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        GeminiClient { client: Client::new(), base_url: base, api_key, image_model, text_model }
    }

    pub fn from_config(config: &Config) -> Self {
        GeminiClient::new(
            config.gemini_api_base.clone(),
            config.gemini_api_key.clone(),
            config.image_model.clone(),
            config.text_model.clone(),
        )
    }

    /// POST a request to `models/<model>:generateContent`.
    ///
    /// A non-success status becomes `AppError::Gemini` carrying the status and the
    /// body, which is where the provider reports `"code": 500` / `INTERNAL`.
    async fn generate_content(&self, model: &str, request: &GenerateRequest) -> AppResult<GenerateResponse> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        tracing::info!("Sending request to Gemini model {}", model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if response.status().is_success() {
            response.json().await.map_err(AppError::HttpClient)
        } else {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Unable to read error body".to_string());
            let error_message = format!("Status: {}, Body: {}", status, error_body);
            tracing::error!("Gemini request failed. {}", error_message);
            Err(AppError::Gemini(error_message))
        }
    }
}

#[async_trait]
impl ImageModel for GeminiClient {
    async fn edit_image(&self, source: &InlineImage, prompt: &str) -> AppResult<ModelReply> {
        let request = GenerateRequest {
            contents: vec![Content { parts: vec![Part::image(source), Part::text(prompt)] }],
            generation_config: Some(GenerationConfig { response_modalities: vec!["IMAGE", "TEXT"] }),
        };
        let response = self.generate_content(&self.image_model, &request).await?;
        Ok(match response.image() {
            Some(image) => ModelReply::Image(image.clone()),
            None => {
                let text = response.text();
                tracing::warn!(reply = %text, "model did not return an image");
                ModelReply::Text(text)
            }
        })
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let request = GenerateRequest {
            contents: vec![Content { parts: vec![Part::text(prompt)] }],
            generation_config: None,
        };
        let response = self.generate_content(&self.text_model, &request).await?;
        Ok(response.text())
    }
}
