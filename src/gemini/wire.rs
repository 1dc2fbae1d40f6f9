//! Request and response bodies for `models/{model}:generateContent`.
use serde::{Deserialize, Serialize};

use crate::image::InlineImage;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "inline_data")]
    pub inline_data: Option<InlineImage>,
}

impl Part {
    pub fn text(text: &str) -> Self {
        Part { text: Some(text.to_string()), inline_data: None }
    }

    pub fn image(image: &InlineImage) -> Self {
        Part { text: None, inline_data: Some(image.clone()) }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<&'static str>,
}

#[derive(Debug, Deserialize, Default)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

impl GenerateResponse {
    fn parts(&self) -> &[Part] {
        self.candidates.first().map(|c| c.content.parts.as_slice()).unwrap_or_default()
    }

    /// First inline image of the first candidate.
    pub fn image(&self) -> Option<&InlineImage> {
        self.parts().iter().find_map(|p| p.inline_data.as_ref().filter(|img| !img.data.is_empty()))
    }

    /// Text parts of the first candidate, concatenated.
    pub fn text(&self) -> String {
        self.parts().iter().filter_map(|p| p.text.as_deref()).collect::<Vec<_>>().join("")
    }
}
