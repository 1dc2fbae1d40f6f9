//! "Surprise me" suggestions and prompt refinement through the text model.
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

use super::TextModel;

const BASE_INSTRUCTION: &str = "Generate a short, creative, and visually rich description suitable for an AI image generation prompt. \
Be concise, under 15 words, and cover a wide range of genres like fantasy, sci-fi, historical, and surreal. \
Do not use quotes or introductory phrases. The category is: ";

/// Imagination form fields the text model can fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionField {
    Scenery,
    Attire,
    Pose,
    HairStyle,
    EyeStyle,
}

impl SuggestionField {
    pub const ALL: [SuggestionField; 5] = [
        SuggestionField::Scenery,
        SuggestionField::Attire,
        SuggestionField::Pose,
        SuggestionField::HairStyle,
        SuggestionField::EyeStyle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionField::Scenery => "scenery",
            SuggestionField::Attire => "attire",
            SuggestionField::Pose => "pose",
            SuggestionField::HairStyle => "hairStyle",
            SuggestionField::EyeStyle => "eyeStyle",
        }
    }

    fn instruction(self) -> String {
        let category = match self {
            SuggestionField::Scenery => "a scene or location.",
            SuggestionField::Attire => "an outfit or clothing style.",
            SuggestionField::Pose => "a character's pose or action. Make it under 10 words.",
            SuggestionField::HairStyle => "a unique hair style. Make it under 10 words.",
            SuggestionField::EyeStyle => "a character's eye style or expression. Make it under 10 words.",
        };
        format!("{BASE_INSTRUCTION}{category}")
    }
}

impl fmt::Display for SuggestionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuggestionField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SuggestionField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| AppError::InvalidCategory(s.to_string()))
    }
}

#[derive(Clone)]
pub struct Suggester {
    model: Arc<dyn TextModel>,
}

impl Suggester {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Suggester { model }
    }

    /// One request, no retry.
    pub async fn suggest(&self, field: SuggestionField) -> AppResult<String> {
        tracing::info!(%field, "requesting suggestion");
        let reply = self.model.complete(&field.instruction()).await.map_err(|e| {
            tracing::error!(%field, "suggestion request failed: {}", e);
            AppError::SuggestionFailed(e.to_string())
        })?;
        let suggestion = reply.trim();
        if suggestion.is_empty() {
            tracing::warn!(%field, "empty suggestion");
            return Err(AppError::EmptySuggestion);
        }
        Ok(suggestion.to_string())
    }

    /// Rewrite the raw imagination sentence into one cohesive paragraph.
    /// Any failure or empty answer yields `raw` unchanged.
    pub async fn refine(&self, raw: &str) -> String {
        let instruction = format!(
            "You are an expert prompt engineer. Your task is to refine the following user-provided details into a single, cohesive, \
             and descriptive paragraph for an AI image generator. Combine the elements naturally. Do not add any new concepts. \
             Focus on making the description vivid and coherent. Do not use markdown or special formatting. The user's details are: \"{raw}\""
        );
        match self.model.complete(&instruction).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                tracing::warn!("refinement returned empty, using raw prompt");
                raw.to_string()
            }
            Err(e) => {
                tracing::error!("refinement failed, using raw prompt: {}", e);
                raw.to_string()
            }
        }
    }
}
