//! Embedded image references (`data:image/png;base64,...`).
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

static DATA_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:(image/\w+);base64,(.*)$").expect("data URL pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

impl InlineImage {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        InlineImage { mime_type: mime_type.into(), data: data.into() }
    }

    /// Split a data URL into media type and base64 payload.
    pub fn from_data_url(url: &str) -> AppResult<Self> {
        let caps = DATA_URL.captures(url).ok_or(AppError::InvalidImageFormat)?;
        Ok(InlineImage::new(&caps[1], &caps[2]))
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}
