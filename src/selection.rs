//! What the user picked, one variant per generation mode.
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::{AppError, AppResult};

pub const MAX_QUICK_ERAS: usize = 6;
pub const IMAGINATION_KEY: &str = "Your Imagination";
const IMAGINATION_CONTEXT_DEFAULT: &str = "a custom scene";
const CONTEXT_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Selection {
    Quick(QuickTrip),
    Cultural(CulturalLook),
    Imagination(ImaginationInputs),
    Filter(FilterChoice),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickTrip {
    #[serde(default)]
    pub eras: Vec<String>,
}

impl QuickTrip {
    /// Remove the era if present, otherwise add it while under the limit.
    /// Returns whether the era is selected afterwards.
    pub fn toggle_era(&mut self, era: &str) -> bool {
        if let Some(pos) = self.eras.iter().position(|e| e == era) {
            self.eras.remove(pos);
            false
        } else if self.eras.len() < MAX_QUICK_ERAS {
            self.eras.push(era.to_string());
            true
        } else {
            false
        }
    }

    pub fn surprise_me(&mut self) {
        self.eras = catalog::random_eras(MAX_QUICK_ERAS);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CulturalLook {
    pub country: Option<String>,
    pub region: Option<String>,
}

impl CulturalLook {
    /// A new country invalidates whatever region was picked for the old one.
    pub fn select_country(&mut self, country: Option<String>) {
        self.country = country.filter(|c| !c.is_empty());
        self.region = None;
    }

    pub fn select_region(&mut self, region: Option<String>) {
        self.region = region.filter(|r| !r.is_empty());
    }

    /// Whether the region is one of the built-in looks for the chosen country.
    pub fn is_catalogued(&self) -> bool {
        match (self.country.as_deref(), self.region.as_deref()) {
            (Some(country), Some(region)) => catalog::is_cultural_look(country, region),
            _ => false,
        }
    }

    pub fn theme_key(&self) -> Option<String> {
        match (self.country.as_deref(), self.region.as_deref()) {
            (Some(country), Some(region)) => Some(format!("{region}, {country}")),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImaginationInputs {
    pub scenery: String,
    pub attire: String,
    pub pose: String,
    pub hair_style: String,
    pub eye_style: String,
    pub figure_size: String,
    pub style: String,
    pub aspect_ratio: String,
    pub image_framing: String,
}

impl Default for ImaginationInputs {
    fn default() -> Self {
        ImaginationInputs {
            scenery: String::new(),
            attire: String::new(),
            pose: String::new(),
            hair_style: String::new(),
            eye_style: String::new(),
            figure_size: catalog::FIGURE_SIZES[0].to_string(),
            style: String::new(),
            aspect_ratio: catalog::ASPECT_RATIOS[0].to_string(),
            image_framing: catalog::IMAGE_FRAMINGS[0].to_string(),
        }
    }
}

impl ImaginationInputs {
    /// Add or remove one style in the comma separated `style` field.
    pub fn toggle_style(&mut self, style: &str) {
        let mut styles: Vec<&str> = Vec::new();
        for s in self.style.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !styles.contains(&s) {
                styles.push(s);
            }
        }
        if let Some(pos) = styles.iter().position(|s| *s == style) {
            styles.remove(pos);
        } else {
            styles.push(style);
        }
        self.style = styles.join(", ");
    }

    /// Short label for fallback classification: style, scenery or attire, whichever is set first.
    pub fn context(&self) -> String {
        let label = [&self.style, &self.scenery, &self.attire]
            .into_iter()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .unwrap_or(IMAGINATION_CONTEXT_DEFAULT);
        label.chars().take(CONTEXT_MAX_CHARS).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChoice {
    pub name: Option<String>,
}

impl Selection {
    pub fn mode(&self) -> &'static str {
        match self {
            Selection::Quick(_) => "quick",
            Selection::Cultural(_) => "cultural",
            Selection::Imagination(_) => "imagination",
            Selection::Filter(_) => "filter",
        }
    }
}

/// Eras a quick trip would generate, or `MissingSelection` when there is nothing to do.
pub fn quick_eras(trip: &QuickTrip) -> AppResult<Vec<String>> {
    let mut eras: Vec<String> = Vec::new();
    for era in trip.eras.iter().map(|e| e.trim()).filter(|e| !e.is_empty()) {
        if !eras.iter().any(|e| e == era) {
            eras.push(era.to_string());
        }
    }
    if eras.is_empty() {
        return Err(AppError::MissingSelection("era"));
    }
    if eras.len() > MAX_QUICK_ERAS {
        eras.truncate(MAX_QUICK_ERAS);
    }
    Ok(eras)
}
