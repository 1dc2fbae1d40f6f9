//! Fallback prompts used when the primary prompt comes back as text only.
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::builder::QUALITY_SUFFIX;

static ERA_LIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\d{4}s|\b(viking|roman|samurai|detective|hippie|punk|grunge|pharaoh|gladiator|knight|artist|noble|pirate|explorer|flapper|star)\b",
    )
    .expect("era pattern is valid")
});

/// Template family chosen for a context label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackKind {
    Era,
    Theme,
}

impl fmt::Display for FallbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackKind::Era => f.write_str("era"),
            FallbackKind::Theme => f.write_str("theme"),
        }
    }
}

/// Heuristic only: anything not recognised as an era gets the theme template.
pub fn classify(context: &str) -> FallbackKind {
    if ERA_LIKE.is_match(context) {
        FallbackKind::Era
    } else {
        FallbackKind::Theme
    }
}

pub fn fallback_prompt(context: &str) -> String {
    match classify(context) {
        FallbackKind::Era => format!(
            "Create a photograph of the person in this image as if they were living in the {context} era. \
             The photograph should capture the distinct fashion, hairstyles, and overall atmosphere of that time period in great detail. {QUALITY_SUFFIX}"
        ),
        FallbackKind::Theme => format!(
            "Create a photorealistic image reimagining the person in this image according to this theme: \"{context}\". \
             Ensure the final image respects the described elements. {QUALITY_SUFFIX}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_contexts_are_eras() {
        assert_eq!(classify("Viking Warrior"), FallbackKind::Era);
        assert_eq!(classify("Ancient Egyptian Pharaoh"), FallbackKind::Era);
        assert_eq!(classify("1950s Rock & Roll Star"), FallbackKind::Era);
        assert_eq!(classify("1980s"), FallbackKind::Era);
    }

    #[test]
    fn other_contexts_are_themes() {
        assert_eq!(classify("Golden Hour"), FallbackKind::Theme);
        assert_eq!(classify("Ghibli"), FallbackKind::Theme);
        assert_eq!(classify("Kente cloth, Ghana"), FallbackKind::Theme);
        // whole words only
        assert_eq!(classify("Starship Captain"), FallbackKind::Theme);
    }

    #[test]
    fn templates_carry_context_and_suffix() {
        let era = fallback_prompt("Viking Warrior");
        assert!(era.starts_with("Create a photograph of the person in this image as if they were living in the Viking Warrior era."));
        assert!(era.ends_with(QUALITY_SUFFIX));

        let theme = fallback_prompt("Golden Hour");
        assert!(theme.contains("according to this theme: \"Golden Hour\"."));
        assert!(theme.ends_with(QUALITY_SUFFIX));
    }
}
