//! Prompt text for each selection mode.
//!
//! Every template ends with the same quality wording; the era, imagination and
//! filter variants extend its last sentence with a mode-specific clause.
use crate::error::{AppError, AppResult};
use crate::generation::suggest::Suggester;
use crate::selection::ImaginationInputs;

const COMPOSITION: &str =
    "The final output should be an award-winning photograph of masterpiece quality, with cinematic composition and lighting";

/// Appended to cultural and fallback prompts verbatim.
pub const QUALITY_SUFFIX: &str = "The final output should be an award-winning photograph of masterpiece quality, with cinematic composition and lighting. The image must be hyper-detailed, photorealistic, and in very high quality 8k resolution.";

const FIDELITY: &str = "The image must be hyper-detailed, photorealistic, and in very high quality 8k resolution";

pub fn era_prompt(era: &str) -> String {
    format!(
        "Reimagine the person in this photo in the style of \"{era}\". This includes appropriate clothing, hairstyle, accessories, background, photo/art style, and the overall aesthetic of that era. \
         {COMPOSITION}. {FIDELITY}, showing the person clearly, consistent with the requested style."
    )
}

pub fn cultural_prompt(country: Option<&str>, region: Option<&str>) -> AppResult<String> {
    let country = non_blank(country).ok_or(AppError::MissingSelection("country"))?;
    let region = non_blank(region).ok_or(AppError::MissingSelection("region"))?;
    Ok(format!(
        "Reimagine the person in this photo wearing traditional {region} attire from {country}. The image should be a respectful and authentic representation. \
         Place them in a setting that is culturally relevant, like a traditional marketplace, a scenic landscape typical of the region, or in front of classic local architecture. \
         {QUALITY_SUFFIX}"
    ))
}

pub fn filter_prompt(filter: Option<&str>) -> AppResult<String> {
    let filter = non_blank(filter).ok_or(AppError::MissingSelection("filter"))?;
    Ok(format!(
        "Reimagine the person in this photo with a \"{filter}\" photographic filter effect. The overall composition and the person should remain the same, \
         but the image should be transformed to have the distinct visual characteristics of that style, including color grading, grain, and lighting. \
         {COMPOSITION}, perfectly capturing the filter's essence. The image must be in very high quality 8k resolution."
    ))
}

/// The unrefined descriptive sentence assembled from the imagination form.
///
/// Fields are emitted in a fixed order and skipped when blank; a figure size of
/// `Unspecified` counts as blank.
pub fn raw_imagination_prompt(inputs: &ImaginationInputs) -> AppResult<String> {
    if inputs.scenery.trim().is_empty() {
        return Err(AppError::MissingRequiredField("scenery"));
    }
    if inputs.attire.trim().is_empty() {
        return Err(AppError::MissingRequiredField("attire"));
    }

    let figure = match inputs.figure_size.trim() {
        "Unspecified" => "",
        other => other,
    };
    let parts = [
        ("The image framing is a ", inputs.image_framing.as_str()),
        ("The aspect ratio is ", inputs.aspect_ratio.as_str()),
        ("The setting is: ", inputs.scenery.as_str()),
        ("They are wearing: ", inputs.attire.as_str()),
        ("Their pose is: ", inputs.pose.as_str()),
        ("Their hair style is: ", inputs.hair_style.as_str()),
        ("Their eye style is: ", inputs.eye_style.as_str()),
        ("Their body type is described as: ", figure),
        ("The artistic style is: ", inputs.style.as_str()),
    ];
    let sentences: Vec<String> = parts
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(lead, value)| format!("{lead}{}.", value.trim()))
        .collect();

    Ok(format!("Reimagine the person in this photo. {}", sentences.join(" ")))
}

/// Validate the form, have the text model polish it, and append the quality wording.
/// Refinement problems degrade to the raw sentence and never fail the build.
pub async fn imagination_prompt(inputs: &ImaginationInputs, suggester: &Suggester) -> AppResult<String> {
    let raw = raw_imagination_prompt(inputs)?;
    let refined = suggester.refine(&raw).await;
    Ok(imagination_with_suffix(&refined))
}

fn imagination_with_suffix(body: &str) -> String {
    format!("{body} {COMPOSITION}. {FIDELITY}, seamlessly integrating them into the described scene.")
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(scenery: &str, attire: &str) -> ImaginationInputs {
        ImaginationInputs {
            scenery: scenery.into(),
            attire: attire.into(),
            ..ImaginationInputs::default()
        }
    }

    #[test]
    fn era_prompt_names_the_era() {
        let p = era_prompt("Viking Warrior");
        assert!(p.starts_with("Reimagine the person in this photo in the style of \"Viking Warrior\"."));
        assert!(p.ends_with("8k resolution, showing the person clearly, consistent with the requested style."));
    }

    #[test]
    fn cultural_prompt_requires_both_parts() {
        assert!(matches!(cultural_prompt(None, Some("Kente cloth")), Err(AppError::MissingSelection("country"))));
        assert!(matches!(cultural_prompt(Some("Ghana"), None), Err(AppError::MissingSelection("region"))));
        assert!(matches!(cultural_prompt(Some("Ghana"), Some("  ")), Err(AppError::MissingSelection("region"))));

        let p = cultural_prompt(Some("Ghana"), Some("Kente cloth")).unwrap();
        assert!(p.starts_with("Reimagine the person in this photo wearing traditional Kente cloth attire from Ghana."));
        assert!(p.ends_with(QUALITY_SUFFIX));
    }

    #[test]
    fn filter_prompt_requires_a_filter() {
        assert!(matches!(filter_prompt(None), Err(AppError::MissingSelection("filter"))));
        let p = filter_prompt(Some("Golden Hour")).unwrap();
        assert!(p.contains("with a \"Golden Hour\" photographic filter effect"));
    }

    #[test]
    fn imagination_requires_scenery_and_attire() {
        assert!(matches!(
            raw_imagination_prompt(&inputs("  ", "armor")),
            Err(AppError::MissingRequiredField("scenery"))
        ));
        assert!(matches!(
            raw_imagination_prompt(&inputs("a neon city", "")),
            Err(AppError::MissingRequiredField("attire"))
        ));
    }

    #[test]
    fn raw_sentence_keeps_field_order_and_skips_blanks() {
        let mut form = inputs("a neon city", "chrome armor");
        form.hair_style = "silver braids".into();
        form.style = "Cyberpunk".into();
        let raw = raw_imagination_prompt(&form).unwrap();
        assert_eq!(
            raw,
            "Reimagine the person in this photo. The image framing is a Full Body Shot. The aspect ratio is Portrait (3:4). \
             The setting is: a neon city. They are wearing: chrome armor. Their hair style is: silver braids. \
             The artistic style is: Cyberpunk."
        );
    }

    #[test]
    fn specified_figure_size_is_included() {
        let mut form = inputs("a beach", "linen");
        form.figure_size = "Athletic".into();
        let raw = raw_imagination_prompt(&form).unwrap();
        assert!(raw.contains("Their body type is described as: Athletic."));
    }
}
