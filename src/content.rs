//! # Generated Content
//!
//! The structured landing-page copy returned by the generation service, plus
//! the addressing scheme used to edit one field of it at a time.
//!
//! ## Wire Format
//!
//! ```json
//! {
//!   "heroTitle": "Get Fit, Stay Busy",
//!   "heroSubtitle": "Fitness for professionals",
//!   "ctaText": "Start Now",
//!   "features": ["Quick workouts", "Smart scheduling"]
//! }
//! ```
//!
//! The shape is trusted as-is: every field must be present, extra fields are
//! ignored, and no defaults are filled in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Landing-page copy: hero, feature list and call-to-action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub cta_text: String,
    pub features: Vec<String>,
}

/// One editable field of [`GeneratedContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentField {
    HeroTitle,
    HeroSubtitle,
    /// A feature entry, addressed by its position in the list.
    Feature(usize),
    CtaText,
}

impl fmt::Display for ContentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeroTitle => write!(f, "hero title"),
            Self::HeroSubtitle => write!(f, "hero subtitle"),
            Self::Feature(index) => write!(f, "feature #{}", index + 1),
            Self::CtaText => write!(f, "call to action"),
        }
    }
}

impl GeneratedContent {
    /// All editable fields in display order: hero, features, then CTA.
    pub fn fields(&self) -> Vec<ContentField> {
        let mut fields = vec![ContentField::HeroTitle, ContentField::HeroSubtitle];
        fields.extend((0..self.features.len()).map(ContentField::Feature));
        fields.push(ContentField::CtaText);
        fields
    }

    /// Current value of a field, or `None` for an out-of-range feature index.
    pub fn get(&self, field: ContentField) -> Option<&str> {
        match field {
            ContentField::HeroTitle => Some(&self.hero_title),
            ContentField::HeroSubtitle => Some(&self.hero_subtitle),
            ContentField::CtaText => Some(&self.cta_text),
            ContentField::Feature(index) => self.features.get(index).map(String::as_str),
        }
    }

    /// Overwrite a single field with a committed value.
    ///
    /// Only the addressed field changes; feature edits keep the order and
    /// length of the list. Returns `false` (and changes nothing) when the
    /// feature index is out of range.
    pub fn apply_edit(&mut self, field: ContentField, value: String) -> bool {
        let slot = match field {
            ContentField::HeroTitle => &mut self.hero_title,
            ContentField::HeroSubtitle => &mut self.hero_subtitle,
            ContentField::CtaText => &mut self.cta_text,
            ContentField::Feature(index) => match self.features.get_mut(index) {
                Some(slot) => slot,
                None => return false,
            },
        };
        *slot = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GeneratedContent {
        GeneratedContent {
            hero_title: "Get Fit, Stay Busy".to_string(),
            hero_subtitle: "Fitness for professionals".to_string(),
            cta_text: "Start Now".to_string(),
            features: vec!["Quick workouts".to_string(), "Smart scheduling".to_string()],
        }
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "heroTitle": "Get Fit, Stay Busy",
            "heroSubtitle": "Fitness for professionals",
            "ctaText": "Start Now",
            "features": ["Quick workouts", "Smart scheduling"]
        }"#;
        let content: GeneratedContent = serde_json::from_str(json).expect("deserialize");
        assert_eq!(content, sample());
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"{"heroTitle":"a","heroSubtitle":"b","ctaText":"c","features":[],"theme":"dark"}"#;
        let content: GeneratedContent = serde_json::from_str(json).expect("deserialize");
        assert_eq!(content.hero_title, "a");
        assert!(content.features.is_empty());
    }

    #[test]
    fn test_deserialize_missing_field_fails() {
        let json = r#"{"heroTitle":"a","heroSubtitle":"b","features":[]}"#;
        let result: Result<GeneratedContent, _> = serde_json::from_str(json);
        assert!(result.is_err(), "ctaText is required");
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let value = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(value["heroTitle"], "Get Fit, Stay Busy");
        assert_eq!(value["ctaText"], "Start Now");
        assert_eq!(value["features"][1], "Smart scheduling");
    }

    #[test]
    fn test_fields_display_order() {
        assert_eq!(
            sample().fields(),
            vec![
                ContentField::HeroTitle,
                ContentField::HeroSubtitle,
                ContentField::Feature(0),
                ContentField::Feature(1),
                ContentField::CtaText,
            ]
        );
    }

    #[test]
    fn test_apply_edit_feature_touches_only_that_index() {
        let mut content = sample();
        assert!(content.apply_edit(ContentField::Feature(1), "Adaptive scheduling".to_string()));

        assert_eq!(content.features, vec!["Quick workouts", "Adaptive scheduling"]);
        assert_eq!(content.hero_title, "Get Fit, Stay Busy");
        assert_eq!(content.hero_subtitle, "Fitness for professionals");
        assert_eq!(content.cta_text, "Start Now");
    }

    #[test]
    fn test_apply_edit_scalar_fields() {
        let mut content = sample();
        content.apply_edit(ContentField::HeroTitle, "New title".to_string());
        content.apply_edit(ContentField::CtaText, "Join".to_string());

        assert_eq!(content.get(ContentField::HeroTitle), Some("New title"));
        assert_eq!(content.get(ContentField::CtaText), Some("Join"));
        assert_eq!(content.features.len(), 2);
    }

    #[test]
    fn test_apply_edit_out_of_range_is_ignored() {
        let mut content = sample();
        assert!(!content.apply_edit(ContentField::Feature(5), "nope".to_string()));
        assert_eq!(content, sample());
        assert_eq!(content.get(ContentField::Feature(5)), None);
    }

    #[test]
    fn test_field_display() {
        assert_eq!(ContentField::Feature(0).to_string(), "feature #1");
        assert_eq!(ContentField::CtaText.to_string(), "call to action");
    }
}
