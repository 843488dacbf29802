use crate::{media_utils, MentorError, MentorResult};
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The social platform a challenge targets.
///
/// Serialized with the display names the generator emits ("Google Business
/// Profile", not an enum code). The generator prompt abbreviates Google
/// Business Profile as "GBP", so that spelling is accepted on input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Platform {
    Instagram,
    TikTok,
    Facebook,
    #[serde(rename = "Google Business Profile", alias = "GBP")]
    GoogleBusinessProfile,
    #[serde(rename = "WhatsApp Business")]
    WhatsAppBusiness,
}

impl Platform {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::TikTok => "TikTok",
            Self::Facebook => "Facebook",
            Self::GoogleBusinessProfile => "Google Business Profile",
            Self::WhatsAppBusiness => "WhatsApp Business",
        }
    }

    /// Whether a submission for this platform must carry an image.
    /// Google Business Profile posts may be text-only; every other platform
    /// is visual-first.
    #[must_use]
    pub fn requires_image(self) -> bool {
        !matches!(self, Self::GoogleBusinessProfile)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A marketing challenge presented to the user.
///
/// `id` and `image_url` are synthesized by the caller; the generator is not
/// responsible for asset hosting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub platform: Platform,
    /// Ordered list of things the submission must include.
    pub requirements: Vec<String>,
    pub image_url: String,
    pub category: String,
}

/// The generator's raw structured output: a [`Challenge`] minus the locally
/// synthesized `id` and `image_url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDraft {
    pub title: String,
    pub description: String,
    pub platform: Platform,
    pub requirements: Vec<String>,
    pub category: String,
}

impl ChallengeDraft {
    /// Attach the caller-synthesized identifier and illustration reference.
    #[must_use]
    pub fn into_challenge(self, id: impl Into<String>, image_url: impl Into<String>) -> Challenge {
        Challenge {
            id: id.into(),
            title: self.title,
            description: self.description,
            platform: self.platform,
            requirements: self.requirements,
            image_url: image_url.into(),
            category: self.category,
        }
    }
}

/// Score and feedback for one category of the breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryScore {
    /// 0–100. Not range-validated here; an out-of-range value is a
    /// collaborator bug, not user input.
    pub score: u8,
    pub feedback: String,
}

/// Per-category breakdown of a submission analysis. The four categories are
/// fixed by the analyzer contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub visuals: CategoryScore,
    pub copywriting: CategoryScore,
    pub strategy: CategoryScore,
    pub engagement: CategoryScore,
}

impl ScoreBreakdown {
    /// The categories in display order, with their labels.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &CategoryScore); 4] {
        [
            ("Visuals", &self.visuals),
            ("Copywriting", &self.copywriting),
            ("Strategy", &self.strategy),
            ("Engagement", &self.engagement),
        ]
    }
}

/// The scored feedback produced for a user's submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 0–100.
    pub overall_score: u8,
    /// Short headline such as "Strong Booking Potential".
    pub potential_status: String,
    pub breakdown: ScoreBreakdown,
}

/// An image attached to a submission, carried as base64 for inline upload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageAttachment {
    /// The IANA MIME type of the image. E.g. "image/jpeg", "image/png".
    pub mime_type: String,
    /// The base64-encoded image data.
    pub data: String,
}

impl ImageAttachment {
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Build an attachment from raw file bytes, sniffing the MIME type from
    /// the magic bytes and base64-encoding the payload.
    pub fn from_bytes(bytes: &[u8]) -> MentorResult<Self> {
        let mime_type = media_utils::detect_image_mime(bytes).ok_or_else(|| {
            MentorError::InvalidInput(
                "unrecognized image format (expected JPEG, PNG, or WebP)".to_string(),
            )
        })?;
        Ok(Self {
            mime_type: mime_type.to_string(),
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_round_trips_display_names() {
        for platform in [
            Platform::Instagram,
            Platform::TikTok,
            Platform::Facebook,
            Platform::GoogleBusinessProfile,
            Platform::WhatsAppBusiness,
        ] {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{platform}\""));
            let parsed: Platform = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, platform);
        }
    }

    #[test]
    fn platform_accepts_generator_abbreviation() {
        let parsed: Platform = serde_json::from_str("\"GBP\"").unwrap();
        assert_eq!(parsed, Platform::GoogleBusinessProfile);
    }

    #[test]
    fn only_google_business_profile_is_text_only() {
        assert!(!Platform::GoogleBusinessProfile.requires_image());
        assert!(Platform::Instagram.requires_image());
        assert!(Platform::TikTok.requires_image());
        assert!(Platform::Facebook.requires_image());
        assert!(Platform::WhatsAppBusiness.requires_image());
    }

    #[test]
    fn draft_into_challenge_keeps_generator_fields() {
        let draft = ChallengeDraft {
            title: "Ink Story".to_string(),
            description: "Show a healed piece.".to_string(),
            platform: Platform::Instagram,
            requirements: vec!["Use macro lens".to_string()],
            category: "Visual".to_string(),
        };
        let challenge = draft.into_challenge("abc123xyz", "https://picsum.photos/seed/1/800/600");
        assert_eq!(challenge.id, "abc123xyz");
        assert_eq!(challenge.title, "Ink Story");
        assert_eq!(challenge.platform, Platform::Instagram);
        assert_eq!(challenge.requirements, vec!["Use macro lens".to_string()]);
        assert_eq!(challenge.image_url, "https://picsum.photos/seed/1/800/600");
    }

    #[test]
    fn analysis_result_parses_contract_json() {
        let json = r#"{
            "overallScore": 82,
            "potentialStatus": "Strong Booking Potential",
            "breakdown": {
                "visuals": { "score": 85, "feedback": "Great lighting." },
                "copywriting": { "score": 78, "feedback": "Hook is buried." },
                "strategy": { "score": 80, "feedback": "Hashtags fit." },
                "engagement": { "score": 84, "feedback": "Clear CTA." }
            }
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.overall_score, 82);
        assert_eq!(result.breakdown.visuals.score, 85);
        let labels: Vec<_> = result
            .breakdown
            .entries()
            .iter()
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(
            labels,
            vec!["Visuals", "Copywriting", "Strategy", "Engagement"]
        );
    }

    #[test]
    fn attachment_from_bytes_sniffs_jpeg() {
        let bytes = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        let attachment = ImageAttachment::from_bytes(&bytes).unwrap();
        assert_eq!(attachment.mime_type, "image/jpeg");
        assert_eq!(
            attachment.data,
            base64::engine::general_purpose::STANDARD.encode(bytes)
        );
    }

    #[test]
    fn attachment_from_bytes_rejects_unknown_formats() {
        let err = ImageAttachment::from_bytes(b"plain text").unwrap_err();
        assert!(matches!(err, MentorError::InvalidInput(_)));
    }
}
