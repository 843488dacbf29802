use crate::{AnalysisResult, Challenge, ImageAttachment, MentorResult, Platform};

/// The external generative-AI collaborator, treated as a black box by the
/// application: it writes marketing challenges and scores submissions.
///
/// Both operations are expected to fail (network or parse errors); callers
/// own the recovery behavior and must never let a failure propagate
/// unhandled.
#[async_trait::async_trait]
pub trait Mentor: Send + Sync {
    fn provider(&self) -> &'static str;

    /// Produce a fresh challenge for the given studio specialty. The
    /// returned challenge carries all required fields, including the
    /// caller-synthesized `id` and `image_url`.
    async fn generate_challenge(&self, specialty: &str) -> MentorResult<Challenge>;

    /// Score a caption (and optional image) written for `platform`. The
    /// result always contains all four breakdown categories.
    async fn analyze_submission(
        &self,
        platform: Platform,
        caption: &str,
        image: Option<&ImageAttachment>,
    ) -> MentorResult<AnalysisResult>;
}
