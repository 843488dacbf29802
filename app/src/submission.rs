use studio_mentor::{ImageAttachment, Platform};

/// Character budget shown next to the caption. Display only; input is not
/// truncated.
pub const CAPTION_LIMIT: usize = 2200;

/// The user's in-progress submission for the active challenge. Survives a
/// failed analysis so the user can resubmit without retyping.
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    pub caption: String,
    pub image: Option<ImageAttachment>,
}

impl SubmissionForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the submission is complete: a non-empty caption, plus an
    /// image unless the platform accepts text-only posts.
    #[must_use]
    pub fn can_submit(&self, platform: Platform) -> bool {
        if self.caption.trim().is_empty() {
            return false;
        }
        self.image.is_some() || !platform.requires_image()
    }

    /// The caption counter, e.g. `"88/2200"`.
    #[must_use]
    pub fn caption_counter(&self) -> String {
        format!("{}/{CAPTION_LIMIT}", self.caption.chars().count())
    }
}
