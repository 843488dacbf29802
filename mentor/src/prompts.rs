//! Prompt templates for the two collaborator calls. Kept separate from the
//! provider so tests and alternative mentors can reuse them.

use crate::Platform;

/// Instructions for the challenge generator.
#[must_use]
pub fn challenge_prompt(specialty: &str) -> String {
    format!(
        "Generate a creative social media marketing challenge for a {specialty} artist. \
         Pick a platform (Instagram, TikTok, or GBP). \
         Respond with JSON containing title, description, platform, requirements (list), \
         and category."
    )
}

/// Instructions for the submission analyzer. The image, when present, is
/// sent alongside this text as an inline part.
#[must_use]
pub fn analysis_prompt(platform: Platform, caption: &str) -> String {
    format!(
        "Analyze this {platform} post for a professional studio marketing challenge.\n\
         Caption: \"{caption}\"\n\
         Respond in JSON format with scores out of 100 and brief professional feedback.\n\
         Focus on: Visual quality (if image provided), Copywriting (hook, CTA), \
         Strategy (hashtags, platform fit), and predicted Engagement."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn challenge_prompt_names_the_specialty() {
        let prompt = challenge_prompt("Tattoo Studio");
        assert!(prompt.contains("Tattoo Studio artist"));
        assert!(prompt.contains("Instagram, TikTok, or GBP"));
    }

    #[test]
    fn analysis_prompt_carries_platform_and_caption() {
        let prompt = analysis_prompt(Platform::GoogleBusinessProfile, "Book now!");
        assert!(prompt.contains("Google Business Profile post"));
        assert!(prompt.contains("Caption: \"Book now!\""));
    }
}
