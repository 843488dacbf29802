use crate::profile::{Profile, SkillLevel};

/// Studio specialties offered during onboarding, in display order.
pub const SPECIALTIES: [&str; 5] = [
    "Hair Salon",
    "Tattoo Studio",
    "Nail Art",
    "Permanent Makeup",
    "Barber Shop",
];

/// The three screens of the onboarding wizard. Strictly linear, no back
/// navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    /// Name and studio name.
    Identity,
    /// Studio specialty.
    Specialty,
    /// Self-assessed skill level.
    Level,
}

/// State of the onboarding wizard. Specialty and level carry defaults, so
/// the only gate is a non-empty name on the first step.
#[derive(Debug, Clone)]
pub struct OnboardingForm {
    step: OnboardingStep,
    pub name: String,
    pub studio_name: String,
    pub specialty: String,
    pub level: SkillLevel,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self {
            step: OnboardingStep::Identity,
            name: String::new(),
            studio_name: String::new(),
            specialty: SPECIALTIES[0].to_string(),
            level: SkillLevel::Beginner,
        }
    }
}

impl OnboardingForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    /// Whether the current step is complete enough to advance.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        match self.step {
            OnboardingStep::Identity => !self.name.trim().is_empty(),
            OnboardingStep::Specialty | OnboardingStep::Level => true,
        }
    }

    /// Move to the next step. Returns false when the current step is
    /// incomplete or the wizard is already on the last step.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.step = match self.step {
            OnboardingStep::Identity => OnboardingStep::Specialty,
            OnboardingStep::Specialty => OnboardingStep::Level,
            OnboardingStep::Level => return false,
        };
        true
    }

    /// Produce the completed profile with zeroed progression counters.
    /// `None` until the wizard has reached the last step.
    #[must_use]
    pub fn finish(self) -> Option<Profile> {
        if self.step != OnboardingStep::Level {
            return None;
        }
        Some(Profile::new(
            self.name.trim(),
            self.studio_name.trim(),
            self.specialty,
            self.level,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completing_all_steps_produces_a_zeroed_profile() {
        let mut form = OnboardingForm::new();
        form.name = "Luna".to_string();
        form.studio_name = "Luna Ink".to_string();
        assert!(form.advance());

        form.specialty = "Tattoo Studio".to_string();
        assert!(form.advance());

        form.level = SkillLevel::Advanced;
        let profile = form.finish().unwrap();
        assert_eq!(profile.name, "Luna");
        assert_eq!(profile.specialty, "Tattoo Studio");
        assert_eq!(profile.level, SkillLevel::Advanced);
        assert_eq!(profile.streak, 0);
        assert_eq!(profile.xp, 0);
    }

    #[test]
    fn cannot_advance_past_identity_with_empty_name() {
        let mut form = OnboardingForm::new();
        assert!(!form.can_advance());
        assert!(!form.advance());
        assert_eq!(form.step(), OnboardingStep::Identity);

        form.name = "   ".to_string();
        assert!(!form.advance());
        assert_eq!(form.step(), OnboardingStep::Identity);
    }

    #[test]
    fn finish_before_last_step_yields_nothing() {
        let mut form = OnboardingForm::new();
        form.name = "Alex".to_string();
        assert!(form.clone().finish().is_none());
        form.advance();
        assert!(form.clone().finish().is_none());
        form.advance();
        assert!(form.finish().is_some());
    }

    #[test]
    fn defaults_match_the_first_choices() {
        let form = OnboardingForm::new();
        assert_eq!(form.specialty, "Hair Salon");
        assert_eq!(form.level, SkillLevel::Beginner);
        assert_eq!(form.step(), OnboardingStep::Identity);
    }

    #[test]
    fn name_and_studio_are_trimmed_into_the_profile() {
        let mut form = OnboardingForm::new();
        form.name = "  Alex  ".to_string();
        form.studio_name = " Fade Factory ".to_string();
        form.advance();
        form.advance();
        let profile = form.finish().unwrap();
        assert_eq!(profile.name, "Alex");
        assert_eq!(profile.studio_name, "Fade Factory");
    }
}
