use std::fmt;

/// XP awarded for every completed analysis, regardless of score.
pub const ANALYSIS_XP_REWARD: u64 = 250;

/// How the user self-assesses their marketing experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's in-session identity and progression counters.
///
/// Created once when onboarding completes; afterwards only `streak` and `xp`
/// mutate, and only inside the analysis-completed transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub studio_name: String,
    pub specialty: String,
    pub level: SkillLevel,
    pub streak: u32,
    pub xp: u64,
}

impl Profile {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        studio_name: impl Into<String>,
        specialty: impl Into<String>,
        level: SkillLevel,
    ) -> Self {
        Self {
            name: name.into(),
            studio_name: studio_name.into(),
            specialty: specialty.into(),
            level,
            streak: 0,
            xp: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_profile_starts_with_zero_progress() {
        let profile = Profile::new("Luna", "Luna Ink", "Tattoo Studio", SkillLevel::Intermediate);
        assert_eq!(profile.streak, 0);
        assert_eq!(profile.xp, 0);
        assert_eq!(profile.level, SkillLevel::Intermediate);
    }

    #[test]
    fn skill_levels_display_their_names() {
        let names: Vec<_> = SkillLevel::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(names, vec!["Beginner", "Intermediate", "Advanced"]);
    }
}
