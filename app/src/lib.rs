mod app;
mod config;
mod errors;
mod onboarding;
mod profile;
mod session;
mod submission;

pub mod views;

pub use app::App;
pub use config::Config;
pub use errors::{AppError, AppResult, ConfigError, SessionError};
pub use onboarding::{OnboardingForm, OnboardingStep, SPECIALTIES};
pub use profile::{Profile, SkillLevel, ANALYSIS_XP_REWARD};
pub use session::{Session, View};
pub use submission::{SubmissionForm, CAPTION_LIMIT};
