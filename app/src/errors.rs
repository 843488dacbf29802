use crate::session::View;
use thiserror::Error;

/// An illegal view transition or unmet transition precondition.
///
/// These are programming or flow errors, not collaborator failures: the view
/// layer refuses to offer actions that would produce them, and the session
/// rejects them as a second line of defense.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("No profile exists yet")]
    ProfileMissing,
    /// Training cannot start (and nothing can be submitted) while no
    /// challenge is loaded.
    #[error("No active challenge")]
    NoActiveChallenge,
    #[error("Cannot {action} from the {from:?} view")]
    InvalidTransition { from: View, action: &'static str },
    #[error("Caption must not be empty")]
    EmptyCaption,
}

/// Startup configuration problems. These are the only fatal errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY environment variable must be set")]
    MissingApiKey,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
    #[error("Mentor error: {0}")]
    Mentor(#[from] studio_mentor::MentorError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
