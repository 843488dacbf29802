use thiserror::Error;

#[derive(Error, Debug)]
pub enum MentorError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the provider failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returns a non-OK status code
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The provider declined to process the prompt (e.g. a safety block).
    #[error("Refusal: {0}")]
    Refusal(String),
    /// The response from the provider broke the collaborator contract
    /// (e.g. no candidate, or JSON that does not match the advertised
    /// schema).
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
}

pub type MentorResult<T> = Result<T, MentorError>;
