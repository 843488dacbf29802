pub mod api;
mod mentor;

pub use mentor::{GoogleMentor, GoogleMentorOptions, DEFAULT_MODEL_ID};
