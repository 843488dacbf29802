mod client_utils;
mod errors;
mod id_utils;
mod media_utils;
mod mentor;
mod telemetry;
mod types;

pub mod google;
pub mod prompts;
pub mod schema;

pub use errors::*;
pub use mentor::Mentor;
pub use types::*;
