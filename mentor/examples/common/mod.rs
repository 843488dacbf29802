use studio_mentor::{
    google::{GoogleMentor, GoogleMentorOptions, DEFAULT_MODEL_ID},
    Mentor,
};

pub fn get_mentor() -> Box<dyn Mentor> {
    Box::new(GoogleMentor::new(
        std::env::var("STUDIO_SOCIAL_MODEL").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
        GoogleMentorOptions {
            api_key: std::env::var("GEMINI_API_KEY")
                .expect("GEMINI_API_KEY environment variable must be set"),
            ..Default::default()
        },
    ))
}
