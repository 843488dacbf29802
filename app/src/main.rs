use dotenvy::dotenv;
use std::sync::Arc;
use studio_social::{App, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    // The views own stdout, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let mentor = Arc::new(config.mentor());

    let mut app = App::new(mentor);
    app.run().await?;

    Ok(())
}
