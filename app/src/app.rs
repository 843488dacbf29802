use crate::{
    errors::AppResult,
    session::{Session, View},
    views::{self, Flow},
};
use std::sync::Arc;
use studio_mentor::Mentor;

/// The interactive terminal client: renders the active view, reads one
/// action, applies it to the session, repeats.
pub struct App {
    session: Session,
}

impl App {
    #[must_use]
    pub fn new(mentor: Arc<dyn Mentor>) -> Self {
        Self {
            session: Session::new(mentor),
        }
    }

    pub async fn run(&mut self) -> AppResult<()> {
        loop {
            let flow = match self.session.view() {
                View::Onboarding => {
                    views::onboarding::run(&mut self.session)?;
                    Flow::Continue
                }
                View::Dashboard => views::dashboard::run(&mut self.session).await?,
                View::Challenge => views::challenge::run(&mut self.session).await?,
                View::Feedback => views::feedback::run(&mut self.session).await?,
            };
            if flow == Flow::Quit {
                println!("See you tomorrow. Keep the streak alive!");
                return Ok(());
            }
        }
    }
}
