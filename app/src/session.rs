use crate::{
    errors::{AppResult, SessionError},
    profile::{Profile, ANALYSIS_XP_REWARD},
};
use std::sync::Arc;
use studio_mentor::{AnalysisResult, Challenge, ImageAttachment, Mentor};
use tracing::{debug, warn};

/// The four screens of the client. `Onboarding` is initial and never
/// re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Onboarding,
    Dashboard,
    Challenge,
    Feedback,
}

/// Root orchestrator. Owns the view state machine and every piece of session
/// data; views never mutate state except through these methods.
///
/// The exclusive borrow on every mutating method is the concurrency model:
/// at most one collaborator call can be in flight, and a stale response can
/// never overwrite newer state.
pub struct Session {
    mentor: Arc<dyn Mentor>,
    view: View,
    profile: Option<Profile>,
    active_challenge: Option<Challenge>,
    last_analysis: Option<AnalysisResult>,
    loading_challenge: bool,
    /// Set when a fetch ran for the current missing-challenge episode, so a
    /// failed fetch is not retried until the user asks or the profile
    /// changes.
    challenge_fetch_attempted: bool,
}

impl Session {
    #[must_use]
    pub fn new(mentor: Arc<dyn Mentor>) -> Self {
        Self {
            mentor,
            view: View::Onboarding,
            profile: None,
            active_challenge: None,
            last_analysis: None,
            loading_challenge: false,
            challenge_fetch_attempted: false,
        }
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub fn active_challenge(&self) -> Option<&Challenge> {
        self.active_challenge.as_ref()
    }

    #[must_use]
    pub fn last_analysis(&self) -> Option<&AnalysisResult> {
        self.last_analysis.as_ref()
    }

    #[must_use]
    pub fn is_loading_challenge(&self) -> bool {
        self.loading_challenge
    }

    /// Store the onboarding profile and enter the dashboard. Irreversible.
    pub fn complete_onboarding(&mut self, profile: Profile) -> Result<(), SessionError> {
        if self.view != View::Onboarding {
            return Err(SessionError::InvalidTransition {
                from: self.view,
                action: "complete onboarding",
            });
        }
        debug!(name = %profile.name, specialty = %profile.specialty, "profile created");
        self.profile = Some(profile);
        self.challenge_fetch_attempted = false;
        self.view = View::Dashboard;
        Ok(())
    }

    /// Enter the training ground for the active challenge.
    pub fn start_challenge(&mut self) -> Result<(), SessionError> {
        if self.view != View::Dashboard {
            return Err(SessionError::InvalidTransition {
                from: self.view,
                action: "start a challenge",
            });
        }
        if self.active_challenge.is_none() {
            return Err(SessionError::NoActiveChallenge);
        }
        self.view = View::Challenge;
        Ok(())
    }

    /// Leave the training ground without submitting. No side effects.
    pub fn abandon_challenge(&mut self) -> Result<(), SessionError> {
        if self.view != View::Challenge {
            return Err(SessionError::InvalidTransition {
                from: self.view,
                action: "abandon a challenge",
            });
        }
        self.view = View::Dashboard;
        Ok(())
    }

    /// Store the analysis, award progression (`xp += 250`, `streak += 1`,
    /// unconditional on score), and enter the feedback view.
    pub fn complete_analysis(&mut self, result: AnalysisResult) -> Result<(), SessionError> {
        if self.view != View::Challenge {
            return Err(SessionError::InvalidTransition {
                from: self.view,
                action: "complete an analysis",
            });
        }
        let profile = self.profile.as_mut().ok_or(SessionError::ProfileMissing)?;
        profile.streak += 1;
        profile.xp += ANALYSIS_XP_REWARD;
        // The profile changed, so the missing-challenge check runs again.
        self.challenge_fetch_attempted = false;
        self.last_analysis = Some(result);
        self.view = View::Feedback;
        Ok(())
    }

    /// Return from feedback to the dashboard, keeping the active challenge.
    pub fn close_feedback(&mut self) -> Result<(), SessionError> {
        if self.view != View::Feedback {
            return Err(SessionError::InvalidTransition {
                from: self.view,
                action: "close feedback",
            });
        }
        self.view = View::Dashboard;
        Ok(())
    }

    /// Return from feedback to the dashboard and regenerate the challenge.
    pub async fn request_new_challenge(&mut self) -> Result<(), SessionError> {
        if self.view != View::Feedback {
            return Err(SessionError::InvalidTransition {
                from: self.view,
                action: "request a new challenge",
            });
        }
        self.view = View::Dashboard;
        self.load_new_challenge().await;
        Ok(())
    }

    /// True when the dashboard needs a challenge fetched: a profile exists,
    /// no challenge is loaded, and no fetch ran for this episode yet.
    #[must_use]
    pub fn needs_challenge(&self) -> bool {
        self.profile.is_some() && self.active_challenge.is_none() && !self.challenge_fetch_attempted
    }

    /// Fetch a challenge if the session needs one. Idempotent; the app loop
    /// calls this after every transition. A failed fetch does not retry
    /// until the user asks or the profile changes.
    pub async fn reconcile(&mut self) {
        if self.needs_challenge() {
            self.load_new_challenge().await;
        }
    }

    /// Regenerate the active challenge, replacing it wholesale. No-op
    /// without a profile. Failures are logged and swallowed; the dashboard
    /// shows no quest card until a user-initiated retry.
    pub async fn load_new_challenge(&mut self) {
        let Some(profile) = &self.profile else {
            return;
        };
        let specialty = profile.specialty.clone();

        self.challenge_fetch_attempted = true;
        self.loading_challenge = true;
        match self.mentor.generate_challenge(&specialty).await {
            Ok(challenge) => {
                debug!(id = %challenge.id, title = %challenge.title, "challenge loaded");
                self.active_challenge = Some(challenge);
                self.challenge_fetch_attempted = false;
            }
            Err(error) => {
                warn!(%error, "failed to load challenge");
            }
        }
        self.loading_challenge = false;
    }

    /// Send the submission for scoring. On success applies the completion
    /// transition; on failure leaves every piece of state untouched and
    /// returns the error so the view can alert and offer a resubmit.
    pub async fn submit_for_analysis(
        &mut self,
        caption: &str,
        image: Option<&ImageAttachment>,
    ) -> AppResult<()> {
        if self.view != View::Challenge {
            return Err(SessionError::InvalidTransition {
                from: self.view,
                action: "submit for analysis",
            }
            .into());
        }
        let challenge = self
            .active_challenge
            .as_ref()
            .ok_or(SessionError::NoActiveChallenge)?;
        if caption.trim().is_empty() {
            return Err(SessionError::EmptyCaption.into());
        }

        let result = self
            .mentor
            .analyze_submission(challenge.platform, caption, image)
            .await?;
        self.complete_analysis(result)?;
        Ok(())
    }
}
