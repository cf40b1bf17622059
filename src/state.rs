use chrono::NaiveDate;
use thiserror::Error;

use crate::admin::verify_password;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    Challenge { participant: String },
    AdminLogin,
    AdminDashboard,
}

impl View {
    pub fn title(&self) -> &str {
        match self {
            View::Home => "Home",
            View::Challenge { participant } => participant,
            View::AdminLogin => "Organizer login",
            View::AdminDashboard => "Organizer dashboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("'{0}' is not on the roster")]
    UnknownParticipant(String),
    #[error("password does not match today's combination")]
    WrongPassword,
    #[error("log in from the organizer login screen first")]
    NotAtLogin,
}

/// Which screen is showing, plus a one-shot notice for the next render.
///
/// Values are never mutated in place: every transition returns a new state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    view: View,
    notice: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: View::Home,
            notice: None,
        }
    }
}

impl AppState {
    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn participant(&self) -> Option<&str> {
        match &self.view {
            View::Challenge { participant } => Some(participant),
            _ => None,
        }
    }

    pub fn open_challenge(&self, participant: &str, roster: &[String]) -> Result<Self, TransitionError> {
        if !roster.iter().any(|m| m == participant) {
            return Err(TransitionError::UnknownParticipant(participant.to_string()));
        }
        Ok(Self {
            view: View::Challenge {
                participant: participant.to_string(),
            },
            notice: None,
        })
    }

    pub fn go_home(&self) -> Self {
        Self::default()
    }

    pub fn request_admin(&self) -> Self {
        Self {
            view: View::AdminLogin,
            notice: None,
        }
    }

    pub fn admin_login(
        &self,
        password: &str,
        today: NaiveDate,
        suffix: &str,
    ) -> Result<Self, TransitionError> {
        if self.view != View::AdminLogin {
            return Err(TransitionError::NotAtLogin);
        }
        if !verify_password(password, today, suffix) {
            return Err(TransitionError::WrongPassword);
        }
        Ok(Self {
            view: View::AdminDashboard,
            notice: None,
        })
    }

    pub fn with_notice(&self, notice: impl Into<String>) -> Self {
        Self {
            view: self.view.clone(),
            notice: Some(notice.into()),
        }
    }

    pub fn without_notice(&self) -> Self {
        Self {
            view: self.view.clone(),
            notice: None,
        }
    }
}
