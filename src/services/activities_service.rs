use indexmap::IndexMap;
use thiserror::Error;
use tracing::{info, warn};

use crate::database::{ActivityRegistry, AppendOutcome};
use crate::models::Activity;

/// Reasons a signup is refused. The display text is what clients see in the
/// `detail` field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    NotFound { activity: String },

    #[error("Student is already signed up")]
    AlreadySignedUp { activity: String, email: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupConfirmation {
    pub activity: String,
    pub email: String,
}

impl SignupConfirmation {
    pub fn message(&self) -> String {
        format!("{} signed up for {}", self.email, self.activity)
    }
}

pub fn list_activities(registry: &ActivityRegistry) -> IndexMap<String, Activity> {
    registry.list()
}

pub fn signup_for_activity(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<SignupConfirmation, SignupError> {
    match registry.append_participant(activity_name, email) {
        AppendOutcome::Added => {
            info!(activity = %activity_name, email = %email, "signup accepted");
            Ok(SignupConfirmation {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })
        }
        AppendOutcome::UnknownActivity => {
            warn!(activity = %activity_name, email = %email, "signup for unknown activity");
            Err(SignupError::NotFound {
                activity: activity_name.to_string(),
            })
        }
        AppendOutcome::AlreadyPresent => {
            warn!(activity = %activity_name, email = %email, "duplicate signup");
            Err(SignupError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })
        }
    }
}
