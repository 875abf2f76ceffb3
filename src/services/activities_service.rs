use tracing::{info, warn};

use crate::database::{ActivityDirectory, ActivityMap, DirectoryError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterCommandError {
    #[error("Email is required")]
    MissingEmail,
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

pub async fn list_activities(directory: &ActivityDirectory) -> ActivityMap {
    directory.list_activities().await
}

pub async fn signup(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, RosterCommandError> {
    require_email(email)?;

    match directory.add_participant(activity_name, email).await {
        Ok(spots_left) => {
            info!(activity = %activity_name, email = %email, spots_left, "student signed up");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            Err(e.into())
        }
    }
}

pub async fn unregister(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, RosterCommandError> {
    require_email(email)?;

    if let Err(e) = directory.remove_participant(activity_name, email).await {
        warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
        return Err(e.into());
    }

    info!(activity = %activity_name, email = %email, "student unregistered");
    Ok(format!("Unregistered {} from {}", email, activity_name))
}

// Any non-empty value is a valid roster key, stored exactly as given.
fn require_email(email: &str) -> Result<(), RosterCommandError> {
    if email.is_empty() {
        return Err(RosterCommandError::MissingEmail);
    }
    Ok(())
}
