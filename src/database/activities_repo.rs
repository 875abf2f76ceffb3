use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Activity;

use super::seed;

/// Activity name -> activity, listed by name.
pub type ActivityMap = BTreeMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up for this activity")]
    DuplicateSignup,
    #[error("Student is not signed up for this activity")]
    NotRegistered,
}

/// In-memory activity directory shared by all request handlers.
///
/// Cloning is cheap and every clone sees the same roster. Each mutation holds
/// the write lock across its check and its update, so a rejected call never
/// leaves a partial change behind and racing signups of one email admit
/// exactly one.
#[derive(Debug, Clone, Default)]
pub struct ActivityDirectory {
    activities: Arc<RwLock<ActivityMap>>,
}

impl ActivityDirectory {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub async fn list_activities(&self) -> ActivityMap {
        self.activities.read().await.clone()
    }

    #[cfg(test)]
    pub(crate) async fn get_activity(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }

    /// Appends `email` to the end of the activity's roster and returns the
    /// spots left afterwards.
    pub async fn add_participant(&self, name: &str, email: &str) -> Result<usize, DirectoryError> {
        let mut activities = self.activities.write().await;
        let activity = activities.get_mut(name).ok_or(DirectoryError::NotFound)?;
        if activity.has_participant(email) {
            return Err(DirectoryError::DuplicateSignup);
        }
        activity.participants.push(email.to_string());
        Ok(activity.spots_left())
    }

    pub async fn remove_participant(&self, name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.activities.write().await;
        let activity = activities.get_mut(name).ok_or(DirectoryError::NotFound)?;
        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DirectoryError::NotRegistered)?;
        activity.participants.remove(position);
        Ok(())
    }
}
