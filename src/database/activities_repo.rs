//! In-memory activity registry.
//!
//! The registry is the only owner of activity state. Handlers reach it through
//! an `Arc` in the router state; there is no module-level global.

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::database::seed;
use crate::models::Activity;

/// Result of [`ActivityRegistry::append_participant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Added,
    UnknownActivity,
    AlreadyPresent,
}

#[derive(Debug, Default)]
pub struct ActivityRegistry {
    activities: RwLock<IndexMap<String, Activity>>,
}

impl ActivityRegistry {
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Registry loaded with the fixed school activity set.
    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub fn len(&self) -> usize {
        self.activities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.read().is_empty()
    }

    /// Snapshot of every activity, in insertion order.
    pub fn list(&self) -> IndexMap<String, Activity> {
        self.activities.read().clone()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().get(name).cloned()
    }

    /// Appends `email` to the roster of `name`.
    ///
    /// The duplicate check and the push run under one write lock, so two
    /// concurrent calls with the same email cannot both succeed.
    pub fn append_participant(&self, name: &str, email: &str) -> AppendOutcome {
        let mut activities = self.activities.write();
        let Some(activity) = activities.get_mut(name) else {
            return AppendOutcome::UnknownActivity;
        };
        if activity.has_participant(email) {
            return AppendOutcome::AlreadyPresent;
        }
        activity.participants.push(email.to_string());
        AppendOutcome::Added
    }
}
