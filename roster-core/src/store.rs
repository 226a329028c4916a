use std::collections::HashMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::activity::{Activity, ActivityView};
use crate::catalog::Catalog;
use crate::error::{Result, RosterError};

/// Acknowledgement returned by a successful roster mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

/// Thread-safe roster of activities and their participants.
///
/// All state lives behind one [`RwLock`], so reads run concurrently while
/// each mutation checks and updates the roster in a single critical
/// section. Methods take `&self`; share the store with [`std::sync::Arc`].
#[derive(Debug)]
pub struct RosterStore {
    activities: RwLock<HashMap<String, Activity>>,
}

impl RosterStore {
    /// Build a store seeded from `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            activities: RwLock::new(catalog.activities),
        }
    }

    /// Snapshot every activity keyed by name.
    ///
    /// The snapshot is detached from the store: mutations made after it is
    /// taken do not show up in it.
    pub fn activities(&self) -> HashMap<String, ActivityView> {
        self.activities
            .read()
            .iter()
            .map(|(name, activity)| (name.clone(), ActivityView::from(activity)))
            .collect()
    }

    pub fn activity_count(&self) -> usize {
        self.activities.read().len()
    }

    /// Register `email` for `activity`.
    ///
    /// Fails with [`RosterError::ActivityNotFound`] for unknown activities
    /// and [`RosterError::AlreadyRegistered`] if `email` is already on the
    /// roster. The membership check and the append happen under one write
    /// lock, so two racing signups for the same email cannot both succeed.
    pub fn signup(&self, activity: &str, email: &str) -> Result<Confirmation> {
        let mut activities = self.activities.write();
        let outcome = activities
            .get_mut(activity)
            .ok_or(RosterError::ActivityNotFound)
            .and_then(|entry| entry.add_participant(email));

        match outcome {
            Ok(()) => {
                info!("Signed up {email} for {activity}");
                Ok(Confirmation {
                    message: format!("Signed up {email} for {activity}"),
                })
            }
            Err(err) => {
                debug!("Rejected signup of {email} for {activity}: {err}");
                Err(err)
            }
        }
    }

    /// Remove `email` from `activity`'s roster.
    ///
    /// Fails with [`RosterError::ActivityNotFound`] for unknown activities
    /// and [`RosterError::NotRegistered`] if `email` is not on the roster.
    pub fn unregister(&self, activity: &str, email: &str) -> Result<Confirmation> {
        let mut activities = self.activities.write();
        let outcome = activities
            .get_mut(activity)
            .ok_or(RosterError::ActivityNotFound)
            .and_then(|entry| entry.remove_participant(email));

        match outcome {
            Ok(()) => {
                info!("Unregistered {email} from {activity}");
                Ok(Confirmation {
                    message: format!("Unregistered {email} from {activity}"),
                })
            }
            Err(err) => {
                debug!("Rejected unregister of {email} from {activity}: {err}");
                Err(err)
            }
        }
    }
}
