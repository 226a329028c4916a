use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use thiserror::Error;

use crate::activity::Activity;

/// Problems found while validating a catalog before it is served.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog entry has an empty activity name")]
    EmptyName,
    #[error("activity {0:?} has a capacity of zero")]
    ZeroCapacity(String),
    #[error("activity {0:?} lists participant {1:?} more than once")]
    DuplicateParticipant(String, String),
}

/// The set of activities a [`RosterStore`](crate::RosterStore) is seeded
/// with, keyed by activity name.
///
/// Deserializes from an `activities` table, so a catalog file looks like:
///
/// ```toml
/// [activities."Chess Club"]
/// description = "Learn strategies and compete in chess tournaments"
/// schedule = "Fridays, 3:30 PM - 5:00 PM"
/// max_participants = 12
/// participants = ["michael@mergington.edu"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub activities: HashMap<String, Activity>,
}

impl Catalog {
    /// Add an activity under `name`, returning any entry it replaced.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) -> Option<Activity> {
        self.activities.insert(name.into(), activity)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Check every entry for problems a seed file could introduce.
    ///
    /// Rejects empty activity names, zero capacities, and rosters that list
    /// the same participant twice. Returns the first problem found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (name, activity) in &self.activities {
            if name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if activity.max_participants == 0 {
                return Err(CatalogError::ZeroCapacity(name.clone()));
            }
            let mut seen = HashSet::new();
            for email in &activity.participants {
                if !seen.insert(email.as_str()) {
                    return Err(CatalogError::DuplicateParticipant(
                        name.clone(),
                        email.clone(),
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::default();
        catalog.insert(
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        );
        catalog.insert(
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            ),
        );
        catalog
    }

    #[test]
    fn valid_catalog_passes_validation() {
        assert_eq!(sample_catalog().validate(), Ok(()));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut catalog = sample_catalog();
        catalog.insert("   ", Activity::new("mystery", "never", 5));

        assert_eq!(catalog.validate(), Err(CatalogError::EmptyName));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let mut catalog = sample_catalog();
        catalog.insert("Void Club", Activity::new("nothing", "never", 0));

        assert_eq!(
            catalog.validate(),
            Err(CatalogError::ZeroCapacity("Void Club".to_owned()))
        );
    }

    #[test]
    fn repeated_participant_is_rejected() {
        let mut catalog = Catalog::default();
        catalog.insert(
            "Echo Club",
            Activity::new("repeat yourself", "Mondays", 8)
                .with_participants(["twice@mergington.edu", "twice@mergington.edu"]),
        );

        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateParticipant(
                "Echo Club".to_owned(),
                "twice@mergington.edu".to_owned()
            ))
        );
    }

    #[test]
    fn deserializes_missing_participants_as_empty() {
        let catalog: Catalog = serde_json::from_value(serde_json::json!({
            "activities": {
                "Chess Club": {
                    "description": "Learn strategies and compete in chess tournaments",
                    "schedule": "Fridays, 3:30 PM - 5:00 PM",
                    "max_participants": 12,
                }
            }
        }))
        .unwrap();

        let chess = &catalog.activities["Chess Club"];
        assert!(chess.participants.is_empty());
        assert_eq!(chess.max_participants, 12);
    }

    #[test]
    fn empty_document_deserializes_to_empty_catalog() {
        let catalog: Catalog = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(catalog.is_empty());
    }
}
