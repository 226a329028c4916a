use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// A single extracurricular offering and its current roster.
///
/// The activity's name is the key it is stored under, not a field of the
/// record. `description` and `schedule` never change after creation;
/// `max_participants` is an informational capacity that signup does not
/// enforce. Only `participants` mutates, and only through
/// [`add_participant`](Activity::add_participant) and
/// [`remove_participant`](Activity::remove_participant).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with an empty roster.
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Replace the roster with a seed list, preserving its order.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `email` is currently on this activity's roster.
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Append `email` to the roster, rejecting duplicates.
    pub fn add_participant(&mut self, email: &str) -> Result<()> {
        if self.is_registered(email) {
            return Err(RosterError::AlreadyRegistered);
        }
        self.participants.push(email.to_owned());
        Ok(())
    }

    /// Remove `email` from the roster, rejecting absentees.
    ///
    /// The relative order of the remaining participants is preserved.
    pub fn remove_participant(&mut self, email: &str) -> Result<()> {
        match self.participants.iter().position(|p| p == email) {
            Some(index) => {
                self.participants.remove(index);
                Ok(())
            }
            None => Err(RosterError::NotRegistered),
        }
    }
}

/// Snapshot of one activity as returned by
/// [`RosterStore::activities`](crate::RosterStore::activities).
///
/// Serializes with snake_case field names; `participants` keeps insertion
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<&Activity> for ActivityView {
    fn from(activity: &Activity) -> Self {
        Self {
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            max_participants: activity.max_participants,
            participants: activity.participants.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess_club() -> Activity {
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
    }

    #[test]
    fn add_participant_appends_in_order() {
        let mut activity = chess_club();
        activity.add_participant("first@mergington.edu").unwrap();
        activity.add_participant("second@mergington.edu").unwrap();

        assert_eq!(
            activity.participants,
            vec!["first@mergington.edu", "second@mergington.edu"]
        );
    }

    #[test]
    fn add_participant_rejects_duplicates() {
        let mut activity = chess_club();
        activity.add_participant("dup@mergington.edu").unwrap();

        let err = activity.add_participant("dup@mergington.edu").unwrap_err();
        assert_eq!(err, RosterError::AlreadyRegistered);
        assert_eq!(activity.participants.len(), 1);
    }

    #[test]
    fn remove_participant_keeps_remaining_order() {
        let mut activity = chess_club().with_participants([
            "a@mergington.edu",
            "b@mergington.edu",
            "c@mergington.edu",
        ]);

        activity.remove_participant("b@mergington.edu").unwrap();
        assert_eq!(
            activity.participants,
            vec!["a@mergington.edu", "c@mergington.edu"]
        );
    }

    #[test]
    fn remove_participant_rejects_absentees() {
        let mut activity = chess_club();
        let err = activity
            .remove_participant("ghost@mergington.edu")
            .unwrap_err();
        assert_eq!(err, RosterError::NotRegistered);
    }

    #[test]
    fn view_serializes_with_snake_case_fields() {
        let activity = chess_club().with_participants(["a@mergington.edu"]);
        let view = ActivityView::from(&activity);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "description": "Learn strategies and compete in chess tournaments",
                "schedule": "Fridays, 3:30 PM - 5:00 PM",
                "max_participants": 12,
                "participants": ["a@mergington.edu"],
            })
        );
    }
}
