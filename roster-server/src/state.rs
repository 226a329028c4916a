use std::sync::Arc;

use roster_core::RosterStore;

/// Shared state handed to every handler. Cloning is cheap; the roster
/// itself lives behind an `Arc`.
#[derive(Clone, Debug)]
pub struct AppState {
    roster: Arc<RosterStore>,
}

impl AppState {
    pub fn new(roster: RosterStore) -> Self {
        Self {
            roster: Arc::new(roster),
        }
    }

    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }
}
