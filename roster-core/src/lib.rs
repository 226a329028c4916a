//! # Roster Core
//!
//! Core library for the Mergington activity roster service: the in-memory
//! activity store and the operations that read or mutate it.
//!
//! ## Overview
//!
//! `roster-core` owns the entire behavioral surface of the service:
//!
//! - **Catalog**: the fixed set of activities loaded at process start
//! - **Roster Store**: a guarded name-to-activity map with snapshot reads
//! - **Operations**: `activities`, `signup`, and `unregister`, with duplicate
//!   and absence handling
//! - **Error Taxonomy**: typed client-input failures for transports to map
//!
//! The crate is deliberately transport-free: every operation is a plain
//! synchronous call, so an HTTP router, a CLI, or a test harness can drive
//! the store the same way.
//!
//! ## Examples
//!
//! ```
//! use roster_core::{Activity, Catalog, RosterStore};
//!
//! let mut catalog = Catalog::default();
//! catalog.insert(
//!     "Chess Club",
//!     Activity::new("Learn chess strategies", "Fridays, 3:30 PM - 5:00 PM", 12),
//! );
//!
//! let store = RosterStore::new(catalog);
//! store.signup("Chess Club", "alice@mergington.edu").unwrap();
//! assert_eq!(store.activities()["Chess Club"].participants.len(), 1);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod activity;
pub mod catalog;
pub mod error;
pub mod store;

pub use activity::{Activity, ActivityView};
pub use catalog::{Catalog, CatalogError};
pub use error::{Result, RosterError};
pub use store::{Confirmation, RosterStore};
