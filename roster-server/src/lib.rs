//! # Roster Server
//!
//! HTTP transport for the Mergington High School activity roster.
//!
//! ## Overview
//!
//! - **Roster API**: list activities, sign students up, unregister them
//! - **Landing page**: serves the bundled signup page under `/static`
//! - **Catalog loading**: built-in catalog, or a TOML file via `CATALOG_PATH`
//!
//! The server is built on Axum. All roster state lives in a
//! [`roster_core::RosterStore`], in memory, for the lifetime of the process.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod seed;
pub mod state;
