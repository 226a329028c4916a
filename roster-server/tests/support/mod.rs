use std::fs;

use axum_test::TestServer;
use roster_core::{Catalog, RosterStore};
use roster_server::{routes::create_app, seed, state::AppState};
use tempfile::TempDir;

/// Marker served from the per-test static directory.
pub const LANDING_PAGE: &str =
    "<!DOCTYPE html>\n<html><body>Mergington High School Activities</body></html>\n";

pub struct TestApp {
    pub server: TestServer,
    _static_dir: TempDir,
}

/// Build a server around the built-in catalog.
pub fn build_test_app() -> TestApp {
    build_test_app_with_catalog(seed::builtin_catalog())
}

/// Build a server around `catalog`, serving a one-page static directory
/// that lives for as long as the returned `TestApp`.
pub fn build_test_app_with_catalog(catalog: Catalog) -> TestApp {
    let static_dir = tempfile::tempdir().expect("failed to create static directory");
    fs::write(static_dir.path().join("index.html"), LANDING_PAGE)
        .expect("failed to write landing page");

    let state = AppState::new(RosterStore::new(catalog));
    let server = TestServer::new(create_app(state, static_dir.path()))
        .expect("failed to start test server");

    TestApp {
        server,
        _static_dir: static_dir,
    }
}
