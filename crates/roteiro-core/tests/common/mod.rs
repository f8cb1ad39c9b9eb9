#![allow(dead_code)]

use std::path::{Path, PathBuf};

use roteiro_core::{params::SubmitTrip, TripPlanner, TripPlannerBuilder};
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, TripPlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = open_session(&catalog_path(&temp_dir)).await;
    (temp_dir, planner)
}

/// Starts a new session against an existing catalog.
pub async fn open_session(catalog_path: &Path) -> TripPlanner {
    TripPlannerBuilder::new()
        .with_catalog_path(Some(catalog_path))
        .build()
        .await
        .expect("Failed to create planner")
}

pub fn catalog_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("catalog.db")
}

pub fn trip(origin: &str, destination: &str, date: &str, time: &str) -> SubmitTrip {
    SubmitTrip {
        origin: origin.to_string(),
        destination: destination.to_string(),
        category: "Cultural".to_string(),
        date: date.to_string(),
        time: time.to_string(),
        notes: None,
    }
}
