//! Test fixture creation for the events dataset

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// The events dataset used by every e2e test: two capped events plus one
/// with unlimited capacity, covering both rules shapes and both team
/// size shapes.
const TEST_DATASET: &str = r#"{
    "events": [
        {
            "event_id": 1,
            "title": "Robo Race",
            "brief": "Build a bot",
            "description": "Race your robot through the obstacle course.",
            "rules": ["Max bot weight 3kg", "No pre-built kits"],
            "form_link": "https://forms.example.com/robo",
            "max_participants": 30,
            "team_size": "2-4"
        },
        {
            "event_id": 2,
            "title": "Chess Blitz",
            "brief": "Five minute games",
            "description": "Swiss format blitz tournament.",
            "rules": "FIDE blitz rules apply.",
            "max_participants": 16,
            "team_size": 1
        },
        {
            "event_id": 3,
            "title": "Open Mic",
            "brief": "Anything on stage",
            "description": "Music, comedy, poetry."
        }
    ]
}"#;

/// Writes the standard test dataset into a fresh temp dir.
/// Returns (temp_dir, dataset_path).
pub fn write_test_dataset() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("events.json");
    fs::write(&path, TEST_DATASET)?;
    Ok((dir, path))
}
