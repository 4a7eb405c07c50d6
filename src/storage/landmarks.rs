//! Landmark persistence
//!
//! Saved landmarks are serialized as a JSON array of `{name, position}`
//! objects under a single key, the same shape the widget kept in the
//! browser's local storage.

use tracing::debug;

use crate::core::Landmark;
use crate::storage::error::StorageError;
use crate::storage::keyvalue::KeyValueStore;
use crate::validation::validate_coordinate;

/// Storage key for the saved landmark list
pub const LANDMARKS_KEY: &str = "savedLandmarks";

/// Saved-landmark list bound to a key-value backend.
///
/// Mutations mark the store modified; `save` persists and clears the
/// flag.
pub struct LandmarkStore<S: KeyValueStore> {
    backend: S,
    landmarks: Vec<Landmark>,
    modified: bool,
}

impl<S: KeyValueStore> LandmarkStore<S> {
    /// Open the store, loading and validating any persisted landmarks.
    pub fn open(backend: S) -> Result<Self, StorageError> {
        let landmarks = match backend.get(LANDMARKS_KEY)? {
            Some(raw) => {
                let parsed: Vec<Landmark> =
                    serde_json::from_str(&raw).map_err(|e| StorageError::SerializationError {
                        message: format!("Failed to parse landmark list: {}", e),
                    })?;
                for lm in &parsed {
                    validate_coordinate(&lm.position).map_err(|e| {
                        StorageError::InvalidLandmark {
                            name: lm.name.clone(),
                            reason: e.to_string(),
                        }
                    })?;
                }
                debug!(count = parsed.len(), "loaded saved landmarks");
                parsed
            }
            None => Vec::new(),
        };
        Ok(Self {
            backend,
            landmarks,
            modified: false,
        })
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Add a landmark; the name must be non-blank and the position
    /// valid.
    pub fn add(&mut self, landmark: Landmark) -> Result<(), StorageError> {
        if landmark.name.trim().is_empty() {
            return Err(StorageError::EmptyName);
        }
        validate_coordinate(&landmark.position).map_err(|e| StorageError::InvalidLandmark {
            name: landmark.name.clone(),
            reason: e.to_string(),
        })?;
        self.landmarks.push(landmark);
        self.modified = true;
        Ok(())
    }

    /// Remove the first landmark with the given name.
    pub fn remove(&mut self, name: &str) -> Option<Landmark> {
        let idx = self.landmarks.iter().position(|lm| lm.name == name)?;
        self.modified = true;
        Some(self.landmarks.remove(idx))
    }

    /// Whether there are unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Persist the current list under [`LANDMARKS_KEY`].
    pub fn save(&mut self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.landmarks).map_err(|e| {
            StorageError::SerializationError {
                message: format!("Failed to serialize landmark list: {}", e),
            }
        })?;
        self.backend.set(LANDMARKS_KEY, &raw)?;
        self.modified = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coordinate;
    use crate::storage::keyvalue::{JsonFileStore, MemoryStore};

    fn park() -> Landmark {
        Landmark::new("Dog park", Coordinate::new(53.0850, 8.8017))
    }

    #[test]
    fn test_open_empty_backend() {
        let store = LandmarkStore::open(MemoryStore::new()).unwrap();
        assert!(store.landmarks().is_empty());
        assert!(!store.is_modified());
    }

    #[test]
    fn test_add_marks_modified_and_save_clears() {
        let mut store = LandmarkStore::open(MemoryStore::new()).unwrap();
        store.add(park()).unwrap();
        assert!(store.is_modified());
        store.save().unwrap();
        assert!(!store.is_modified());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut store = LandmarkStore::open(MemoryStore::new()).unwrap();
        let unnamed = Landmark::new("   ", Coordinate::new(53.0, 8.8));
        assert_eq!(store.add(unnamed), Err(StorageError::EmptyName));
    }

    #[test]
    fn test_invalid_position_rejected() {
        let mut store = LandmarkStore::open(MemoryStore::new()).unwrap();
        let broken = Landmark::new("Broken", Coordinate::new(95.0, 8.8));
        assert!(matches!(
            store.add(broken),
            Err(StorageError::InvalidLandmark { .. })
        ));
    }

    #[test]
    fn test_remove_by_name() {
        let mut store = LandmarkStore::open(MemoryStore::new()).unwrap();
        store.add(park()).unwrap();
        store.save().unwrap();
        let removed = store.remove("Dog park").unwrap();
        assert_eq!(removed.name, "Dog park");
        assert!(store.is_modified());
        assert!(store.remove("Dog park").is_none());
    }

    #[test]
    fn test_round_trip_through_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walk.json");

        let mut store = LandmarkStore::open(JsonFileStore::open(&path).unwrap()).unwrap();
        store.add(park()).unwrap();
        store
            .add(Landmark::new("Bakery", Coordinate::new(53.0795, 8.8020)))
            .unwrap();
        store.save().unwrap();

        let reloaded = LandmarkStore::open(JsonFileStore::open(&path).unwrap()).unwrap();
        assert_eq!(reloaded.landmarks(), store.landmarks());
    }

    #[test]
    fn test_persisted_shape_matches_widget_format() {
        let mut backend = MemoryStore::new();
        backend
            .set(
                LANDMARKS_KEY,
                r#"[{"name":"Dog park","position":{"lat":53.085,"lng":8.8017}}]"#,
            )
            .unwrap();
        let store = LandmarkStore::open(backend).unwrap();
        assert_eq!(store.landmarks(), &[park()]);
    }

    #[test]
    fn test_corrupt_landmark_fails_fast() {
        let mut backend = MemoryStore::new();
        backend
            .set(
                LANDMARKS_KEY,
                r#"[{"name":"Bad","position":{"lat":95.0,"lng":8.8}}]"#,
            )
            .unwrap();
        assert!(matches!(
            LandmarkStore::open(backend),
            Err(StorageError::InvalidLandmark { .. })
        ));
    }
}
