//! Local key-value scene store
//!
//! Scenes are stored as one JSON file per key under the platform data
//! directory. Safety-net saves go through the same path as explicit ones;
//! only the caller decides whether a failure is user-visible.

use std::path::PathBuf;

use shared::{deserialize_scene, serialize_scene, SceneFile};

/// Store write failure
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Keyed JSON scene store on the local filesystem
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Store under the platform data directory, or None when unavailable
    pub fn open_default() -> Option<Self> {
        directories::ProjectDirs::from("com", "planar", "planar")
            .map(|dirs| Self::at(dirs.data_dir().to_path_buf()))
    }

    /// Store rooted at an explicit directory (tests, portable installs)
    pub fn at(root: PathBuf) -> Self {
        Self { root }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Load a scene by key. Absent or unreadable entries return None; a
    /// corrupt file is logged and treated as absent.
    pub fn load(&self, key: &str) -> Option<SceneFile> {
        let text = std::fs::read_to_string(self.path_for(key)).ok()?;
        match deserialize_scene(&text) {
            Ok(scene) => Some(scene),
            Err(e) => {
                tracing::warn!("discarding stored scene under key {key}: {e}");
                None
            }
        }
    }

    /// Write a scene under a key
    pub fn save(&self, key: &str, scene: &SceneFile) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.path_for(key), serialize_scene(scene))?;
        Ok(())
    }

    /// Check whether a key has a stored scene
    pub fn exists(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{entity_at, scene_file};

    fn temp_store() -> LocalStore {
        let root =
            std::env::temp_dir().join(format!("planar-store-{}", uuid::Uuid::new_v4()));
        LocalStore::at(root)
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let store = temp_store();
        let scene = scene_file(vec![entity_at("a", 1.0, 2.0)]);
        store.save("scene_test", &scene).unwrap();
        assert!(store.exists("scene_test"));

        let loaded = store.load("scene_test").unwrap();
        assert_eq!(loaded, scene);
    }

    #[test]
    fn test_load_absent_key() {
        let store = temp_store();
        assert!(store.load("nope").is_none());
        assert!(!store.exists("nope"));
    }

    #[test]
    fn test_load_corrupt_file_is_none() {
        let store = temp_store();
        std::fs::create_dir_all(&store.root).unwrap();
        std::fs::write(store.path_for("bad"), "{ not json").unwrap();
        assert!(store.load("bad").is_none());
    }
}
