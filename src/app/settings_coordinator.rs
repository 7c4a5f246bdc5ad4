//! Preference persistence coordination.
//!
//! Type-safe loading and saving of serializable preferences to the host's
//! key-value storage. Values are stored as JSON strings; malformed or missing
//! values fall back to defaults silently, with a warn-level log line, and
//! never surface an error to the user.

use serde::{Deserialize, Serialize};

/// Coordinates preference persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a preference, falling back to the type's default.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this preference
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        let Some(storage) = storage else {
            return T::default();
        };
        let Some(json_str) = storage.get_string(key) else {
            return T::default();
        };
        match serde_json::from_str(&json_str) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "malformed preference value, using default");
                T::default()
            }
        }
    }

    /// Saves a preference as a JSON string.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this preference
    /// * `value` - The value to serialize and save
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }
}
