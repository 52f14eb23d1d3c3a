use crate::objects::{DownloaderSettings, JsError};

/// Fixed Web Storage key holding the downloader settings blob.
pub const SETTINGS_KEY: &str = "tr_settings";

/// Narrow key/value interface over whatever medium holds client-only state.
/// Production uses Web Storage; tests substitute an in-memory map.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), JsError>;
    fn delete(&mut self, key: &str) -> Result<(), JsError>;
}

/// [SettingsStore] backed by the browser's local storage.
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, JsError> {
        web_sys::window()
            .ok_or("error getting window")?
            .local_storage()?
            .ok_or_else(|| JsError::from("local storage unavailable"))
    }
}

impl SettingsStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()
            .ok()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), JsError> {
        Ok(Self::storage()?.set_item(key, value)?)
    }

    fn delete(&mut self, key: &str) -> Result<(), JsError> {
        Ok(Self::storage()?.remove_item(key)?)
    }
}

/// Reads the persisted settings, falling back to the defaults on absent or
/// corrupt data.
pub fn load_settings(store: &impl SettingsStore) -> DownloaderSettings {
    DownloaderSettings::from_stored(store.get(SETTINGS_KEY))
}

/// Persists the settings verbatim under [SETTINGS_KEY].
pub fn save_settings(
    store: &mut impl SettingsStore,
    settings: &DownloaderSettings,
) -> Result<(), JsError> {
    store.set(SETTINGS_KEY, &serde_json::to_string(settings)?)
}

/// Erases the persisted settings and returns the defaults.
pub fn clear_settings(store: &mut impl SettingsStore) -> Result<DownloaderSettings, JsError> {
    store.delete(SETTINGS_KEY)?;
    Ok(DownloaderSettings::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: HashMap<String, String>,
    }

    impl SettingsStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), JsError> {
            self.values.insert(key.into(), value.into());
            Ok(())
        }

        fn delete(&mut self, key: &str) -> Result<(), JsError> {
            self.values.remove(key);
            Ok(())
        }
    }

    #[test]
    fn save_then_load_reproduces_settings() {
        let mut store = MemoryStore::default();
        let settings = DownloaderSettings {
            rpc_url: "http://192.168.2.104:9091/transmission/rpc".into(),
            download_dir: "/downloads/rss".into(),
        };

        save_settings(&mut store, &settings).unwrap();

        assert_eq!(load_settings(&store), settings);
    }

    #[test]
    fn clear_then_load_yields_defaults() {
        let mut store = MemoryStore::default();
        let settings = DownloaderSettings {
            rpc_url: "x".into(),
            download_dir: "y".into(),
        };
        save_settings(&mut store, &settings).unwrap();

        assert_eq!(clear_settings(&mut store).unwrap(), DownloaderSettings::default());
        assert_eq!(load_settings(&store), DownloaderSettings::default());
    }

    #[test]
    fn corrupt_blob_loads_as_defaults() {
        let mut store = MemoryStore::default();
        store.set(SETTINGS_KEY, "not json").unwrap();

        assert_eq!(load_settings(&store), DownloaderSettings::default());
    }
}
