#![cfg(target_arch = "wasm32")]

use rss_transmission_console::objects::DownloaderSettings;
use rss_transmission_console::storage::{self, LocalStore, SettingsStore, SETTINGS_KEY};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn settings_survive_a_reload() {
    let mut store = LocalStore;
    let settings = DownloaderSettings {
        rpc_url: "http://transmission:9091/transmission/rpc".into(),
        download_dir: "/downloads".into(),
    };

    storage::save_settings(&mut store, &settings).unwrap();

    // a reload re-reads from local storage, which is exactly what a fresh
    // load_settings call does
    assert_eq!(storage::load_settings(&LocalStore), settings);

    storage::clear_settings(&mut store).unwrap();
    assert_eq!(
        storage::load_settings(&LocalStore),
        DownloaderSettings::default()
    );
}

#[wasm_bindgen_test]
fn corrupt_blob_falls_back_to_defaults() {
    let mut store = LocalStore;

    store.set(SETTINGS_KEY, "not json").unwrap();

    assert_eq!(
        storage::load_settings(&LocalStore),
        DownloaderSettings::default()
    );

    store.delete(SETTINGS_KEY).unwrap();
}
