use serde::{Deserialize, Serialize};

/// Connection parameters for the Transmission downloader. Owned entirely by
/// the client; only ever leaves the browser as part of a send-item payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloaderSettings {
    pub rpc_url: String,
    pub download_dir: String,
}

impl Default for DownloaderSettings {
    fn default() -> Self {
        Self {
            rpc_url: String::new(),
            download_dir: String::from("/data"),
        }
    }
}

impl DownloaderSettings {
    /// Parses a persisted settings blob. Absent or corrupt data silently
    /// falls back to the defaults; the console must start either way.
    pub fn from_stored(raw: Option<String>) -> Self {
        raw.and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_yields_defaults() {
        let settings = DownloaderSettings::from_stored(None);

        assert_eq!(settings.rpc_url, "");
        assert_eq!(settings.download_dir, "/data");
    }

    #[test]
    fn corrupt_value_yields_defaults() {
        let settings = DownloaderSettings::from_stored(Some("not json".into()));

        assert_eq!(settings, DownloaderSettings::default());
    }

    #[test]
    fn stored_value_round_trips() {
        let settings = DownloaderSettings {
            rpc_url: "http://transmission:9091/transmission/rpc".into(),
            download_dir: "/downloads".into(),
        };
        let raw = serde_json::to_string(&settings).unwrap();

        assert_eq!(DownloaderSettings::from_stored(Some(raw)), settings);
    }

    #[test]
    fn wire_fields_are_camel_case() {
        let raw = serde_json::to_string(&DownloaderSettings::default()).unwrap();

        assert!(raw.contains("rpcUrl"));
        assert!(raw.contains("downloadDir"));
    }
}
