use serde::{Deserialize, Serialize};

/// One monitored RSS subscription as reported by the server.
///
/// The id is assigned by the server and opaque to the console; every record
/// shown to the user came out of a prior `/api/feeds` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedRecord {
    pub id: String,
    pub name: String,
    pub url: String,
    pub interval: u32,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub last_checked: Option<String>,
    #[serde(default)]
    pub last_status: Option<String>,
}

/// Edit buffer for the create/edit modal. Only exists while the modal is
/// open; the writable subset of a [FeedRecord].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedDraft {
    pub name: String,
    pub url: String,
    pub interval: u32,
    pub enabled: bool,
}

impl Default for FeedDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            interval: 10,
            enabled: true,
        }
    }
}

impl From<&FeedRecord> for FeedDraft {
    fn from(record: &FeedRecord) -> Self {
        Self {
            name: record.name.clone(),
            url: record.url.clone(),
            interval: record.interval,
            enabled: record.enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_from_server_shape() {
        let record: FeedRecord = serde_json::from_str(
            r#"{"id":"f1","name":"linux isos","url":"https://example.com/rss","interval":30,"enabled":true,"lastChecked":"2024-05-01T10:00:00Z","lastStatus":"OK"}"#,
        )
        .unwrap();

        assert_eq!(record.id, "f1");
        assert_eq!(record.interval, 30);
        assert_eq!(record.last_checked.as_deref(), Some("2024-05-01T10:00:00Z"));
        assert_eq!(record.last_status.as_deref(), Some("OK"));
    }

    #[test]
    fn record_tolerates_missing_optional_fields() {
        let record: FeedRecord = serde_json::from_str(
            r#"{"id":"f2","name":"n","url":"u","interval":1}"#,
        )
        .unwrap();

        assert!(!record.enabled);
        assert_eq!(record.last_checked, None);
        assert_eq!(record.last_status, None);
    }

    #[test]
    fn draft_from_record_copies_writable_fields() {
        let record = FeedRecord {
            id: "f3".into(),
            name: "name".into(),
            url: "url".into(),
            interval: 5,
            enabled: false,
            last_checked: Some("ts".into()),
            last_status: Some("OK".into()),
        };
        let draft = FeedDraft::from(&record);

        assert_eq!(draft.name, "name");
        assert_eq!(draft.url, "url");
        assert_eq!(draft.interval, 5);
        assert!(!draft.enabled);
    }
}
