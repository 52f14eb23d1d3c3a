use serde::{Deserialize, Serialize};

/// Result of a manual feed check: the items the server newly detected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    #[serde(rename = "newItems", default)]
    pub new_items: Vec<FeedItem>,
}

/// A detected item that can be forwarded to the downloader. Item identity is
/// only ever supplied by a check result, never synthesized locally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_new_items() {
        let report: CheckReport =
            serde_json::from_str(r#"{"newItems":[{"id":"a"},{"id":"b"}],"log":"checked"}"#)
                .unwrap();

        assert_eq!(report.new_items.len(), 2);
        assert_eq!(report.new_items[0].id, "a");
    }

    #[test]
    fn report_without_items_is_empty() {
        let report: CheckReport = serde_json::from_str(r#"{}"#).unwrap();

        assert!(report.new_items.is_empty());
    }
}
