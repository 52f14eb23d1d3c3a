use serde::{Deserialize, Serialize};

/// One event in a feed's check history, kept only while the log viewer for
/// that feed is open. The server decides the ordering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub ts: String,
    pub level: String,
    pub msg: String,
}
