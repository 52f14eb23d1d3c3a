pub mod check_report;
pub mod feed;
mod js_error;
pub mod log_entry;
pub mod settings;

pub use check_report::{CheckReport, FeedItem};
pub use feed::{FeedDraft, FeedRecord};
pub use js_error::JsError;
pub use log_entry::LogEntry;
pub use settings::DownloaderSettings;
