use crate::objects::FeedRecord;

/// In-memory mirror of the server's feed collection.
///
/// Every read of `/api/feeds` is tagged with a monotonically increasing
/// sequence number when it is issued. A completed read is applied only if no
/// later read has been applied already, so the visible list always reflects
/// the most recently issued read that completed and a slow response can never
/// overwrite a newer snapshot. Snapshots are replaced wholesale, never
/// merged.
#[derive(Debug, Default)]
pub struct FeedRegistry {
    feeds: Vec<FeedRecord>,
    issued: u64,
    applied: u64,
    in_flight: usize,
}

impl FeedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feeds(&self) -> &[FeedRecord] {
        &self.feeds
    }

    /// True while at least one read is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Registers a new read and returns its sequence number.
    pub fn begin_read(&mut self) -> u64 {
        self.issued += 1;
        self.in_flight += 1;
        self.issued
    }

    /// Applies a completed read. Returns false if the snapshot was discarded
    /// because a later read already completed.
    pub fn complete_read(&mut self, seq: u64, feeds: Vec<FeedRecord>) -> bool {
        self.settle();

        if seq <= self.applied {
            return false;
        }

        self.applied = seq;
        self.feeds = feeds;
        true
    }

    /// Records a failed read. The previous snapshot stays untouched.
    pub fn fail_read(&mut self, _seq: u64) {
        self.settle();
    }

    fn settle(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(id: &str) -> FeedRecord {
        FeedRecord {
            id: id.into(),
            name: format!("feed {}", id),
            url: format!("https://example.com/{}", id),
            interval: 10,
            enabled: true,
            last_checked: None,
            last_status: None,
        }
    }

    #[test]
    fn completed_read_replaces_snapshot_wholesale() {
        let mut registry = FeedRegistry::new();

        let seq = registry.begin_read();
        assert!(registry.complete_read(seq, vec![feed("a"), feed("b")]));
        assert_eq!(registry.feeds().len(), 2);

        let seq = registry.begin_read();
        assert!(registry.complete_read(seq, vec![feed("c")]));

        let ids: Vec<&str> = registry.feeds().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut registry = FeedRegistry::new();

        let slow = registry.begin_read();
        let fast = registry.begin_read();

        assert!(registry.complete_read(fast, vec![feed("fresh")]));
        assert!(!registry.complete_read(slow, vec![feed("stale")]));

        assert_eq!(registry.feeds()[0].id, "fresh");
    }

    #[test]
    fn failed_read_leaves_snapshot_untouched() {
        let mut registry = FeedRegistry::new();

        let seq = registry.begin_read();
        registry.complete_read(seq, vec![feed("a")]);

        let seq = registry.begin_read();
        registry.fail_read(seq);

        assert_eq!(registry.feeds().len(), 1);
        assert_eq!(registry.feeds()[0].id, "a");

        // a later read still applies normally
        let seq = registry.begin_read();
        assert!(registry.complete_read(seq, vec![feed("b")]));
        assert_eq!(registry.feeds()[0].id, "b");
    }

    #[test]
    fn loading_tracks_outstanding_reads() {
        let mut registry = FeedRegistry::new();
        assert!(!registry.is_loading());

        let first = registry.begin_read();
        let second = registry.begin_read();
        assert!(registry.is_loading());

        registry.complete_read(second, vec![]);
        assert!(registry.is_loading());

        registry.fail_read(first);
        assert!(!registry.is_loading());
    }
}
