//! Statistics collected during a conversion run

use serde::Serialize;
use std::path::PathBuf;
use wpmark_domain::ItemKind;

/// Counters for one conversion run
///
/// Returned to the caller instead of being kept in process-wide state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Posts written
    pub posts: usize,

    /// Pages written
    pub pages: usize,

    /// Drafts written
    pub drafts: usize,

    /// Comments carried by written items
    pub comments: usize,

    /// Items of other kinds, or without a kind
    pub skipped: usize,

    /// Records that could not be written
    pub failures: usize,

    /// Whether the index file was written
    pub index_written: bool,

    /// Destination root
    pub output_root: PathBuf,

    /// Wall clock duration in milliseconds
    pub elapsed_ms: u64,
}

impl RunStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a written item and its comments
    pub fn record_written(&mut self, kind: &ItemKind, comments: usize) {
        match kind {
            ItemKind::Post => self.posts += 1,
            ItemKind::Page => self.pages += 1,
            ItemKind::Draft => self.drafts += 1,
            ItemKind::Other(_) => return,
        }
        self.comments += comments;
    }

    /// Record an item that was not written on purpose
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Record a record that failed to be written
    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    /// Total items written
    pub fn total_written(&self) -> usize {
        self.posts + self.pages + self.drafts
    }

    /// One-line totals
    pub fn summary(&self) -> String {
        format!(
            "Total: posts: {}; pages: {}; comments: {}",
            self.posts, self.pages, self.comments
        )
    }

    /// Elapsed time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_ms as f64 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_written() {
        let mut stats = RunStats::new();
        stats.record_written(&ItemKind::Post, 3);
        stats.record_written(&ItemKind::Page, 0);
        stats.record_written(&ItemKind::Draft, 1);
        stats.record_written(&ItemKind::Other("attachment".to_string()), 9);

        assert_eq!(stats.posts, 1);
        assert_eq!(stats.pages, 1);
        assert_eq!(stats.drafts, 1);
        assert_eq!(stats.comments, 4);
        assert_eq!(stats.total_written(), 3);
    }

    #[test]
    fn test_summary() {
        let mut stats = RunStats::new();
        stats.record_written(&ItemKind::Post, 2);
        assert_eq!(stats.summary(), "Total: posts: 1; pages: 0; comments: 2");
    }

    #[test]
    fn test_elapsed_secs() {
        let stats = RunStats {
            elapsed_ms: 1500,
            ..RunStats::default()
        };
        assert!((stats.elapsed_secs() - 1.5).abs() < f64::EPSILON);
    }
}
