//! Feed of sync outcomes surfaced to the editor.
//!
//! Saved orders, rollbacks, deletions and other background work report here
//! through [`log_status`]; the panel in `status_panel` renders the feed and
//! its toggle badges the number of entries logged since it was last open.

use dioxus::prelude::*;

/// Severity of a feed entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatusEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

// A long editing session logs a line per drag; keep the tail only.
const FEED_CAP: usize = 100;

#[derive(Clone, Debug, Default)]
pub struct StatusFeed {
    pub entries: Vec<StatusEntry>,
    pub visible: bool,
    seen: usize,
}

impl StatusFeed {
    /// Entries logged since the panel was last open.
    pub fn unseen(&self) -> usize {
        self.entries.len().saturating_sub(self.seen)
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.level == LogLevel::Error)
    }

    /// Open or close the panel. Opening marks everything as seen.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        if self.visible {
            self.seen = self.entries.len();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.seen = 0;
    }

    fn push(&mut self, entry: StatusEntry) {
        self.entries.push(entry);
        if self.entries.len() > FEED_CAP {
            let overflow = self.entries.len() - FEED_CAP;
            self.entries.drain(..overflow);
            self.seen = self.seen.saturating_sub(overflow);
        }
        if self.visible {
            self.seen = self.entries.len();
        }
    }
}

pub fn use_status_feed() -> Signal<StatusFeed> {
    use_context::<Signal<StatusFeed>>()
}

/// Append one entry, stamped with the local wall-clock time.
pub fn log_status(feed: &mut Signal<StatusFeed>, level: LogLevel, message: &str) {
    let entry = StatusEntry {
        timestamp: current_time(),
        level,
        message: message.to_string(),
    };
    feed.write().push(entry);
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let h = (secs / 3600) % 24;
    let m = (secs / 60) % 60;
    let s = secs % 60;
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: LogLevel, message: &str) -> StatusEntry {
        StatusEntry {
            timestamp: "12:00:00".to_string(),
            level,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_unseen_counts_until_opened() {
        let mut feed = StatusFeed::default();
        feed.push(entry(LogLevel::Success, "Order saved"));
        feed.push(entry(LogLevel::Info, "Link added"));
        assert_eq!(feed.unseen(), 2);

        feed.toggle();
        assert!(feed.visible);
        assert_eq!(feed.unseen(), 0);

        // While the panel is open, new entries count as seen immediately
        feed.push(entry(LogLevel::Success, "Order saved"));
        assert_eq!(feed.unseen(), 0);

        feed.toggle();
        feed.push(entry(LogLevel::Warning, "Superseded"));
        assert_eq!(feed.unseen(), 1);
    }

    #[test]
    fn test_feed_is_capped() {
        let mut feed = StatusFeed::default();
        for i in 0..(FEED_CAP + 25) {
            feed.push(entry(LogLevel::Info, &format!("entry {i}")));
        }
        assert_eq!(feed.entries.len(), FEED_CAP);
        assert_eq!(feed.entries[0].message, "entry 25");
        assert_eq!(feed.unseen(), FEED_CAP);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut feed = StatusFeed::default();
        feed.push(entry(LogLevel::Error, "Order not saved"));
        assert!(feed.has_errors());

        feed.clear();
        assert!(!feed.has_errors());
        assert_eq!(feed.unseen(), 0);
        assert!(feed.entries.is_empty());
    }
}
