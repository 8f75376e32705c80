//! # Link board — optimistic ordering state
//!
//! [`LinkBoard`] owns the editor's view of one user's bio list and every piece
//! of drag bookkeeping around it. It is a plain struct with no UI or transport
//! types, so the whole drag/submit/rollback cycle is unit-testable without a
//! rendering environment.
//!
//! ## Lifecycle of a drop
//!
//! 1. [`drag_start`](LinkBoard::drag_start) records the source row and arms the
//!    click guard.
//! 2. [`drop_on`](LinkBoard::drop_on) runs [`compute_reorder`], swaps the new
//!    order in immediately, and hands back a [`ReorderTicket`] carrying the
//!    submission payload and the pre-drag snapshot. A no-op drop returns `None`
//!    and nothing is submitted.
//! 3. The caller submits the ticket's payload, then settles it:
//!    [`confirm`](LinkBoard::confirm) on success, [`rollback`](LinkBoard::rollback)
//!    on failure. Rollback restores the snapshot only when the ticket is the
//!    most recently issued one, so a slow failure from an earlier drop can
//!    never clobber the state of a later one.
//!
//! The click guard stays armed from drag start until the caller releases it
//! (after the submission settles), suppressing the navigation click browsers
//! deliver right after a drop.

use crate::items::BioItem;
use crate::models::{OrderEntry, OrderUpdate};
use crate::reorder::{compute_reorder, DropHalf};

/// A pending reorder submission: what to send and what to restore on failure.
#[derive(Clone, Debug, PartialEq)]
pub struct ReorderTicket {
    token: u64,
    updates: Vec<OrderUpdate>,
    snapshot: Vec<BioItem>,
}

impl ReorderTicket {
    /// The order payload to submit, already resequenced 1..N.
    pub fn updates(&self) -> &[OrderUpdate] {
        &self.updates
    }

    pub fn token(&self) -> u64 {
        self.token
    }
}

/// Editor-side state for one user's ordered bio list.
#[derive(Clone, Debug, Default)]
pub struct LinkBoard {
    items: Vec<BioItem>,
    drag_from: Option<usize>,
    click_guard: bool,
    latest_token: u64,
    in_flight: u32,
}

impl LinkBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: &[OrderEntry]) -> Self {
        let mut board = Self::new();
        board.set_entries(entries);
        board
    }

    /// Replace the list from authoritative order entries (initial load, the
    /// refetch after a delete, any refresh).
    pub fn set_entries(&mut self, entries: &[OrderEntry]) {
        self.items = crate::items::normalize_entries(entries);
    }

    pub fn items(&self) -> &[BioItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether at least one order submission is still in flight.
    pub fn is_saving(&self) -> bool {
        self.in_flight > 0
    }

    /// Index the current drag started from, if one is active.
    pub fn drag_source(&self) -> Option<usize> {
        self.drag_from
    }

    /// Begin a drag from `index`. Arms the click guard.
    pub fn drag_start(&mut self, index: usize) {
        if index < self.items.len() {
            self.drag_from = Some(index);
            self.click_guard = true;
        }
    }

    /// Complete the drag on the given half of the row at `target`.
    ///
    /// Applies the new order optimistically and returns the ticket to submit.
    /// `None` means the gesture resolved to a no-op (no active drag, drop on
    /// itself, or an insertion that reproduces the current order); the list is
    /// untouched, nothing should be sent, and the click guard is dropped since
    /// no submission will release it.
    pub fn drop_on(&mut self, target: usize, offset_y: f64, row_height: f64) -> Option<ReorderTicket> {
        let Some(from) = self.drag_from.take() else {
            self.click_guard = false;
            return None;
        };
        let half = DropHalf::from_offset(offset_y, row_height);
        let Some(next) = compute_reorder(&self.items, from, target, half) else {
            // Nothing will be submitted, so nothing would release the guard later
            self.click_guard = false;
            return None;
        };

        let snapshot = std::mem::replace(&mut self.items, next);
        self.latest_token += 1;
        self.in_flight += 1;
        Some(ReorderTicket {
            token: self.latest_token,
            updates: self
                .items
                .iter()
                .map(|item| OrderUpdate {
                    order_id: item.order_id.clone(),
                    sequence: item.sequence,
                })
                .collect(),
            snapshot,
        })
    }

    /// End a drag gesture that did not produce a drop.
    ///
    /// Browsers fire this after the drop as well; by then the source index is
    /// already consumed and the guard is left for the submission to release.
    pub fn drag_end(&mut self) {
        if self.drag_from.take().is_some() {
            self.click_guard = false;
        }
    }

    /// Whether row clicks should be suppressed right now.
    pub fn click_guard(&self) -> bool {
        self.click_guard
    }

    /// Drop the click guard once the gesture's submission has settled.
    pub fn release_click_guard(&mut self) {
        self.click_guard = false;
    }

    /// Mark a submitted ticket as accepted by the server.
    pub fn confirm(&mut self, _ticket: &ReorderTicket) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Mark a submitted ticket as rejected, restoring its snapshot when it is
    /// still the latest submission. Returns whether the snapshot was restored.
    ///
    /// A stale ticket (a newer drop has been issued since) only settles the
    /// in-flight count; the newer optimistic state stays.
    pub fn rollback(&mut self, ticket: ReorderTicket) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if ticket.token != self.latest_token {
            return false;
        }
        self.items = ticket.snapshot;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemKind;

    fn item(label: &str, sequence: i32) -> BioItem {
        BioItem {
            id: format!("id-{label}"),
            kind: ItemKind::Link,
            label: label.to_string(),
            url: format!("https://example.com/{label}"),
            order_id: format!("order-{label}"),
            sequence,
        }
    }

    fn board_abc() -> LinkBoard {
        let mut board = LinkBoard::new();
        board.items = vec![item("A", 1), item("B", 2), item("C", 3)];
        board
    }

    fn labels(board: &LinkBoard) -> Vec<&str> {
        board.items().iter().map(|i| i.label.as_str()).collect()
    }

    const ROW: f64 = 40.0;

    #[test]
    fn test_drop_applies_optimistically_and_builds_payload() {
        let mut board = board_abc();
        board.drag_start(0);
        let ticket = board.drop_on(2, 30.0, ROW).unwrap();

        assert_eq!(labels(&board), ["B", "C", "A"]);
        assert!(board.is_saving());
        let updates = ticket.updates();
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0].order_id, "order-B");
        assert_eq!(updates[0].sequence, 1);
        assert_eq!(updates[2].order_id, "order-A");
        assert_eq!(updates[2].sequence, 3);
    }

    #[test]
    fn test_noop_drop_returns_none_and_keeps_state() {
        let mut board = board_abc();
        board.drag_start(1);
        assert!(board.drop_on(1, 10.0, ROW).is_none());
        assert_eq!(labels(&board), ["A", "B", "C"]);
        assert!(!board.is_saving());
        assert!(!board.click_guard(), "no submission follows a no-op drop");
        // Source consumed: a second drop without a new drag is ignored
        assert!(board.drop_on(0, 10.0, ROW).is_none());
    }

    #[test]
    fn test_drop_without_drag_is_ignored() {
        let mut board = board_abc();
        assert!(board.drop_on(0, 10.0, ROW).is_none());
    }

    #[test]
    fn test_upper_and_lower_halves_place_differently() {
        let mut board = board_abc();
        board.drag_start(0);
        let ticket = board.drop_on(2, 5.0, ROW).unwrap();
        assert_eq!(labels(&board), ["B", "A", "C"]);
        board.confirm(&ticket);

        let mut board = board_abc();
        board.drag_start(0);
        board.drop_on(2, 35.0, ROW).unwrap();
        assert_eq!(labels(&board), ["B", "C", "A"]);
    }

    #[test]
    fn test_rollback_restores_snapshot() {
        let mut board = board_abc();
        board.drag_start(0);
        let ticket = board.drop_on(2, 30.0, ROW).unwrap();
        assert_eq!(labels(&board), ["B", "C", "A"]);

        assert!(board.rollback(ticket));
        assert_eq!(labels(&board), ["A", "B", "C"]);
        assert!(!board.is_saving());
        // Snapshot keeps the original sequences too
        assert_eq!(
            board.items().iter().map(|i| i.sequence).collect::<Vec<_>>(),
            [1, 2, 3]
        );
    }

    #[test]
    fn test_confirm_settles_the_ticket() {
        let mut board = board_abc();
        board.drag_start(0);
        let ticket = board.drop_on(2, 30.0, ROW).unwrap();
        board.confirm(&ticket);
        assert!(!board.is_saving());
        assert_eq!(labels(&board), ["B", "C", "A"]);
    }

    #[test]
    fn test_stale_rollback_does_not_clobber_newer_state() {
        // First drop: A below C. Second drop (before the first settles):
        // move the new head below the next row. The first submission then
        // fails; its rollback must be ignored because a newer order exists.
        let mut board = board_abc();
        board.drag_start(0);
        let first = board.drop_on(2, 30.0, ROW).unwrap();
        assert_eq!(labels(&board), ["B", "C", "A"]);

        board.drag_start(0);
        let second = board.drop_on(1, 30.0, ROW).unwrap();
        assert_eq!(labels(&board), ["C", "B", "A"]);

        assert!(!board.rollback(first), "stale ticket must not roll back");
        assert_eq!(labels(&board), ["C", "B", "A"]);

        // The newer submission can still settle either way
        board.confirm(&second);
        assert!(!board.is_saving());
    }

    #[test]
    fn test_latest_failure_still_rolls_back_after_stale_one() {
        let mut board = board_abc();
        board.drag_start(0);
        let first = board.drop_on(2, 30.0, ROW).unwrap();
        board.drag_start(0);
        let second = board.drop_on(1, 30.0, ROW).unwrap();

        assert!(!board.rollback(first));
        assert!(board.rollback(second));
        // Second snapshot was taken after the first optimistic apply
        assert_eq!(labels(&board), ["B", "C", "A"]);
    }

    #[test]
    fn test_click_guard_lifecycle() {
        let mut board = board_abc();
        assert!(!board.click_guard());

        board.drag_start(0);
        assert!(board.click_guard());

        board.drop_on(2, 30.0, ROW).unwrap();
        assert!(board.click_guard(), "guard holds while the submit runs");

        // dragend arriving after the drop leaves the guard alone
        board.drag_end();
        assert!(board.click_guard());

        board.release_click_guard();
        assert!(!board.click_guard());
    }

    #[test]
    fn test_aborted_drag_releases_guard() {
        let mut board = board_abc();
        board.drag_start(1);
        board.drag_end();
        assert!(!board.click_guard());
        assert!(board.drag_source().is_none());
    }

    #[test]
    fn test_set_entries_renormalizes() {
        use crate::models::{LinkRecord, OrderEntry};

        let mut board = board_abc();
        let entries = vec![OrderEntry {
            id: "o1".to_string(),
            sequence: 4,
            link_id: Some("l1".to_string()),
            social_media_id: None,
            link: Some(LinkRecord {
                id: "l1".to_string(),
                name: "Only".to_string(),
                url: "https://example.com".to_string(),
            }),
            social_media: None,
        }];
        board.set_entries(&entries);
        assert_eq!(labels(&board), ["Only"]);
        // Server-assigned sequence survives until the next reorder
        assert_eq!(board.items()[0].sequence, 4);
    }
}
