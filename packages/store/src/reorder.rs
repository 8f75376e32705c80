//! # Reorder engine
//!
//! Pure index arithmetic for drag-and-drop reordering. The engine never touches
//! its input: callers keep the original list as the rollback snapshot and swap
//! in the returned one optimistically (see [`crate::board`]).
//!
//! A drop lands on either the upper or lower half of the target row. Upper half
//! inserts the dragged item immediately before the target, lower half
//! immediately after. Drops whose adjusted insertion point reproduces the
//! current order (the row itself, the lower half of the row above, the upper
//! half of the row below) resolve to `None` so no order submission is made.

use crate::items::BioItem;

/// Which half of the target row the pointer released in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropHalf {
    Upper,
    Lower,
}

impl DropHalf {
    /// Classify a drop by the pointer's vertical offset within the target row.
    ///
    /// Offsets past the row (negative or beyond `row_height`) are clamped by
    /// the comparison itself; a non-positive `row_height` counts as `Lower`.
    pub fn from_offset(offset_y: f64, row_height: f64) -> Self {
        if offset_y < row_height / 2.0 {
            DropHalf::Upper
        } else {
            DropHalf::Lower
        }
    }
}

/// Relocate one element of a list without mutating the original.
///
/// `to` is the insertion index after removal and is capped at the end of the
/// shortened list.
pub fn move_item(items: &[BioItem], from: usize, to: usize) -> Vec<BioItem> {
    let mut next = items.to_vec();
    if from >= next.len() {
        return next;
    }
    let item = next.remove(from);
    let to = to.min(next.len());
    next.insert(to, item);
    next
}

/// Compute the list as it stands after dropping the item at `from` onto the
/// `half` of the row at `to`, with sequences renumbered 1..N.
///
/// Returns `None` when the gesture is a no-op: out-of-range indices, a drop on
/// the dragged row itself, or a drop whose insertion point leaves the order
/// unchanged.
pub fn compute_reorder(
    items: &[BioItem],
    from: usize,
    to: usize,
    half: DropHalf,
) -> Option<Vec<BioItem>> {
    if from >= items.len() || to >= items.len() || from == to {
        return None;
    }

    // Insertion point in pre-removal coordinates, then shifted left when the
    // removal happens before it.
    let insert_at = match half {
        DropHalf::Upper => to,
        DropHalf::Lower => to + 1,
    };
    let insert_at = if from < insert_at { insert_at - 1 } else { insert_at };
    if insert_at == from {
        return None;
    }

    let mut next = move_item(items, from, insert_at);
    for (idx, item) in next.iter_mut().enumerate() {
        item.sequence = (idx + 1) as i32;
    }
    Some(next)
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

    fn labels(items: &[BioItem]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }

    fn abc() -> Vec<BioItem> {
        vec![item("A", 1), item("B", 2), item("C", 3)]
    }

    #[test]
    fn test_drop_half_from_offset() {
        assert_eq!(DropHalf::from_offset(0.0, 40.0), DropHalf::Upper);
        assert_eq!(DropHalf::from_offset(19.9, 40.0), DropHalf::Upper);
        assert_eq!(DropHalf::from_offset(20.0, 40.0), DropHalf::Lower);
        assert_eq!(DropHalf::from_offset(39.0, 40.0), DropHalf::Lower);
        // Offsets can land outside the row when the pointer moves fast
        assert_eq!(DropHalf::from_offset(-5.0, 40.0), DropHalf::Upper);
        assert_eq!(DropHalf::from_offset(60.0, 40.0), DropHalf::Lower);
    }

    #[test]
    fn test_move_item_is_non_mutating() {
        let original = abc();
        let moved = move_item(&original, 0, 2);
        assert_eq!(labels(&original), ["A", "B", "C"]);
        assert_eq!(labels(&moved), ["B", "C", "A"]);
    }

    #[test]
    fn test_drag_first_below_last() {
        let next = compute_reorder(&abc(), 0, 2, DropHalf::Lower).unwrap();
        assert_eq!(labels(&next), ["B", "C", "A"]);
        assert_eq!(next.iter().map(|i| i.sequence).collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn test_drag_first_above_last() {
        let next = compute_reorder(&abc(), 0, 2, DropHalf::Upper).unwrap();
        assert_eq!(labels(&next), ["B", "A", "C"]);
    }

    #[test]
    fn test_drag_last_above_first() {
        let next = compute_reorder(&abc(), 2, 0, DropHalf::Upper).unwrap();
        assert_eq!(labels(&next), ["C", "A", "B"]);
    }

    #[test]
    fn test_drag_last_below_first() {
        let next = compute_reorder(&abc(), 2, 0, DropHalf::Lower).unwrap();
        assert_eq!(labels(&next), ["A", "C", "B"]);
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        assert!(compute_reorder(&abc(), 1, 1, DropHalf::Upper).is_none());
        assert!(compute_reorder(&abc(), 1, 1, DropHalf::Lower).is_none());
    }

    #[test]
    fn test_identity_drops_are_noops() {
        // Upper half of the row directly below, lower half of the row directly
        // above: both put the item right back where it was.
        assert!(compute_reorder(&abc(), 0, 1, DropHalf::Upper).is_none());
        assert!(compute_reorder(&abc(), 1, 0, DropHalf::Lower).is_none());
    }

    #[test]
    fn test_out_of_range_indices_are_noops() {
        assert!(compute_reorder(&abc(), 3, 0, DropHalf::Upper).is_none());
        assert!(compute_reorder(&abc(), 0, 3, DropHalf::Upper).is_none());
        assert!(compute_reorder(&[], 0, 0, DropHalf::Upper).is_none());
    }

    #[test]
    fn test_reorder_is_a_permutation() {
        let original = abc();
        let next = compute_reorder(&original, 2, 0, DropHalf::Upper).unwrap();
        assert_eq!(next.len(), original.len());
        for it in &original {
            assert!(next.iter().any(|n| n.order_id == it.order_id));
        }
        // Sequences are contiguous from 1 regardless of what they were before
        let mut gapped = abc();
        gapped[1].sequence = 7;
        gapped[2].sequence = 11;
        let next = compute_reorder(&gapped, 0, 2, DropHalf::Lower).unwrap();
        assert_eq!(next.iter().map(|i| i.sequence).collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn test_middle_drops() {
        let four = vec![item("A", 1), item("B", 2), item("C", 3), item("D", 4)];
        let next = compute_reorder(&four, 0, 2, DropHalf::Upper).unwrap();
        assert_eq!(labels(&next), ["B", "A", "C", "D"]);
        let next = compute_reorder(&four, 3, 1, DropHalf::Lower).unwrap();
        assert_eq!(labels(&next), ["A", "B", "D", "C"]);
    }
}
