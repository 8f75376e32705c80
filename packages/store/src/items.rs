//! # Item normalization
//!
//! Collapses the two-table order representation ([`OrderEntry`] with a nested
//! link or social record) into the single flat [`BioItem`] list every view
//! renders. Normalization is pure and deterministic: malformed entries are
//! dropped, display labels are resolved, and the result is sorted by the
//! server-assigned sequence.

use serde::{Deserialize, Serialize};

use crate::models::OrderEntry;
use crate::provider::resolve_label;

/// Which kind of record a [`BioItem`] points at. Decides the deletion endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Social,
    Link,
}

/// One renderable row of a bio list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BioItem {
    /// Id of the underlying link or social record, not the order row
    pub id: String,
    pub kind: ItemKind,
    /// Resolved display label, never blank
    pub label: String,
    pub url: String,
    /// Id of the order row, the key used in reorder payloads
    pub order_id: String,
    /// 1-based position as last stored by the server
    pub sequence: i32,
}

impl BioItem {
    /// Project an order entry into a renderable item.
    ///
    /// An entry carrying a social record is social even if a link is also
    /// (incorrectly) attached; an entry carrying neither is `None`. A stored
    /// label that is empty or whitespace falls through to [`resolve_label`].
    pub fn from_entry(entry: &OrderEntry) -> Option<Self> {
        if let Some(social) = &entry.social_media {
            let label = match &social.provider_name {
                Some(name) if !name.trim().is_empty() => name.clone(),
                _ => resolve_label(&social.url),
            };
            return Some(BioItem {
                id: social.id.clone(),
                kind: ItemKind::Social,
                label,
                url: social.url.clone(),
                order_id: entry.id.clone(),
                sequence: entry.sequence,
            });
        }
        if let Some(link) = &entry.link {
            let label = if link.name.trim().is_empty() {
                resolve_label(&link.url)
            } else {
                link.name.clone()
            };
            return Some(BioItem {
                id: link.id.clone(),
                kind: ItemKind::Link,
                label,
                url: link.url.clone(),
                order_id: entry.id.clone(),
                sequence: entry.sequence,
            });
        }
        None
    }
}

/// Normalize raw order entries into the sorted list of renderable items.
///
/// Sorting is stable, so entries sharing a sequence keep their input order.
pub fn normalize_entries(entries: &[OrderEntry]) -> Vec<BioItem> {
    let mut items: Vec<BioItem> = entries.iter().filter_map(BioItem::from_entry).collect();
    items.sort_by_key(|item| item.sequence);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LinkRecord, SocialMediaRecord};

    fn social_entry(
        order_id: &str,
        record_id: &str,
        sequence: i32,
        provider_name: Option<&str>,
        url: &str,
    ) -> OrderEntry {
        OrderEntry {
            id: order_id.to_string(),
            sequence,
            link_id: None,
            social_media_id: Some(record_id.to_string()),
            link: None,
            social_media: Some(SocialMediaRecord {
                id: record_id.to_string(),
                provider_name: provider_name.map(|s| s.to_string()),
                url: url.to_string(),
                username: None,
            }),
        }
    }

    fn link_entry(
        order_id: &str,
        record_id: &str,
        sequence: i32,
        name: &str,
        url: &str,
    ) -> OrderEntry {
        OrderEntry {
            id: order_id.to_string(),
            sequence,
            link_id: Some(record_id.to_string()),
            social_media_id: None,
            link: Some(LinkRecord {
                id: record_id.to_string(),
                name: name.to_string(),
                url: url.to_string(),
            }),
            social_media: None,
        }
    }

    #[test]
    fn test_normalize_sorts_by_sequence() {
        let entries = vec![
            link_entry("o3", "l1", 3, "Blog", "https://example.com"),
            social_entry("o1", "s1", 1, Some("Instagram"), "https://instagram.com/a"),
            link_entry("o2", "l2", 2, "Shop", "https://shop.example.com"),
        ];
        let items = normalize_entries(&entries);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].order_id, "o1");
        assert_eq!(items[1].order_id, "o2");
        assert_eq!(items[2].order_id, "o3");
        assert_eq!(items[0].kind, ItemKind::Social);
        assert_eq!(items[1].kind, ItemKind::Link);
    }

    #[test]
    fn test_normalize_is_stable_on_equal_sequences() {
        let entries = vec![
            link_entry("first", "l1", 5, "A", "https://a.example"),
            link_entry("second", "l2", 5, "B", "https://b.example"),
        ];
        let items = normalize_entries(&entries);
        assert_eq!(items[0].order_id, "first");
        assert_eq!(items[1].order_id, "second");
    }

    #[test]
    fn test_normalize_drops_entries_with_no_record() {
        let mut orphan = link_entry("o1", "l1", 1, "A", "https://a.example");
        orphan.link = None;
        orphan.link_id = None;
        let entries = vec![
            orphan,
            link_entry("o2", "l2", 2, "B", "https://b.example"),
        ];
        let items = normalize_entries(&entries);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].order_id, "o2");
    }

    #[test]
    fn test_social_wins_when_both_records_present() {
        let mut entry = social_entry("o1", "s1", 1, Some("Instagram"), "https://instagram.com/a");
        entry.link = Some(LinkRecord {
            id: "l1".to_string(),
            name: "Ignored".to_string(),
            url: "https://ignored.example".to_string(),
        });
        let items = normalize_entries(&[entry]);
        assert_eq!(items[0].kind, ItemKind::Social);
        assert_eq!(items[0].id, "s1");
        assert_eq!(items[0].label, "Instagram");
    }

    #[test]
    fn test_missing_label_resolves_from_url() {
        let entries = vec![social_entry("o1", "s1", 1, None, "https://wa.me/5511999999999")];
        let items = normalize_entries(&entries);
        assert_eq!(items[0].label, "WhatsApp");
    }

    #[test]
    fn test_blank_label_resolves_from_url() {
        // An explicitly stored empty string is treated the same as no label.
        let entries = vec![social_entry("o1", "s1", 1, Some(""), "https://wa.me/5511999999999")];
        let items = normalize_entries(&entries);
        assert_eq!(items[0].label, "WhatsApp");

        let entries = vec![social_entry("o1", "s1", 1, Some("   "), "https://youtu.be/x")];
        assert_eq!(normalize_entries(&entries)[0].label, "YouTube");
    }

    #[test]
    fn test_blank_link_name_resolves_from_url() {
        let entries = vec![link_entry("o1", "l1", 1, "", "https://example.com/page")];
        let items = normalize_entries(&entries);
        assert_eq!(items[0].label, "example.com");
        assert_eq!(items[0].kind, ItemKind::Link);
    }

    #[test]
    fn test_item_ids_come_from_the_underlying_record() {
        let entries = vec![link_entry("order-9", "link-7", 1, "A", "https://a.example")];
        let items = normalize_entries(&entries);
        assert_eq!(items[0].id, "link-7");
        assert_eq!(items[0].order_id, "order-9");
    }
}
