use std::sync::{Arc, Mutex};

use crate::models::{LinkRecord, OrderEntry, OrderUpdate, SocialMediaRecord, UserProfile};
use crate::remote::{ProfileStore, StoreError};

/// A provider catalog entry for social account creation.
#[derive(Clone, Debug)]
struct ProviderSeed {
    id: String,
    label: String,
    base_url: String,
}

#[derive(Debug, Default)]
struct ProfileData {
    profile: Option<UserProfile>,
    providers: Vec<ProviderSeed>,
    next_id: u32,
    fail_next: Option<StoreError>,
}

/// In-memory ProfileStore for testing and offline preview.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<ProfileData>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the single profile this store serves.
    pub fn seed_profile(&self, profile: UserProfile) {
        self.inner.lock().unwrap().profile = Some(profile);
    }

    /// Register a provider for `create_social_media`. Returns the catalog id.
    pub fn seed_provider(&self, label: &str, base_url: &str) -> String {
        let mut data = self.inner.lock().unwrap();
        data.next_id += 1;
        let id = format!("provider-{}", data.next_id);
        data.providers.push(ProviderSeed {
            id: id.clone(),
            label: label.to_string(),
            base_url: base_url.to_string(),
        });
        id
    }

    /// Make the next mutating call fail with `err` instead of applying.
    pub fn fail_next(&self, err: StoreError) {
        self.inner.lock().unwrap().fail_next = Some(err);
    }

    fn take_failure(data: &mut ProfileData) -> Option<StoreError> {
        data.fail_next.take()
    }

    fn fresh_id(data: &mut ProfileData, prefix: &str) -> String {
        data.next_id += 1;
        format!("{prefix}-{}", data.next_id)
    }
}

impl ProfileStore for MemoryStore {
    async fn fetch_profile(&self, user_id: &str) -> Result<UserProfile, StoreError> {
        let data = self.inner.lock().unwrap();
        match &data.profile {
            Some(profile) if profile.id == user_id => Ok(profile.clone()),
            _ => Err(StoreError::NotFound(format!("user {user_id}"))),
        }
    }

    async fn save_order(&self, user_id: &str, updates: &[OrderUpdate]) -> Result<(), StoreError> {
        let mut data = self.inner.lock().unwrap();
        if let Some(err) = Self::take_failure(&mut data) {
            return Err(err);
        }
        let Some(profile) = data.profile.as_mut().filter(|p| p.id == user_id) else {
            return Err(StoreError::NotFound(format!("user {user_id}")));
        };
        // All-or-nothing: reject the whole payload before touching anything.
        for update in updates {
            if !profile.order.iter().any(|e| e.id == update.order_id) {
                return Err(StoreError::Rejected(format!(
                    "unknown order entry {}",
                    update.order_id
                )));
            }
        }
        for update in updates {
            if let Some(entry) = profile.order.iter_mut().find(|e| e.id == update.order_id) {
                entry.sequence = update.sequence;
            }
        }
        Ok(())
    }

    async fn delete_link(&self, link_id: &str) -> Result<(), StoreError> {
        let mut data = self.inner.lock().unwrap();
        if let Some(err) = Self::take_failure(&mut data) {
            return Err(err);
        }
        let Some(profile) = data.profile.as_mut() else {
            return Err(StoreError::NotFound(format!("link {link_id}")));
        };
        let before = profile.order.len();
        profile
            .order
            .retain(|e| e.link.as_ref().map(|l| l.id.as_str()) != Some(link_id));
        if profile.order.len() == before {
            return Err(StoreError::NotFound(format!("link {link_id}")));
        }
        // Remaining sequences are deliberately left with a gap.
        Ok(())
    }

    async fn delete_social_media(&self, social_media_id: &str) -> Result<(), StoreError> {
        let mut data = self.inner.lock().unwrap();
        if let Some(err) = Self::take_failure(&mut data) {
            return Err(err);
        }
        let Some(profile) = data.profile.as_mut() else {
            return Err(StoreError::NotFound(format!("social media {social_media_id}")));
        };
        let before = profile.order.len();
        profile.order.retain(|e| {
            e.social_media.as_ref().map(|s| s.id.as_str()) != Some(social_media_id)
        });
        if profile.order.len() == before {
            return Err(StoreError::NotFound(format!("social media {social_media_id}")));
        }
        Ok(())
    }

    async fn create_link(
        &self,
        user_id: &str,
        name: &str,
        url: &str,
    ) -> Result<LinkRecord, StoreError> {
        let mut data = self.inner.lock().unwrap();
        if let Some(err) = Self::take_failure(&mut data) {
            return Err(err);
        }
        let link_id = Self::fresh_id(&mut data, "link");
        let order_id = Self::fresh_id(&mut data, "order");
        let Some(profile) = data.profile.as_mut().filter(|p| p.id == user_id) else {
            return Err(StoreError::NotFound(format!("user {user_id}")));
        };
        let link = LinkRecord {
            id: link_id,
            name: name.to_string(),
            url: url.to_string(),
        };
        let sequence = profile.order.iter().map(|e| e.sequence).max().unwrap_or(0) + 1;
        profile.order.push(OrderEntry {
            id: order_id,
            sequence,
            link_id: Some(link.id.clone()),
            social_media_id: None,
            link: Some(link.clone()),
            social_media: None,
        });
        Ok(link)
    }

    async fn create_social_media(
        &self,
        user_id: &str,
        social_account_id: &str,
        username: &str,
    ) -> Result<SocialMediaRecord, StoreError> {
        let mut data = self.inner.lock().unwrap();
        if let Some(err) = Self::take_failure(&mut data) {
            return Err(err);
        }
        let Some(provider) = data
            .providers
            .iter()
            .find(|p| p.id == social_account_id)
            .cloned()
        else {
            return Err(StoreError::NotFound(format!(
                "social account {social_account_id}"
            )));
        };
        let kind = crate::provider::ProviderKind::from_label(&provider.label);
        let handle = crate::provider::sanitize_handle(username, kind);
        if handle.is_empty() {
            return Err(StoreError::Rejected("username is required".to_string()));
        }
        let social_id = Self::fresh_id(&mut data, "social");
        let order_id = Self::fresh_id(&mut data, "order");
        let Some(profile) = data.profile.as_mut().filter(|p| p.id == user_id) else {
            return Err(StoreError::NotFound(format!("user {user_id}")));
        };
        let record = SocialMediaRecord {
            id: social_id,
            provider_name: Some(provider.label.clone()),
            url: format!("{}{}", provider.base_url, handle),
            username: Some(handle),
        };
        let sequence = profile.order.iter().map(|e| e.sequence).max().unwrap_or(0) + 1;
        profile.order.push(OrderEntry {
            id: order_id,
            sequence,
            link_id: None,
            social_media_id: Some(record.id.clone()),
            link: None,
            social_media: Some(record.clone()),
        });
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::LinkBoard;
    use crate::items::ItemKind;
    use crate::remote::{delete_item, submit_order};

    const ROW: f64 = 40.0;
    const LOWER: f64 = 30.0;

    async fn seeded_store() -> (MemoryStore, UserProfile) {
        let store = MemoryStore::new();
        store.seed_profile(UserProfile {
            id: "user-1".to_string(),
            username: "maria".to_string(),
            name: Some("Maria".to_string()),
            email: "maria@example.com".to_string(),
            avatar_url: None,
            status: "active".to_string(),
            theme: None,
            order: Vec::new(),
        });
        let instagram = store.seed_provider("Instagram", "https://instagram.com/");
        store
            .create_social_media("user-1", &instagram, "maria")
            .await
            .unwrap();
        store
            .create_link("user-1", "Portfolio", "https://maria.example")
            .await
            .unwrap();
        store
            .create_link("user-1", "Shop", "https://shop.maria.example")
            .await
            .unwrap();
        let profile = store.fetch_profile("user-1").await.unwrap();
        (store, profile)
    }

    #[tokio::test]
    async fn test_creation_appends_to_the_order() {
        let (_store, profile) = seeded_store().await;
        assert_eq!(profile.order.len(), 3);
        let sequences: Vec<i32> = profile.order.iter().map(|e| e.sequence).collect();
        assert_eq!(sequences, [1, 2, 3]);
        assert!(profile.order[0].social_media.is_some());
        assert_eq!(
            profile.order[0].social_media.as_ref().unwrap().url,
            "https://instagram.com/maria"
        );
    }

    #[tokio::test]
    async fn test_save_order_applies_atomically() {
        let (store, profile) = seeded_store().await;
        let mut board = LinkBoard::from_entries(&profile.order);
        board.drag_start(0);
        let ticket = board.drop_on(2, LOWER, ROW).unwrap();

        submit_order(&store, "user-1", &mut board, ticket)
            .await
            .unwrap();

        let reloaded = store.fetch_profile("user-1").await.unwrap();
        let fresh = LinkBoard::from_entries(&reloaded.order);
        assert_eq!(
            fresh.items().iter().map(|i| i.label.as_str()).collect::<Vec<_>>(),
            board.items().iter().map(|i| i.label.as_str()).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_save_order_rejects_unknown_entries_wholesale() {
        let (store, profile) = seeded_store().await;
        let mut updates: Vec<OrderUpdate> = profile
            .order
            .iter()
            .map(|e| OrderUpdate {
                order_id: e.id.clone(),
                sequence: e.sequence,
            })
            .collect();
        updates[1].order_id = "order-bogus".to_string();
        updates[0].sequence = 99;

        let err = store.save_order("user-1", &updates).await.unwrap_err();
        assert!(matches!(err, StoreError::Rejected(_)));

        // Nothing was applied, not even the valid first element.
        let reloaded = store.fetch_profile("user-1").await.unwrap();
        assert_eq!(
            reloaded.order.iter().map(|e| e.sequence).collect::<Vec<_>>(),
            [1, 2, 3]
        );
    }

    #[tokio::test]
    async fn test_failed_save_rolls_the_board_back() {
        let (store, profile) = seeded_store().await;
        let mut board = LinkBoard::from_entries(&profile.order);
        let before: Vec<String> = board.items().iter().map(|i| i.label.clone()).collect();

        board.drag_start(0);
        let ticket = board.drop_on(2, LOWER, ROW).unwrap();
        store.fail_next(StoreError::Unavailable("connection reset".to_string()));

        let err = submit_order(&store, "user-1", &mut board, ticket)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));

        let after: Vec<String> = board.items().iter().map(|i| i.label.clone()).collect();
        assert_eq!(before, after);

        // The server never saw the reorder either.
        let reloaded = store.fetch_profile("user-1").await.unwrap();
        assert_eq!(
            reloaded.order.iter().map(|e| e.sequence).collect::<Vec<_>>(),
            [1, 2, 3]
        );
    }

    #[tokio::test]
    async fn test_overlapping_submissions_stale_failure_is_ignored() {
        // Two drops are made back to back; their submissions settle out of
        // order. The newer one succeeds, then the older one fails. The board
        // must keep the newer order.
        let (store, profile) = seeded_store().await;
        let mut board = LinkBoard::from_entries(&profile.order);

        board.drag_start(0);
        let first = board.drop_on(2, LOWER, ROW).unwrap();
        board.drag_start(0);
        let second = board.drop_on(1, LOWER, ROW).unwrap();
        let wanted: Vec<String> = board.items().iter().map(|i| i.label.clone()).collect();

        submit_order(&store, "user-1", &mut board, second)
            .await
            .unwrap();

        store.fail_next(StoreError::Unavailable("timeout".to_string()));
        let err = submit_order(&store, "user-1", &mut board, first)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));

        let kept: Vec<String> = board.items().iter().map(|i| i.label.clone()).collect();
        assert_eq!(kept, wanted, "stale failure must not undo the newer order");
        assert!(!board.is_saving());
    }

    #[tokio::test]
    async fn test_delete_dispatches_by_kind() {
        let (store, profile) = seeded_store().await;
        let board = LinkBoard::from_entries(&profile.order);
        let social = board.items()[0].clone();
        let link = board.items()[1].clone();
        assert_eq!(social.kind, ItemKind::Social);
        assert_eq!(link.kind, ItemKind::Link);

        delete_item(&store, &social).await.unwrap();
        delete_item(&store, &link).await.unwrap();

        let reloaded = store.fetch_profile("user-1").await.unwrap();
        assert_eq!(reloaded.order.len(), 1);
        assert_eq!(reloaded.order[0].link.as_ref().unwrap().name, "Shop");
    }

    #[tokio::test]
    async fn test_delete_leaves_sequence_gaps_until_reorder() {
        let (store, profile) = seeded_store().await;
        let board = LinkBoard::from_entries(&profile.order);
        let middle = board.items()[1].clone();

        delete_item(&store, &middle).await.unwrap();

        let reloaded = store.fetch_profile("user-1").await.unwrap();
        let sequences: Vec<i32> = reloaded.order.iter().map(|e| e.sequence).collect();
        assert_eq!(sequences, [1, 3]);

        // The refetch path renormalizes cleanly around the gap.
        let mut board = LinkBoard::from_entries(&reloaded.order);
        assert_eq!(board.items().len(), 2);

        // The next reorder closes it.
        board.drag_start(0);
        let ticket = board.drop_on(1, LOWER, ROW).unwrap();
        submit_order(&store, "user-1", &mut board, ticket)
            .await
            .unwrap();
        let reloaded = store.fetch_profile("user-1").await.unwrap();
        let mut sequences: Vec<i32> = reloaded.order.iter().map(|e| e.sequence).collect();
        sequences.sort_unstable();
        assert_eq!(sequences, [1, 2]);
    }

    #[tokio::test]
    async fn test_delete_unknown_record_is_not_found() {
        let (store, _) = seeded_store().await;
        let err = store.delete_link("link-nope").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_fetch_unknown_user_is_not_found() {
        let (store, _) = seeded_store().await;
        let err = store.fetch_profile("user-2").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_social_media_requires_a_catalog_provider() {
        let (store, _) = seeded_store().await;
        let err = store
            .create_social_media("user-1", "provider-nope", "maria")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_social_media_sanitizes_the_handle() {
        let (store, _) = seeded_store().await;
        let x = store.seed_provider("X", "https://x.com/");
        let record = store
            .create_social_media("user-1", &x, "@maria")
            .await
            .unwrap();
        assert_eq!(record.username.as_deref(), Some("maria"));
        assert_eq!(record.url, "https://x.com/maria");
    }
}
