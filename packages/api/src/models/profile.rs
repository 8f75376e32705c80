//! Row types for assembling a [`store::UserProfile`] out of the `orders`
//! table and its joined `links` / `social_media` records.

use sqlx::FromRow;
use store::{LinkRecord, OrderEntry, SocialMediaRecord};
use uuid::Uuid;

/// One `orders` row with its link and social media columns left-joined in.
///
/// Either side of the join may be NULL; [`OrderRow::to_entry`] only builds
/// the nested record when the joined row was actually there.
#[derive(Debug, Clone, FromRow)]
pub struct OrderRow {
    pub id: Uuid,
    pub sequence: i32,
    pub link_id: Option<Uuid>,
    pub social_media_id: Option<Uuid>,
    pub link_name: Option<String>,
    pub link_url: Option<String>,
    pub provider_name: Option<String>,
    pub social_url: Option<String>,
    pub social_username: Option<String>,
}

impl OrderRow {
    /// Project into the wire-format entry served to clients.
    pub fn to_entry(&self) -> OrderEntry {
        let link = match (&self.link_id, &self.link_name, &self.link_url) {
            (Some(id), Some(name), Some(url)) => Some(LinkRecord {
                id: id.to_string(),
                name: name.clone(),
                url: url.clone(),
            }),
            _ => None,
        };
        let social_media = match (&self.social_media_id, &self.social_url) {
            (Some(id), Some(url)) => Some(SocialMediaRecord {
                id: id.to_string(),
                provider_name: self.provider_name.clone(),
                url: url.clone(),
                username: self.social_username.clone(),
            }),
            _ => None,
        };
        OrderEntry {
            id: self.id.to_string(),
            sequence: self.sequence,
            link_id: self.link_id.map(|id| id.to_string()),
            social_media_id: self.social_media_id.map(|id| id.to_string()),
            link,
            social_media,
        }
    }
}
