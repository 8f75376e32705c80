pub mod board;
pub mod items;
pub mod models;
pub mod provider;
pub mod remote;
pub mod reorder;

mod memory;
pub use memory::MemoryStore;

pub use board::{LinkBoard, ReorderTicket};
pub use items::{normalize_entries, BioItem, ItemKind};
pub use models::{
    format_phone, is_light_color, unmask_phone, LinkRecord, OrderEntry, OrderUpdate,
    SocialMediaRecord, Theme, UserProfile,
};
pub use provider::{resolve_label, sanitize_handle, ProviderKind};
pub use remote::{delete_item, submit_order, ProfileStore, StoreError};
pub use reorder::{compute_reorder, move_item, DropHalf};
