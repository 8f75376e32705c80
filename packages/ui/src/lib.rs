//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library. Named re-exports because the solid and brand sets
// overlap on a few icon names.
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{
        FaFacebook, FaInstagram, FaLinkedin, FaWhatsapp, FaXTwitter, FaYoutube,
    };
    pub use dioxus_free_icons::icons::fa_solid_icons::{
        FaCloud, FaCloudArrowUp, FaEnvelope, FaGlobe, FaGripVertical, FaLink, FaShareNodes,
        FaTrash, FaTriangleExclamation,
    };
}

pub const LINKLEAF_CSS: Asset = asset!("/assets/linkleaf.css");

mod remote;
pub use remote::ApiStore;

pub mod views;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

pub mod status_feed;
pub use status_feed::{log_status, use_status_feed, LogLevel, StatusFeed};

mod status_panel;
pub use status_panel::{StatusPanel, StatusToggle};

mod link_board;
pub use link_board::use_link_board;

mod save_indicator;
pub use save_indicator::SaveIndicator;

mod link_list;
pub use link_list::{provider_icon, LinkList};

mod new_link_dialog;
pub use new_link_dialog::NewLinkDialog;

mod new_social_dialog;
pub use new_social_dialog::NewSocialDialog;
