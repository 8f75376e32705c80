//! Save/connectivity indicator for the customize header.

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::icons::{FaCloud, FaCloudArrowUp, FaTriangleExclamation};
use crate::link_board::use_link_board;
use crate::Icon;

/// A small icon that shows whether the bio order is settled on the server.
///
/// - **Saving**: a reorder is still in flight
/// - **Saved**: no pending saves and the server is reachable
/// - **Offline**: the last connectivity check failed
#[component]
pub fn SaveIndicator() -> Element {
    let auth = use_auth();
    let board = use_link_board();

    if auth().loading {
        return rsx! {};
    }

    if board().is_saving() {
        return rsx! {
            span {
                class: "save-indicator save-indicator--saving",
                title: "Saving order",
                Icon { icon: FaCloudArrowUp, width: 14, height: 14 }
            }
        };
    }

    if auth().online {
        rsx! {
            span {
                class: "save-indicator save-indicator--saved",
                title: "All changes saved",
                Icon { icon: FaCloud, width: 14, height: 14 }
            }
        }
    } else {
        rsx! {
            span {
                class: "save-indicator save-indicator--offline",
                title: "Offline",
                Icon { icon: FaTriangleExclamation, width: 14, height: 14 }
            }
        }
    }
}
