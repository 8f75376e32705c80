use dioxus::prelude::*;

use crate::status_feed::{use_status_feed, LogLevel};

const STATUS_PANEL_CSS: Asset = asset!("/assets/styling/status_panel.css");

/// Collapsible panel listing sync outcomes, newest first.
#[component]
pub fn StatusPanel() -> Element {
    let mut feed = use_status_feed();

    if !feed().visible {
        return rsx! {};
    }

    let entries = feed().entries.clone();

    rsx! {
        document::Stylesheet { href: STATUS_PANEL_CSS }

        div {
            class: "status-panel",
            div {
                class: "status-panel-header",
                span { "Sync status" }
                div {
                    class: "status-panel-header-actions",
                    button {
                        onclick: move |_| feed.write().clear(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| feed.write().visible = false,
                        "Close"
                    }
                }
            }
            div {
                class: "status-panel-entries",
                for entry in entries.iter().rev() {
                    div {
                        class: match entry.level {
                            LogLevel::Error => "status-panel-entry error",
                            LogLevel::Warning => "status-panel-entry warning",
                            LogLevel::Success => "status-panel-entry success",
                            LogLevel::Info => "status-panel-entry info",
                        },
                        span { class: "status-panel-time", "{entry.timestamp}" }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}

/// Header button that opens the panel, badged with the unseen entry count.
#[component]
pub fn StatusToggle() -> Element {
    let mut feed = use_status_feed();
    let unseen = feed().unseen();
    let has_errors = feed().has_errors();

    rsx! {
        button {
            class: if has_errors { "status-toggle has-errors" } else { "status-toggle" },
            onclick: move |_| feed.write().toggle(),
            title: "Sync status",
            if unseen > 0 {
                "{unseen}"
            } else {
                "Status"
            }
        }
    }
}
