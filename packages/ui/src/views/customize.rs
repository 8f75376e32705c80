use dioxus::prelude::*;
use store::{BioItem, LinkBoard, ProfileStore, ReorderTicket, UserProfile};

use crate::status_feed::{log_status, use_status_feed, LogLevel};
use crate::views::ModalOverlay;
use crate::{
    ApiStore, LinkList, LogoutButton, NewLinkDialog, NewSocialDialog, SaveIndicator, StatusPanel,
    StatusToggle,
};

/// Shared customize view: the logged-in editor for one user's bio.
///
/// Owns the [`LinkBoard`] for the whole page and provides it as context, so
/// the list, the dialogs and the save indicator all see the same state.
/// Reorders are applied optimistically and submitted in the background; a
/// rejected submission rolls the list back unless a newer order has already
/// replaced it. Deletes and creates refetch the profile instead, keeping the
/// server authoritative over sequences.
#[component]
pub fn CustomizeView(
    user_id: String,
    /// Called to open the theme picker for this user.
    on_navigate_theme: EventHandler<String>,
    /// Called to open the public bio page for this username.
    on_navigate_bio: EventHandler<String>,
) -> Element {
    let mut board = use_context_provider(|| Signal::new(LinkBoard::new()));
    let mut profile = use_signal(|| Option::<UserProfile>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut show_new_link = use_signal(|| false);
    let mut show_new_social = use_signal(|| false);
    let mut feed = use_status_feed();

    // Load the profile on mount
    let loader_id = user_id.clone();
    let _loader = use_resource(move || {
        let user_id = loader_id.clone();
        async move {
            match ApiStore.fetch_profile(&user_id).await {
                Ok(p) => {
                    board.write().set_entries(&p.order);
                    profile.set(Some(p));
                    error.set(None);
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
        }
    });

    let reorder_id = user_id.clone();
    let handle_reorder = move |ticket: ReorderTicket| {
        let user_id = reorder_id.clone();
        spawn(async move {
            match ApiStore.save_order(&user_id, ticket.updates()).await {
                Ok(()) => {
                    board.write().confirm(&ticket);
                    log_status(&mut feed, LogLevel::Success, "Order saved");
                }
                Err(e) => {
                    let restored = board.write().rollback(ticket);
                    if restored {
                        log_status(
                            &mut feed,
                            LogLevel::Error,
                            &format!("Order not saved, previous order restored: {e}"),
                        );
                    } else {
                        // A newer drop already replaced this order
                        log_status(
                            &mut feed,
                            LogLevel::Warning,
                            &format!("Superseded order submission failed: {e}"),
                        );
                    }
                }
            }
            board.write().release_click_guard();
        });
    };

    let delete_id = user_id.clone();
    let handle_delete = move |item: BioItem| {
        let user_id = delete_id.clone();
        spawn(async move {
            match store::delete_item(&ApiStore, &item).await {
                Ok(()) => {
                    log_status(&mut feed, LogLevel::Info, &format!("Removed {}", item.label));
                    match ApiStore.fetch_profile(&user_id).await {
                        Ok(p) => {
                            board.write().set_entries(&p.order);
                            profile.set(Some(p));
                        }
                        Err(e) => {
                            log_status(&mut feed, LogLevel::Warning, &format!("Refresh failed: {e}"));
                        }
                    }
                }
                Err(e) => {
                    log_status(
                        &mut feed,
                        LogLevel::Error,
                        &format!("Could not remove {}: {e}", item.label),
                    );
                }
            }
        });
    };

    let link_id = user_id.clone();
    let handle_create_link = move |(name, url): (String, String)| {
        let user_id = link_id.clone();
        spawn(async move {
            match ApiStore.create_link(&user_id, &name, &url).await {
                Ok(_) => {
                    show_new_link.set(false);
                    log_status(&mut feed, LogLevel::Success, &format!("Added {name}"));
                    match ApiStore.fetch_profile(&user_id).await {
                        Ok(p) => {
                            board.write().set_entries(&p.order);
                            profile.set(Some(p));
                        }
                        Err(e) => {
                            log_status(&mut feed, LogLevel::Warning, &format!("Refresh failed: {e}"));
                        }
                    }
                }
                Err(e) => {
                    log_status(&mut feed, LogLevel::Error, &format!("Could not add {name}: {e}"));
                }
            }
        });
    };

    let social_id = user_id.clone();
    let handle_create_social = move |(account_id, username): (String, String)| {
        let user_id = social_id.clone();
        spawn(async move {
            match ApiStore.create_social_media(&user_id, &account_id, &username).await {
                Ok(_) => {
                    show_new_social.set(false);
                    log_status(&mut feed, LogLevel::Success, "Added social profile");
                    match ApiStore.fetch_profile(&user_id).await {
                        Ok(p) => {
                            board.write().set_entries(&p.order);
                            profile.set(Some(p));
                        }
                        Err(e) => {
                            log_status(&mut feed, LogLevel::Warning, &format!("Refresh failed: {e}"));
                        }
                    }
                }
                Err(e) => {
                    log_status(
                        &mut feed,
                        LogLevel::Error,
                        &format!("Could not add social profile: {e}"),
                    );
                }
            }
        });
    };

    rsx! {
        div {
            class: "customize-layout",

            header {
                class: "customize-header",
                div {
                    class: "customize-title",
                    h1 { "LinkLeaf" }
                    if let Some(p) = profile() {
                        span { class: "customize-handle", "@{p.username}" }
                    }
                }
                div {
                    class: "customize-header-actions",
                    SaveIndicator {}
                    StatusToggle {}
                    button {
                        class: "btn btn-outline",
                        onclick: {
                            let user_id = user_id.clone();
                            move |_| on_navigate_theme.call(user_id.clone())
                        },
                        "Theme"
                    }
                    if let Some(p) = profile() {
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| on_navigate_bio.call(p.username.clone()),
                            "View bio"
                        }
                    }
                    LogoutButton { class: "btn btn-outline" }
                }
            }

            if let Some(message) = error() {
                div { class: "error-banner", "{message}" }
            }

            if profile().map(|p| p.status == "pending").unwrap_or(false) {
                div {
                    class: "pending-banner",
                    "Your account is awaiting activation. Follow the activation link to publish your bio."
                }
            }

            div {
                class: "customize-list",
                LinkList {
                    on_reorder: handle_reorder,
                    on_delete: handle_delete,
                }
            }

            div {
                class: "customize-add",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_new_link.set(true),
                    "Add link"
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_new_social.set(true),
                    "Add social profile"
                }
            }

            if show_new_link() {
                ModalOverlay {
                    on_close: move |_| show_new_link.set(false),
                    NewLinkDialog {
                        on_create: handle_create_link,
                        on_cancel: move |_| show_new_link.set(false),
                    }
                }
            }

            if show_new_social() {
                ModalOverlay {
                    on_close: move |_| show_new_social.set(false),
                    NewSocialDialog {
                        on_create: handle_create_social,
                        on_cancel: move |_| show_new_social.set(false),
                    }
                }
            }

            StatusPanel {}
        }
    }
}
