use dioxus::prelude::*;
use store::{is_light_color, normalize_entries, Theme, UserProfile};

use crate::icons::FaShareNodes;
use crate::views::ModalOverlay;
use crate::{provider_icon, Icon};

/// The public bio page for one claimed username.
///
/// Renders the user's ordered items on their chosen theme. Unknown usernames
/// get a claim prompt instead of a 404.
#[component]
pub fn BioView(username: String, on_claim: EventHandler<()>) -> Element {
    let mut profile = use_signal(|| Option::<UserProfile>::None);
    let mut unknown = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut show_share = use_signal(|| false);

    let loader_name = username.clone();
    let _loader = use_resource(move || {
        let username = loader_name.clone();
        async move {
            match api::get_profile_by_username(username).await {
                Ok(Some(p)) => profile.set(Some(p)),
                Ok(None) => unknown.set(true),
                Err(e) => error.set(Some(e.to_string())),
            }
        }
    });

    if let Some(message) = error() {
        return rsx! {
            div {
                class: "bio-page bio-page--fallback",
                p { class: "bio-error", "{message}" }
            }
        };
    }

    if unknown() {
        return rsx! {
            div {
                class: "bio-page bio-page--fallback",
                h1 { "@{username} is still free" }
                p { "Claim it and start collecting your links." }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_claim.call(()),
                    "Claim this name"
                }
            }
        };
    }

    let Some(p) = profile() else {
        return rsx! {
            div {
                class: "bio-page bio-page--fallback",
                p { "Loading..." }
            }
        };
    };

    let theme = p.theme.clone().unwrap_or_else(Theme::fallback);
    let items = normalize_entries(&p.order);
    let link_class = if is_light_color(&theme.background_color) {
        "bio-link on-light"
    } else {
        "bio-link on-dark"
    };
    let display_name = match &p.name {
        Some(name) if !name.trim().is_empty() => name.clone(),
        _ => format!("@{}", p.username),
    };
    let avatar_initial = initial(&p.username);
    let url = share_url(&p.username);

    rsx! {
        div {
            class: "bio-page",
            style: "background-color: {theme.background_color}; color: {theme.text_color}",

            button {
                class: "bio-share",
                title: "Share",
                onclick: move |_| show_share.set(true),
                Icon { icon: FaShareNodes, width: 16, height: 16 }
            }

            div {
                class: "bio-card",
                if let Some(avatar) = p.avatar_url.clone() {
                    img { class: "bio-avatar", src: "{avatar}", alt: "Avatar" }
                } else {
                    div { class: "bio-avatar bio-avatar--initial", "{avatar_initial}" }
                }
                h1 { class: "bio-name", "{display_name}" }
                p { class: "bio-handle", "@{p.username}" }

                div {
                    class: "bio-links",
                    for item in items {
                        a {
                            key: "{item.order_id}",
                            class: link_class,
                            href: "{item.url}",
                            target: "_blank",
                            span { class: "bio-link-icon", {provider_icon(&item, 18)} }
                            span { class: "bio-link-label", "{item.label}" }
                        }
                    }
                }
            }

            footer {
                class: "bio-footer",
                button {
                    class: "bio-footer-cta",
                    onclick: move |_| on_claim.call(()),
                    "Create your own LinkLeaf"
                }
            }

            if show_share() {
                ModalOverlay {
                    on_close: move |_| show_share.set(false),
                    div {
                        class: "dialog",
                        h2 { class: "dialog-title", "Share this bio" }
                        input {
                            class: "share-url",
                            r#type: "text",
                            readonly: true,
                            value: "{url}",
                        }
                        p { class: "dialog-hint", "Copy the address above to share it anywhere." }
                        div {
                            class: "dialog-actions",
                            button {
                                class: "btn btn-outline",
                                onclick: move |_| show_share.set(false),
                                "Close"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Absolute address of this bio where one is knowable (browser), the path
/// otherwise.
fn share_url(username: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return format!("{origin}/{username}");
            }
        }
    }
    format!("/{username}")
}

fn initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}
