use dioxus::prelude::*;
use store::{is_light_color, ProfileStore, Theme};

use crate::status_feed::{log_status, use_status_feed, LogLevel};
use crate::ApiStore;

/// Shared theme picker: swatch grid plus a live preview of the bio card.
///
/// The catalog comes from the server; the user's current theme is preselected.
/// Saving applies the theme and hands control back through `on_done`.
#[component]
pub fn ThemePickerView(user_id: String, on_done: EventHandler<()>) -> Element {
    let mut themes = use_signal(|| Vec::<Theme>::new());
    let mut selected = use_signal(|| Option::<Theme>::None);
    let mut username = use_signal(|| String::new());
    let mut error = use_signal(|| Option::<String>::None);
    let mut feed = use_status_feed();

    let loader_id = user_id.clone();
    let _loader = use_resource(move || {
        let user_id = loader_id.clone();
        async move {
            match api::list_themes(1, 50).await {
                Ok(list) => themes.set(list),
                Err(e) => error.set(Some(e.to_string())),
            }
            if let Ok(profile) = ApiStore.fetch_profile(&user_id).await {
                username.set(profile.username.clone());
                // peek: picking a swatch must not restart this loader
                if selected.peek().is_none() {
                    selected.set(profile.theme);
                }
            }
        }
    });

    let save_id = user_id.clone();
    let handle_save = move |_| {
        let user_id = save_id.clone();
        let Some(theme) = selected() else {
            return;
        };
        spawn(async move {
            match api::apply_theme(user_id, theme.id.clone()).await {
                Ok(()) => {
                    log_status(&mut feed, LogLevel::Success, "Theme applied");
                    on_done.call(());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let preview = selected().unwrap_or_else(Theme::fallback);
    let preview_links_class = if is_light_color(&preview.background_color) {
        "theme-preview-link on-light"
    } else {
        "theme-preview-link on-dark"
    };
    let avatar_initial = initial(&username());

    rsx! {
        div {
            class: "theme-layout",

            header {
                class: "theme-header",
                h1 { "Pick a theme" }
                div {
                    class: "theme-header-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_done.call(()),
                        "Back"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: handle_save,
                        "Save theme"
                    }
                }
            }

            if let Some(message) = error() {
                div { class: "error-banner", "{message}" }
            }

            div {
                class: "theme-body",

                div {
                    class: "theme-swatches",
                    for theme in themes() {
                        button {
                            key: "{theme.id}",
                            class: if selected().map(|s| s.id == theme.id).unwrap_or(false) {
                                "theme-swatch selected"
                            } else {
                                "theme-swatch"
                            },
                            style: "background-color: {theme.background_color}",
                            title: "{theme.background_color}",
                            onclick: {
                                let theme = theme.clone();
                                move |_| selected.set(Some(theme.clone()))
                            },
                        }
                    }
                }

                div {
                    class: "theme-preview",
                    style: "background-color: {preview.background_color}; color: {preview.text_color}",
                    div {
                        class: "theme-preview-avatar",
                        "{avatar_initial}"
                    }
                    p { class: "theme-preview-name", "@{username}" }
                    div { class: preview_links_class, "First link" }
                    div { class: preview_links_class, "Second link" }
                }
            }
        }
    }
}

fn initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}
