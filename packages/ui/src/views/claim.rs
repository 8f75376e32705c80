//! Landing page where a visitor checks and claims a bio username.

use dioxus::prelude::*;

/// Username claim form. The input only accepts the characters a claimed slug
/// may contain; anything else is dropped as it is typed.
#[component]
pub fn ClaimView(
    /// Called with the available username — continue to registration.
    on_claimed: EventHandler<String>,
    on_navigate_login: EventHandler<()>,
) -> Element {
    let mut username = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut checking = use_signal(|| false);

    let handle_claim = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let u = username();
            if u.is_empty() {
                error.set(Some("Pick a name first".to_string()));
                return;
            }

            checking.set(true);
            match api::username_available(u.clone()).await {
                Ok(true) => {
                    checking.set(false);
                    on_claimed.call(u);
                }
                Ok(false) => {
                    checking.set(false);
                    error.set(Some(format!("@{u} is already taken")));
                }
                Err(e) => {
                    checking.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Your links, one leaf" }
            p { class: "auth-subtitle", "Claim your name and collect everything you share in one page." }

            form {
                class: "auth-form claim-form",
                onsubmit: handle_claim,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                div {
                    class: "claim-input",
                    span { class: "claim-prefix", "linkleaf.bio/" }
                    input {
                        r#type: "text",
                        placeholder: "yourname",
                        value: username(),
                        oninput: move |evt: FormEvent| {
                            let filtered: String = evt
                                .value()
                                .to_lowercase()
                                .chars()
                                .filter(|c| {
                                    c.is_ascii_lowercase()
                                        || c.is_ascii_digit()
                                        || *c == '_'
                                        || *c == '-'
                                })
                                .collect();
                            username.set(filtered);
                        },
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: checking(),
                    if checking() { "Checking..." } else { "Claim it" }
                }
            }

            p {
                class: "auth-footer",
                "Already have an account? "
                button {
                    class: "link-button",
                    onclick: move |_| on_navigate_login.call(()),
                    "Sign in"
                }
            }
        }
    }
}
