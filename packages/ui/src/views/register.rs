//! Registration form for a freshly claimed username.

use api::UserInfo;
use dioxus::prelude::*;
use store::{format_phone, unmask_phone};

use crate::auth::{use_auth, AuthState};

/// Account creation for a claimed name. The username arrives locked from the
/// claim page; the phone field masks itself as the user types. Client checks
/// mirror the server's so most mistakes are caught before the round trip.
#[component]
pub fn RegisterView(
    username: String,
    on_registered: EventHandler<UserInfo>,
    /// Called from the "change" affordance next to the locked username.
    on_navigate_claim: EventHandler<()>,
) -> Element {
    let mut auth = use_auth();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let register_name = username.clone();
    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let username = register_name.clone();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let digits = unmask_phone(&phone());
            let p = password();
            let cp = confirm_password();

            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if digits.len() < 10 {
                error.set(Some("Please enter a valid phone number".to_string()));
                return;
            }
            if p.len() < 6 {
                error.set(Some("Password must be at least 6 characters".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            match api::register(username, n, e, digits, p, cp).await {
                Ok(user) => {
                    auth.set(AuthState {
                        user: Some(user.clone()),
                        loading: false,
                        online: true,
                    });
                    on_registered.call(user);
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Almost yours" }
            div {
                class: "claimed-name",
                span { "linkleaf.bio/{username}" }
                button {
                    class: "link-button",
                    onclick: move |_| on_navigate_claim.call(()),
                    "change"
                }
            }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "tel",
                    placeholder: "(11) 9 8765-4321",
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(format_phone(&evt.value())),
                }

                input {
                    r#type: "password",
                    placeholder: "Password (min 6 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Create my page" }
                }
            }
        }
    }
}
