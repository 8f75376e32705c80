//! Account activation landing page.
//!
//! The activation link carries the user id in the path and the token in the
//! query string. Activation runs once on mount; the page just reports how it
//! went.

use dioxus::prelude::*;

#[component]
pub fn ActivateView(user_id: String, token: String, on_continue: EventHandler<()>) -> Element {
    let mut outcome = use_signal(|| Option::<Result<(), String>>::None);

    let activate_user = user_id.clone();
    let activate_token = token.clone();
    let _run = use_resource(move || {
        let user_id = activate_user.clone();
        let token = activate_token.clone();
        async move {
            match api::activate_account(user_id, token).await {
                Ok(()) => outcome.set(Some(Ok(()))),
                Err(e) => outcome.set(Some(Err(e.to_string()))),
            }
        }
    });

    let body = match outcome() {
        None => rsx! {
            h1 { class: "auth-title", "Activating..." }
        },
        Some(Ok(())) => rsx! {
            h1 { class: "auth-title", "Your bio is live" }
            p { class: "auth-subtitle", "The account is active and your page is public." }
            button {
                class: "btn btn-primary",
                onclick: move |_| on_continue.call(()),
                "Open the editor"
            }
        },
        Some(Err(message)) => rsx! {
            h1 { class: "auth-title", "Activation failed" }
            p { class: "form-error", "{message}" }
        },
    };

    rsx! {
        div {
            class: "auth-page",
            {body}
        }
    }
}
