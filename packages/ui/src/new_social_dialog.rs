use api::SocialAccountInfo;
use dioxus::prelude::*;
use store::{format_phone, sanitize_handle, ProviderKind};

/// Inline form for adding a social profile from the provider catalog.
///
/// The input adapts to the selected provider: WhatsApp gets the phone mask,
/// email is taken as-is, everything else accepts a handle or a pasted profile
/// URL. A live preview shows the address the entry will point at. The raw
/// input goes to the server, which runs the same cleanup before storing.
#[component]
pub fn NewSocialDialog(
    on_create: EventHandler<(String, String)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut accounts = use_signal(|| Vec::<SocialAccountInfo>::new());
    let mut selected = use_signal(|| String::new());
    let mut handle = use_signal(|| String::new());

    // Load the provider catalog on mount. peek keeps the resource from
    // depending on the selection and re-fetching on every change.
    let _ = use_resource(move || async move {
        if let Ok(list) = api::list_social_accounts(1, 50).await {
            if selected.peek().is_empty() {
                if let Some(first) = list.first() {
                    selected.set(first.id.clone());
                }
            }
            accounts.set(list);
        }
    });

    let current = accounts().iter().find(|a| a.id == selected()).cloned();
    let kind = current
        .as_ref()
        .map(|a| ProviderKind::from_label(&a.name))
        .unwrap_or(ProviderKind::Other);

    let placeholder = match kind {
        ProviderKind::WhatsApp => "(11) 9 8765-4321",
        ProviderKind::Email => "you@example.com",
        ProviderKind::LinkedIn => "your-profile",
        ProviderKind::Other => "@handle",
    };

    let preview = current
        .as_ref()
        .map(|a| {
            let clean = sanitize_handle(&handle(), kind);
            if clean.is_empty() {
                String::new()
            } else {
                format!("{}{}", a.base_url, clean)
            }
        })
        .unwrap_or_default();

    let handle_submit = move |_| {
        let account_id = selected();
        if account_id.is_empty() {
            return;
        }
        if sanitize_handle(&handle(), kind).is_empty() {
            return;
        }
        on_create.call((account_id, handle()));
    };

    rsx! {
        div {
            class: "dialog",
            h2 { class: "dialog-title", "New social profile" }

            div {
                class: "dialog-field",
                label { r#for: "new-social-provider", "Provider" }
                select {
                    id: "new-social-provider",
                    value: selected(),
                    onchange: move |evt| {
                        selected.set(evt.value());
                        handle.set(String::new());
                    },
                    for account in accounts() {
                        option {
                            key: "{account.id}",
                            value: "{account.id}",
                            "{account.name}"
                        }
                    }
                }
            }

            div {
                class: "dialog-field",
                label { r#for: "new-social-handle", "Profile" }
                input {
                    id: "new-social-handle",
                    r#type: "text",
                    placeholder: placeholder,
                    value: handle(),
                    oninput: move |evt: FormEvent| {
                        if kind == ProviderKind::WhatsApp {
                            handle.set(format_phone(&evt.value()));
                        } else {
                            handle.set(evt.value());
                        }
                    },
                }
            }

            if !preview.is_empty() {
                p { class: "dialog-preview", "{preview}" }
            }

            div {
                class: "dialog-actions",
                button {
                    class: "btn btn-primary",
                    onclick: handle_submit,
                    "Add profile"
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
