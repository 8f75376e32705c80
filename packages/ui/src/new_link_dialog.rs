use dioxus::prelude::*;

/// Inline form for adding a free-form link to the bio.
#[component]
pub fn NewLinkDialog(
    on_create: EventHandler<(String, String)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut name = use_signal(|| String::new());
    let mut url = use_signal(|| String::new());

    let handle_submit = move |_| {
        let n = name().trim().to_string();
        let mut u = url().trim().to_string();
        if n.is_empty() || u.is_empty() {
            return;
        }
        if !u.starts_with("http://") && !u.starts_with("https://") && !u.starts_with("mailto:") {
            u = format!("https://{u}");
        }
        on_create.call((n, u));
    };

    rsx! {
        div {
            class: "dialog",
            h2 { class: "dialog-title", "New link" }

            div {
                class: "dialog-field",
                label { r#for: "new-link-name", "Name" }
                input {
                    id: "new-link-name",
                    r#type: "text",
                    placeholder: "My portfolio",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
            }

            div {
                class: "dialog-field",
                label { r#for: "new-link-url", "URL" }
                input {
                    id: "new-link-url",
                    r#type: "text",
                    placeholder: "https://example.com",
                    value: url(),
                    oninput: move |evt: FormEvent| url.set(evt.value()),
                }
            }

            div {
                class: "dialog-actions",
                button {
                    class: "btn btn-primary",
                    onclick: handle_submit,
                    "Add link"
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
