use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Customize(user_id: String) -> Element {
    let nav = use_navigator();
    let auth = ui::use_auth();

    // The editor is owner-only; anonymous visitors go to login
    let state = auth();
    if !state.loading && state.user.is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        ui::views::CustomizeView {
            user_id,
            on_navigate_theme: move |user_id: String| {
                nav.push(Route::ThemePicker { user_id });
            },
            on_navigate_bio: move |username: String| {
                nav.push(Route::Bio { username });
            },
        }
    }
}
