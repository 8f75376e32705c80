use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let auth = ui::use_auth();

    // Already signed in: straight to the editor
    let state = auth();
    if !state.loading {
        if let Some(user) = state.user {
            nav.replace(Route::Customize { user_id: user.id });
            return rsx! {};
        }
    }

    rsx! {
        ui::views::LoginView {
            on_logged_in: move |user: api::UserInfo| {
                nav.replace(Route::Customize { user_id: user.id });
            },
            on_navigate_claim: move |_| {
                nav.push(Route::Claim {});
            },
        }
    }
}
