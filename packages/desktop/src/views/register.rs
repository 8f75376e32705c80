use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Register(username: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::RegisterView {
            username,
            on_registered: move |user: api::UserInfo| {
                nav.replace(Route::Customize { user_id: user.id });
            },
            on_navigate_claim: move |_| {
                nav.replace(Route::Claim {});
            },
        }
    }
}
