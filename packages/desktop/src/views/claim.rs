use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Claim() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::ClaimView {
            on_claimed: move |username: String| {
                nav.push(Route::Register { username });
            },
            on_navigate_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
