use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Bio(username: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::BioView {
            username,
            on_claim: move |_| {
                nav.push(Route::Claim {});
            },
        }
    }
}
