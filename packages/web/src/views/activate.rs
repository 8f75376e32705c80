use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Activate(user_id: String, token: String) -> Element {
    let nav = use_navigator();
    let auth = ui::use_auth();

    rsx! {
        ui::views::ActivateView {
            user_id,
            token,
            on_continue: move |_| {
                match auth().user {
                    Some(user) => {
                        nav.replace(Route::Customize { user_id: user.id });
                    }
                    None => {
                        nav.replace(Route::Login {});
                    }
                }
            },
        }
    }
}
