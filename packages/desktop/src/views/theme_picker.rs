use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn ThemePicker(user_id: String) -> Element {
    let nav = use_navigator();

    let back_id = user_id.clone();
    rsx! {
        ui::views::ThemePickerView {
            user_id,
            on_done: move |_| {
                nav.replace(Route::Customize { user_id: back_id.clone() });
            },
        }
    }
}
