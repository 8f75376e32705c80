use dioxus::prelude::*;
use views::{Bio, Claim, Customize, Login, Register, ThemePicker};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/start")]
    Claim {},
    #[route("/register/:username")]
    Register { username: String },
    #[route("/customize/:user_id")]
    Customize { user_id: String },
    #[route("/theme/:user_id")]
    ThemePicker { user_id: String },
    #[route("/:username")]
    Bio { username: String },
}

fn main() {
    dioxus::fullstack::set_server_url("https://linkleaf.bio");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::StatusFeed::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::LINKLEAF_CSS }

        ui::AuthProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    // Redirect based on auth state
    if !auth().loading {
        match auth().user {
            Some(user) => {
                nav.replace(Route::Customize { user_id: user.id });
            }
            None => {
                nav.replace(Route::Login {});
            }
        }
    }

    rsx! {}
}
