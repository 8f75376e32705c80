use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Activate, Bio, Claim, Customize, Login, Register, ThemePicker};

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
    #[route("/activate/:user_id?:token")]
    Activate { user_id: String, token: String },
    #[route("/customize/:user_id")]
    Customize { user_id: String },
    #[route("/theme/:user_id")]
    ThemePicker { user_id: String },
    // Claimed usernames live at the root, so this one has to come last.
    #[route("/:username")]
    Bio { username: String },
}

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Create session store and its backing table
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to migrate session store");

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    // Build the Dioxus app and put the session layer in front of it
    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::StatusFeed::default()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::LINKLEAF_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` by auth state: the editor for a signed-in user, the claim
/// landing page for everyone else.
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if !auth().loading {
        match auth().user {
            Some(user) => {
                nav.replace(Route::Customize { user_id: user.id });
            }
            None => {
                nav.replace(Route::Claim {});
            }
        }
    }

    rsx! {}
}
