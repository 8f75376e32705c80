//! Session state shared by every view.
//!
//! [`AuthProvider`] keeps a [`Signal<AuthState>`] in context: one session
//! fetch on mount, then a 30-second poll. The poll doubles as the
//! connectivity probe behind the save indicator, and it picks up account
//! status changes, so activating the account in another tab clears the
//! editor's pending banner without a reload.

use api::UserInfo;
use dioxus::prelude::*;

/// Session state for the whole app.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// True until the first session fetch resolves.
    pub loading: bool,
    /// Whether the server answered the last session check.
    pub online: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            online: false,
        }
    }
}

/// Get the current session state.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Fetch the session and fold the answer into the state. Writes only when
/// something changed, so subscribers are not re-rendered every poll.
async fn refresh(mut auth_state: Signal<AuthState>) {
    match api::get_current_user().await {
        Ok(user) => {
            let online = user.is_some();
            let current = auth_state();
            if current.loading || current.user != user || current.online != online {
                auth_state.set(AuthState {
                    user,
                    loading: false,
                    online,
                });
            }
        }
        Err(_) => {
            let current = auth_state();
            if current.loading || current.online {
                auth_state.set(AuthState {
                    loading: false,
                    online: false,
                    ..current
                });
            }
        }
    }
}

/// Provider component that owns the session state.
/// Wrap the router with this so every view can call [`use_auth`].
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);

    // Session fetch on mount
    let _ = use_resource(move || async move { refresh(auth_state).await });

    // Poll so the save indicator notices lost connectivity
    use_effect(move || {
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(30)).await;

                // The mount fetch has not resolved yet
                if auth_state().loading {
                    continue;
                }
                refresh(auth_state).await;
            }
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button that ends the session.
///
/// No redirect here: the owner-only views watch [`AuthState::user`] and
/// send the visitor to login on their own once it clears.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| async move {
        match api::logout().await {
            Ok(()) => {
                // A logout that went through is also proof the server is up
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                    online: true,
                });
            }
            Err(e) => {
                tracing::warn!("Logout failed: {}", e);
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
