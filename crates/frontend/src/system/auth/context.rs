use contracts::system::auth::SessionUser;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<SessionUser>,
    /// True while the persisted session is still being validated; routing
    /// shows neither surface until this settles.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            access_token: None,
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Auth context provider. Restores the persisted session on mount.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    Effect::new(move |_| {
        spawn_local(async move {
            let settled = match storage::get_access_token() {
                Some(access_token) => match api::get_user(&access_token).await {
                    Ok(user) => AuthState {
                        access_token: Some(access_token),
                        user: Some(user),
                        loading: false,
                    },
                    Err(_) => {
                        // Stale token: drop it and fall through to login.
                        storage::clear_token();
                        AuthState {
                            access_token: None,
                            user: None,
                            loading: false,
                        }
                    }
                },
                None => AuthState {
                    access_token: None,
                    user: None,
                    loading: false,
                },
            };
            let _ = set_auth_state.try_set(settled);
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state.
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Sign out: revoke remotely (best effort), then clear local state.
pub async fn do_sign_out(set_auth_state: WriteSignal<AuthState>) {
    if let Some(token) = storage::get_access_token() {
        if let Err(e) = api::sign_out(&token).await {
            log::error!("sign out: {}", e);
        }
    }
    storage::clear_token();
    let _ = set_auth_state.try_set(AuthState {
        access_token: None,
        user: None,
        loading: false,
    });
}
