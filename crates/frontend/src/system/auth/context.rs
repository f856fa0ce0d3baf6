use contracts::system::auth::OperatorInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub operator: Option<OperatorInfo>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Try to restore the session from localStorage on mount: the stored token
    // is validated by fetching the current operator.
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                return;
            };
            match api::me().await {
                Ok(operator) => {
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        operator: Some(operator),
                    });
                }
                Err(err) => {
                    // Token no longer valid. A forced logout has already
                    // cleared it; clear it ourselves for the ordinary cases.
                    if err.should_display() {
                        storage::clear_token();
                    }
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Perform login and publish the session
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(username, password)
        .await
        .map_err(|e| e.message())?;

    storage::save_access_token(&response.access_token);
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        operator: Some(response.operator),
    });

    Ok(())
}

/// Revoke the session and clear local state
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    let _ = api::logout().await;
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}
