use contracts::system::auth::CachedUser;
use leptos::prelude::*;

use super::{api, session, storage};
use crate::shared::api_client::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Authenticated,
    Unauthenticated,
}

/// Client view of the session.
///
/// Mirrors the cached user in local storage. The cookie stays the only
/// authority: any 401 clears the cache and forces a new sign-in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<CachedUser>,
}

impl AuthState {
    pub fn from_cache() -> Self {
        Self {
            user: storage::get_user(),
        }
    }

    pub fn status(&self) -> SessionStatus {
        if self.user.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Unauthenticated
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::from_cache());

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

/// User-facing message for a failed sign-in
pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized => "Invalid credentials".to_string(),
        ApiError::NetworkUnavailable(_) => "Cannot reach the server. Try again later.".to_string(),
        _ => "Sign-in failed. Please try again.".to_string(),
    }
}

/// Signs in and caches the user. Must run where [`use_auth`] is available;
/// pass the setter in from the component.
pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::login(email.clone(), password)
        .await
        .map_err(|e| login_error_message(&e))?;

    let user = CachedUser {
        user_id: response.user_id,
        email,
    };
    storage::save_user(&user);
    session::interceptor().reset();
    log::info!("Signed in as {}", user.email);

    set_auth_state.set(AuthState { user: Some(user) });
    Ok(())
}

/// Ends the session. Local state is cleared even when the server call fails.
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Err(e) = api::logout().await {
        log::warn!("Logout request failed: {}", e);
    }
    storage::clear_user();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_follows_cached_user() {
        assert_eq!(AuthState::default().status(), SessionStatus::Unauthenticated);
        let state = AuthState {
            user: Some(CachedUser {
                user_id: Some("1".into()),
                email: "ops@example.com".into(),
            }),
        };
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_login_error_messages() {
        assert_eq!(login_error_message(&ApiError::Unauthorized), "Invalid credentials");
        assert_eq!(
            login_error_message(&ApiError::Http { status: 500 }),
            "Sign-in failed. Please try again."
        );
    }
}
