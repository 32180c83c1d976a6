use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;

use crate::routes::paths;
use crate::system::auth::context::{do_login, use_auth, AuthState};

#[component]
pub fn SignInPage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    view! {
        <Show
            when=move || !auth_state.with(|s| s.is_authenticated())
            fallback=|| view! { <Redirect path=paths::HOME /> }
        >
            <SignInForm set_auth_state=set_auth_state />
        </Show>
    }
}

/// On success the auth state flips and [`SignInPage`] redirects to the dashboard.
#[component]
fn SignInForm(set_auth_state: WriteSignal<AuthState>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match do_login(email_val, password_val, set_auth_state).await {
                Ok(()) => {
                    set_is_loading.try_set(false);
                }
                Err(e) => {
                    set_error_message.try_set(Some(e));
                    set_is_loading.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container" id="sign_in--system" data-page-category="system">
            <div class="login-box">
                <h1>"Master Data Dashboard"</h1>
                <h2>"Sign In"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
