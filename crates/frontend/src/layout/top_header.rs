use leptos::prelude::*;
use leptos::task::spawn_local;

use super::LayoutContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<LayoutContext>().expect("LayoutContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    let user_email = move || {
        auth_state.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default())
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("layers")}
                </button>
                <span class="top-header__title">"Master Data Dashboard"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__user">{user_email}</span>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
