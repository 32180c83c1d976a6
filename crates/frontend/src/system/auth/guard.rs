use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;
use super::session::SIGN_IN_PATH;

/// Renders `children` for a signed-in user, otherwise redirects to sign-in
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated())
            fallback=|| view! { <Redirect path=SIGN_IN_PATH /> }
        >
            {children()}
        </Show>
    }
}
