use leptos::prelude::*;

use super::context::use_auth;

/// Renders its children only for an authenticated session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <div class="auth-fallback">"Sesión no iniciada."</div> }
        >
            {children()}
        </Show>
    }
}
