use chrono::Local;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::date_utils::{spanish_long_date, spanish_weekday_date};
use crate::shared::icons::icon;
use crate::system::auth::context::{do_sign_out, use_auth};

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let session_now = Local::now();
    let session_date = spanish_weekday_date(session_now.date_naive());
    let session_time = session_now.format("%H:%M").to_string();

    let last_sign_in = move || {
        auth_state
            .get()
            .user
            .as_ref()
            .and_then(|u| u.last_sign_in_at)
            .map(|at| {
                let local = at.with_timezone(&Local);
                format!(
                    "Último acceso: {} a las {}",
                    spanish_long_date(local.date_naive()),
                    local.format("%H:%M")
                )
            })
    };

    let handle_sign_out = move |_| {
        spawn_local(async move {
            do_sign_out(set_auth_state).await;
        });
    };

    view! {
        <header class="header">
            <div class="header__session">
                <span class="header__date">{session_date} " · " {session_time}</span>
                {move || last_sign_in().map(|text| view! { <span class="header__last-sign-in">{text}</span> })}
            </div>
            <div class="header__user">
                {move || {
                    auth_state
                        .get()
                        .user
                        .as_ref()
                        .and_then(|u| u.email.clone())
                        .map(|email| view! { <span class="header__email">{email}</span> })
                }}
                <button class="button button--ghost" title="Cerrar sesión" on:click=handle_sign_out>
                    {icon("logout")}
                    "Salir"
                </button>
            </div>
        </header>
    }
}
