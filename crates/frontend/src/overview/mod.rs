use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::{areas, services, stocks, users};

/// Landing panel: live active-record counts per collection.
#[component]
pub fn OverviewSection() -> impl IntoView {
    let (user_count, set_user_count) = signal(None::<usize>);
    let (service_count, set_service_count) = signal(None::<usize>);
    let (stock_count, set_stock_count) = signal(None::<usize>);
    let (area_count, set_area_count) = signal(None::<usize>);

    spawn_local(async move {
        if let Ok(list) = users::api::fetch_users().await {
            let _ = set_user_count.try_set(Some(list.len()));
        }
    });
    spawn_local(async move {
        if let Ok(list) = services::api::fetch_services().await {
            let _ = set_service_count.try_set(Some(list.len()));
        }
    });
    spawn_local(async move {
        if let Ok(list) = stocks::api::fetch_stock().await {
            let _ = set_stock_count.try_set(Some(list.len()));
        }
    });
    spawn_local(async move {
        if let Ok(list) = areas::api::fetch_areas().await {
            let _ = set_area_count.try_set(Some(list.len()));
        }
    });

    let card = |label: &'static str, hint: &'static str, count: ReadSignal<Option<usize>>| {
        view! {
            <div class="stat-card">
                <p class="stat-card__label">{label}</p>
                <p class="stat-card__value">
                    {move || count.get().map(|n| n.to_string()).unwrap_or_else(|| "—".to_string())}
                </p>
                <p class="stat-card__hint">{hint}</p>
            </div>
        }
    };

    view! {
        <div class="overview">
            <div class="overview__header">
                <h1>"Panel de Control"</h1>
                <p>"Gestiona y supervisa el comedor"</p>
            </div>
            <div class="overview__cards">
                {card("Usuarios Activos", "Registrados en el comedor", user_count)}
                {card("Servicios", "Servicios registrados", service_count)}
                {card("Inventario", "Items disponibles", stock_count)}
                {card("Áreas", "Activas", area_count)}
            </div>
        </div>
    }
}
