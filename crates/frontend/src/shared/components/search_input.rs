use leptos::prelude::*;

use crate::shared::icons::icon;

/// Free-text search box with a clear affordance. Filtering is local and
/// synchronous, so every keystroke goes straight to `on_change`.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,

    on_change: Callback<String>,

    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar en la tabla...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    type="button"
                    class="search-input__clear"
                    title="Limpiar"
                    on:click=move |_| on_change.run(String::new())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
