use leptos::prelude::*;

use super::Section;
use crate::shared::icons::icon;

/// Collapsible navigation between sections.
#[component]
pub fn Sidebar(active: RwSignal<Section>) -> impl IntoView {
    let (collapsed, set_collapsed) = signal(false);

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || collapsed.get()>
            <div class="sidebar__top">
                <Show when=move || !collapsed.get()>
                    <span class="sidebar__brand">"Comedor Admin"</span>
                </Show>
                <button
                    class="sidebar__toggle"
                    title="Contraer menú"
                    on:click=move |_| set_collapsed.update(|c| *c = !*c)
                >
                    {move || if collapsed.get() { icon("chevron-right") } else { icon("chevron-left") }}
                </button>
            </div>
            <nav class="sidebar__nav">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                class="sidebar__item"
                                class:sidebar__item--active=move || active.get() == section
                                title=section.label()
                                on:click=move |_| active.set(section)
                            >
                                {icon(section.icon_name())}
                                <Show when=move || !collapsed.get()>
                                    <span class="sidebar__label">{section.label()}</span>
                                </Show>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
