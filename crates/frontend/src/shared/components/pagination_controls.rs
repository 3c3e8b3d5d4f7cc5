use leptos::prelude::*;

use crate::shared::icons::icon;

/// Pagination controls for the list views. Pages are 1-based.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,

    #[prop(into)] total_pages: Signal<usize>,

    /// Item count of the filtered sequence being paginated.
    #[prop(into)] total_items: Signal<usize>,

    on_previous: Callback<()>,

    on_next: Callback<()>,

    on_page: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <span class="pagination__info">
                {move || {
                    let n = total_items.get();
                    if n == 1 {
                        "1 registro".to_string()
                    } else {
                        format!("{} registros", n)
                    }
                }}
            </span>
            <div class="pagination__controls">
                <button
                    class="pagination__btn"
                    on:click=move |_| on_previous.run(())
                    disabled=move || current_page.get() <= 1
                    title="Página anterior"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    (1..=total_pages.get())
                        .map(|page| {
                            view! {
                                <button
                                    class="pagination__btn"
                                    class:pagination__btn--active=move || current_page.get() == page
                                    on:click=move |_| on_page.run(page)
                                >
                                    {page.to_string()}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination__btn"
                    on:click=move |_| on_next.run(())
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Página siguiente"
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </div>
    }
}
