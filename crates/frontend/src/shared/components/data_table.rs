//! Generic list view: title + columns + rows in, filtered/paginated table
//! out, with add/edit/delete callbacks as the only exits.
//!
//! Pipeline order is fixed: raw rows -> (date filter XOR text search) ->
//! pagination -> render. Per view the two filter modes are mutually
//! exclusive; a view either searches by text or filters by creation date.

use chrono::Local;
use leptos::prelude::*;

use crate::shared::components::date_range_filter::DateRangeFilter;
use crate::shared::components::export_preview::ExportPreview;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::export::{self, Formatters};
use crate::shared::icons::icon;
use crate::shared::list_core::date_filter::{filter_by_date, DateRange};
use crate::shared::list_core::list_state::ListState;
use crate::shared::list_core::search::filter_by_query;
use crate::shared::list_core::{cell_text, Column, Row};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;

const ROWS_PER_PAGE: usize = 10;

/// Attribute the date filter reads; display rows carry it in ISO form.
const DATE_KEY: &str = "created_at";

#[component]
pub fn DataTable(
    title: &'static str,

    columns: Vec<Column>,

    #[prop(into)] rows: Signal<Vec<Row>>,

    on_add: Callback<()>,

    on_edit: Callback<Row>,

    on_delete: Callback<Row>,

    /// Filter by creation date instead of free text.
    #[prop(optional)]
    enable_date_filter: bool,

    /// Offer the printable document export.
    #[prop(optional)]
    enable_export: bool,

    /// Per-column export formatters.
    #[prop(optional)]
    export_formatters: Formatters,
) -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let columns = StoredValue::new(columns);
    let formatters = StoredValue::new(export_formatters);

    let state = RwSignal::new(ListState::new(ROWS_PER_PAGE));

    let filtered = Memo::new(move |_| {
        let data = rows.get();
        let s = state.get();
        if enable_date_filter {
            filter_by_date(data, DATE_KEY, s.range)
        } else {
            filter_by_query(data, &s.query)
        }
    });

    let total_items = Memo::new(move |_| filtered.get().len());
    let total_pages = Memo::new(move |_| state.get().page.total_pages(total_items.get()));
    let page_rows = Memo::new(move |_| {
        let all = filtered.get();
        state.get().page.slice(&all).to_vec()
    });

    // ListState resets the page on every filter edit.
    let update_search = Callback::new(move |query: String| {
        state.update(|s| s.set_query(query));
    });
    let update_range = Callback::new(move |range: DateRange| {
        state.update(|s| s.set_range(range));
    });
    let clear_range = Callback::new(move |_: ()| {
        state.update(|s| s.clear_range());
    });

    let go_previous = Callback::new(move |_: ()| state.update(|s| s.page.previous()));
    let go_next = Callback::new(move |_: ()| {
        let n = total_items.get_untracked();
        state.update(|s| s.page.next(n));
    });
    let go_page = Callback::new(move |page: usize| {
        let n = total_items.get_untracked();
        state.update(|s| s.page.go_to(page, n));
    });

    // Exports the filtered sequence, not just the visible page.
    let handle_export = move |_| {
        let data = filtered.get_untracked();
        let today = Local::now().date_naive();
        let html = export::render_document(
            title,
            &data,
            &columns.get_value(),
            &formatters.get_value(),
            today,
        );
        match export::create_document_url(&html) {
            Ok(url) => {
                let filename = export::filename_for(title, today);
                modal_stack.push_with_frame(
                    Some("max-width: min(900px, 95vw); width: min(900px, 95vw);".to_string()),
                    move |handle| {
                        let close = Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        });
                        view! {
                            <ExportPreview url=url.clone() filename=filename.clone() on_close=close />
                        }
                        .into_any()
                    },
                );
            }
            Err(e) => toasts.error(e),
        }
    };

    // Three distinct empty-state causes: no data, no text matches,
    // nothing inside the date range.
    let empty_state = move || {
        let s = state.get();
        if enable_date_filter && s.range.is_active() {
            (
                "No se encontraron resultados para el rango de fechas seleccionado",
                "Intenta con un rango de fechas diferente",
            )
        } else if !s.query.is_empty() {
            (
                "No se encontraron resultados",
                "Intenta con otros términos de búsqueda",
            )
        } else {
            (
                "No hay datos disponibles",
                "Comienza agregando tu primer registro",
            )
        }
    };

    view! {
        <div class="data-table">
            <div class="data-table__header">
                <div>
                    <h2 class="data-table__title">{title}</h2>
                    <p class="data-table__subtitle">"Gestiona y organiza tus datos"</p>
                </div>
                <div class="data-table__actions">
                    <Show when=move || enable_export>
                        <button
                            class="button button--danger"
                            on:click=handle_export
                            disabled=move || total_items.get() == 0
                        >
                            {icon("file-text")}
                            "Exportar PDF"
                        </button>
                    </Show>
                    <button class="button button--primary" on:click=move |_| on_add.run(())>
                        {icon("plus")}
                        "Agregar Nuevo"
                    </button>
                </div>
            </div>

            <div class="data-table__filter">
                {if enable_date_filter {
                    view! {
                        <DateRangeFilter
                            range=Signal::derive(move || state.get().range)
                            on_change=update_range
                            on_clear=clear_range
                        />
                    }
                    .into_any()
                } else {
                    view! {
                        <SearchInput
                            value=Signal::derive(move || state.get().query.clone())
                            on_change=update_search
                        />
                    }
                    .into_any()
                }}
            </div>

            <div class="data-table__scroll">
                <table class="table">
                    <thead class="table__head">
                        <tr>
                            {columns
                                .get_value()
                                .into_iter()
                                .map(|column| view! { <th class="table__header-cell">{column.label}</th> })
                                .collect_view()}
                            <th class="table__header-cell table__header-cell--right">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            page_rows
                                .get()
                                .into_iter()
                                .map(|row| {
                                    let edit_row = row.clone();
                                    let delete_row = row.clone();
                                    view! {
                                        <tr class="table__row">
                                            {columns
                                                .get_value()
                                                .into_iter()
                                                .map(|column| {
                                                    view! {
                                                        <td class="table__cell">{cell_text(&row, column.key)}</td>
                                                    }
                                                })
                                                .collect_view()}
                                            <td class="table__cell table__cell--right">
                                                <button
                                                    class="table__action table__action--edit"
                                                    title="Editar"
                                                    on:click=move |_| on_edit.run(edit_row.clone())
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="table__action table__action--delete"
                                                    title="Eliminar"
                                                    on:click=move |_| on_delete.run(delete_row.clone())
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || total_items.get() == 0>
                <div class="data-table__empty">
                    <p class="data-table__empty-title">{move || empty_state().0}</p>
                    <p class="data-table__empty-hint">{move || empty_state().1}</p>
                </div>
            </Show>

            <PaginationControls
                current_page=Signal::derive(move || state.get().page.page)
                total_pages=total_pages
                total_items=total_items
                on_previous=go_previous
                on_next=go_next
                on_page=go_page
            />
        </div>
    }
}
