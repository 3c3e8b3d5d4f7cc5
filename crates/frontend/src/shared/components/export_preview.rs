use leptos::prelude::*;

use crate::shared::export;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

/// Preview of an exported document with download and print actions.
/// The blob URL is revoked when the preview goes away.
#[component]
pub fn ExportPreview(url: String, filename: String, on_close: Callback<()>) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let cleanup_url = url.clone();
    on_cleanup(move || export::revoke_document_url(&cleanup_url));

    let download_url = url.clone();
    let handle_download = move |_| {
        if let Err(e) = export::download_document(&download_url, &filename) {
            toasts.error(e);
        }
    };

    let print_url = url.clone();
    let handle_print = move |_| {
        if let Err(e) = export::print_document(&print_url) {
            toasts.error(e);
        }
    };

    view! {
        <div class="export-preview">
            <div class="export-preview__header">
                <h3>"Vista previa del documento"</h3>
                <button type="button" class="button button--ghost" title="Cerrar" on:click=move |_| on_close.run(())>
                    {icon("x")}
                </button>
            </div>
            <iframe class="export-preview__frame" src=url.clone() title="Vista previa"></iframe>
            <div class="export-preview__actions">
                <button type="button" class="button button--secondary" on:click=handle_print>
                    "Imprimir"
                </button>
                <button type="button" class="button button--primary" on:click=handle_download>
                    {icon("file-text")}
                    "Descargar"
                </button>
            </div>
        </div>
    }
}
