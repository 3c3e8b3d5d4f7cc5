use crate::shared::modal_stack::ModalStackService;
use leptos::prelude::*;

/// Push a yes/no confirmation onto the modal stack. `on_confirm` runs only
/// on explicit confirmation; dismissing the dialog does nothing.
pub fn confirm_delete(
    modal_stack: ModalStackService,
    on_confirm: impl Fn() + Clone + Send + Sync + 'static,
) {
    modal_stack.push(move |handle| {
        let on_confirm = on_confirm.clone();
        let cancel_handle = handle.clone();
        let confirm_handle = handle.clone();
        view! {
            <div class="confirm-dialog">
                <h3 class="confirm-dialog__title">"¿Estás seguro?"</h3>
                <p class="confirm-dialog__text">"Esta acción no se puede deshacer"</p>
                <div class="confirm-dialog__actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| cancel_handle.close()
                    >
                        "Cancelar"
                    </button>
                    <button
                        type="button"
                        class="button button--danger"
                        on:click=move |_| {
                            confirm_handle.close();
                            on_confirm();
                        }
                    >
                        "Sí, eliminar"
                    </button>
                </div>
            </div>
        }
        .into_any()
    });
}
