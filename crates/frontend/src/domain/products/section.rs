use std::sync::Arc;

use contracts::domain::common::RecordId;
use contracts::domain::products::aggregate::{Product, ProductInsert, ProductUpdate};
use contracts::shared::forms::{text_of, FieldKind, FieldSpec, FieldValue, FormDraft};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use crate::shared::components::confirm::confirm_delete;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::form_modal::{open_form_modal, SubmitHandler};
use crate::shared::list_core::{cell_text, row_from_value, Column, Row};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Nombre"),
        Column::new("description", "Descripción"),
        Column::new("created_at", "Fecha de Creación"),
    ]
}

fn field_specs() -> Vec<FieldSpec> {
    vec![
        FieldSpec::required("name", "Nombre", FieldKind::Text),
        FieldSpec::optional("description", "Descripción", FieldKind::Text),
    ]
}

fn payload_from(draft: &FormDraft) -> (String, Option<String>) {
    let description = Some(text_of(draft, "description")).filter(|d| !d.is_empty());
    (text_of(draft, "name"), description)
}

#[component]
pub fn ProductsSection() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (products, set_products) = signal(Vec::<Product>::new());

    let load = move || {
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(list) => {
                    let _ = set_products.try_set(list);
                }
                Err(e) => {
                    log::error!("productos: {}", e);
                    let _ = set_products.try_set(Vec::new());
                    toasts.error(format!("No se pudieron cargar los productos: {}", e));
                }
            }
        });
    };
    load();

    let refetch = move || async move {
        match api::fetch_products().await {
            Ok(fresh) => {
                let _ = set_products.try_set(fresh);
            }
            Err(e) => log::error!("productos: {}", e),
        }
    };

    let rows = Memo::new(move |_| {
        products
            .get()
            .into_iter()
            .map(|product| {
                row_from_value(serde_json::json!({
                    "id": product.id.as_string(),
                    "name": product.name,
                    "description": product.description.unwrap_or_else(|| "Sin descripción".to_string()),
                    "created_at": product.lifecycle.created_at.format("%Y-%m-%d").to_string(),
                }))
            })
            .collect::<Vec<Row>>()
    });

    let handle_add = Callback::new(move |_| {
        let submit: SubmitHandler = Arc::new(move |draft: FormDraft| {
            Box::pin(async move {
                let (name, description) = payload_from(&draft);
                api::add_product(ProductInsert::new(name, description)).await?;
                toasts.success("Producto agregado correctamente");
                refetch().await;
                Ok(())
            })
        });
        open_form_modal(
            modal_stack,
            "Agregar Producto",
            field_specs(),
            FormDraft::new(),
            submit,
        );
    });

    let handle_edit = Callback::new(move |row: Row| {
        let id = cell_text(&row, "id");
        let Some(product) = products
            .get_untracked()
            .into_iter()
            .find(|p| p.id.as_string() == id)
        else {
            return;
        };

        let mut initial = FormDraft::new();
        initial.insert("name".into(), FieldValue::text(product.name.clone()));
        initial.insert(
            "description".into(),
            FieldValue::text(product.description.clone().unwrap_or_default()),
        );

        let record_id = product.id.as_string();
        let submit: SubmitHandler = Arc::new(move |draft: FormDraft| {
            let record_id = record_id.clone();
            Box::pin(async move {
                let (name, description) = payload_from(&draft);
                api::update_product(&record_id, ProductUpdate::new(name, description)).await?;
                toasts.success("Producto actualizado correctamente");
                refetch().await;
                Ok(())
            })
        });
        open_form_modal(
            modal_stack,
            "Editar Producto",
            field_specs(),
            initial,
            submit,
        );
    });

    let handle_delete = Callback::new(move |row: Row| {
        let id = cell_text(&row, "id");
        confirm_delete(modal_stack, move || {
            let id = id.clone();
            spawn_local(async move {
                match api::delete_product(&id).await {
                    Ok(()) => {
                        toasts.success("El registro ha sido eliminado");
                        refetch().await;
                    }
                    Err(e) => toasts.error(format!("No se pudo eliminar: {}", e)),
                }
            });
        });
    });

    view! {
        <DataTable
            title="Gestión de Productos"
            columns=columns()
            rows=rows
            on_add=handle_add
            on_edit=handle_edit
            on_delete=handle_delete
        />
    }
}
