use std::sync::Arc;

use contracts::domain::areas::aggregate::{Area, AreaUpdate};
use contracts::domain::common::RecordId;
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
    ]
}

fn field_specs() -> Vec<FieldSpec> {
    vec![
        FieldSpec::required("name", "Nombre", FieldKind::Text),
        FieldSpec::required("description", "Descripción", FieldKind::Text),
    ]
}

#[component]
pub fn AreasSection() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (areas_list, set_areas) = signal(Vec::<Area>::new());

    let load = move || {
        spawn_local(async move {
            match api::fetch_areas().await {
                Ok(list) => {
                    let _ = set_areas.try_set(list);
                }
                Err(e) => {
                    log::error!("áreas: {}", e);
                    let _ = set_areas.try_set(Vec::new());
                    toasts.error(format!("No se pudieron cargar las áreas: {}", e));
                }
            }
        });
    };
    load();

    let refetch = move || async move {
        match api::fetch_areas().await {
            Ok(fresh) => {
                let _ = set_areas.try_set(fresh);
            }
            Err(e) => log::error!("áreas: {}", e),
        }
    };

    let rows = Memo::new(move |_| {
        areas_list
            .get()
            .into_iter()
            .map(|area| {
                row_from_value(serde_json::json!({
                    "id": area.id.as_string(),
                    "name": area.name,
                    "description": area.description.unwrap_or_default(),
                }))
            })
            .collect::<Vec<Row>>()
    });

    let handle_add = Callback::new(move |_| {
        let submit: SubmitHandler = Arc::new(move |draft: FormDraft| {
            Box::pin(async move {
                let description = Some(text_of(&draft, "description")).filter(|d| !d.is_empty());
                api::add_area(text_of(&draft, "name"), description).await?;
                toasts.success("Área agregada correctamente");
                refetch().await;
                Ok(())
            })
        });
        open_form_modal(
            modal_stack,
            "Agregar Área",
            field_specs(),
            FormDraft::new(),
            submit,
        );
    });

    let handle_edit = Callback::new(move |row: Row| {
        let id = cell_text(&row, "id");
        let Some(area) = areas_list
            .get_untracked()
            .into_iter()
            .find(|a| a.id.as_string() == id)
        else {
            return;
        };

        let mut initial = FormDraft::new();
        initial.insert("name".into(), FieldValue::text(area.name.clone()));
        initial.insert(
            "description".into(),
            FieldValue::text(area.description.clone().unwrap_or_default()),
        );

        let record_id = area.id.as_string();
        let submit: SubmitHandler = Arc::new(move |draft: FormDraft| {
            let record_id = record_id.clone();
            Box::pin(async move {
                let description = Some(text_of(&draft, "description")).filter(|d| !d.is_empty());
                api::update_area(
                    &record_id,
                    AreaUpdate::new(text_of(&draft, "name"), description),
                )
                .await?;
                toasts.success("Área actualizada correctamente");
                refetch().await;
                Ok(())
            })
        });
        open_form_modal(modal_stack, "Editar Área", field_specs(), initial, submit);
    });

    let handle_delete = Callback::new(move |row: Row| {
        let id = cell_text(&row, "id");
        confirm_delete(modal_stack, move || {
            let id = id.clone();
            spawn_local(async move {
                match api::delete_area(&id).await {
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
            title="Gestión de Áreas"
            columns=columns()
            rows=rows
            on_add=handle_add
            on_edit=handle_edit
            on_delete=handle_delete
        />
    }
}
