use std::sync::Arc;

use contracts::domain::areas::aggregate::{Area, AreaId};
use contracts::domain::common::RecordId;
use contracts::domain::stocks::aggregate::{StockItem, StockItemInsert, StockItemUpdate};
use contracts::shared::forms::{
    ref_id_of, text_of, FieldKind, FieldSpec, FieldValue, FormDraft, ReferenceKind,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use crate::domain::areas;
use crate::shared::components::confirm::confirm_delete;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::form_modal::{open_form_modal, SubmitHandler};
use crate::shared::export::{self, Formatters};
use crate::shared::list_core::{cell_text, row_from_value, Column, Row};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;

fn columns() -> Vec<Column> {
    vec![
        Column::new("product", "Producto"),
        Column::new("input_quantity", "Cantidad"),
        Column::new("area", "Área"),
        Column::new("created_at", "Fecha de Creación"),
    ]
}

fn field_specs() -> Vec<FieldSpec> {
    vec![
        FieldSpec::required(
            "product",
            "Producto",
            FieldKind::Reference(ReferenceKind::Product),
        ),
        FieldSpec::required("input_quantity", "Cantidad", FieldKind::Number),
        FieldSpec::required(
            "area",
            "Área",
            FieldKind::CreatableReference(ReferenceKind::Area),
        ),
    ]
}

fn export_formatters() -> Formatters {
    let mut formatters = Formatters::new();
    formatters.insert(
        "created_at",
        export::date_formatter as fn(&serde_json::Value) -> String,
    );
    formatters
}

// Movement rows store the product *name*; only the area is a foreign key.
fn payload_from(draft: &FormDraft) -> Result<(String, i32, AreaId), String> {
    let quantity = text_of(draft, "input_quantity")
        .parse::<i32>()
        .map_err(|_| "Cantidad inválida".to_string())?;
    let area_id = ref_id_of(draft, "area")
        .ok_or_else(|| "Seleccione un área de la lista".to_string())?;
    Ok((
        text_of(draft, "product"),
        quantity,
        AreaId::from_string(&area_id)?,
    ))
}

#[component]
pub fn InventorySection() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (stock, set_stock) = signal(Vec::<StockItem>::new());
    let (areas_list, set_areas) = signal(Vec::<Area>::new());

    let load = move || {
        spawn_local(async move {
            match api::fetch_stock().await {
                Ok(list) => {
                    let _ = set_stock.try_set(list);
                }
                Err(e) => {
                    log::error!("inventario: {}", e);
                    let _ = set_stock.try_set(Vec::new());
                    toasts.error(format!("No se pudo cargar el inventario: {}", e));
                }
            }
        });
        spawn_local(async move {
            match areas::api::fetch_areas().await {
                Ok(list) => {
                    let _ = set_areas.try_set(list);
                }
                Err(e) => log::error!("áreas: {}", e),
            }
        });
    };
    load();

    let refetch = move || async move {
        match api::fetch_stock().await {
            Ok(fresh) => {
                let _ = set_stock.try_set(fresh);
            }
            Err(e) => log::error!("inventario: {}", e),
        }
    };

    let rows = Memo::new(move |_| {
        let areas_list = areas_list.get();
        stock
            .get()
            .into_iter()
            .map(|item| {
                let area = match item.area_id {
                    None => "Sin área asignada".to_string(),
                    Some(id) => areas_list
                        .iter()
                        .find(|a| a.id == id)
                        .map(|a| a.name.clone())
                        .unwrap_or_else(|| "Área no encontrada".to_string()),
                };
                row_from_value(serde_json::json!({
                    "id": item.id.as_string(),
                    "product": item.product,
                    "input_quantity": item.input_quantity,
                    "area": area,
                    "created_at": item.lifecycle.created_at.format("%Y-%m-%d").to_string(),
                }))
            })
            .collect::<Vec<Row>>()
    });

    let handle_add = Callback::new(move |_| {
        let submit: SubmitHandler = Arc::new(move |draft: FormDraft| {
            Box::pin(async move {
                let (product, quantity, area_id) = payload_from(&draft)?;
                api::add_stock_item(StockItemInsert::new(product, quantity, area_id)).await?;
                toasts.success("Item agregado al inventario");
                refetch().await;
                Ok(())
            })
        });
        open_form_modal(
            modal_stack,
            "Agregar Item al Inventario",
            field_specs(),
            FormDraft::new(),
            submit,
        );
    });

    let handle_edit = Callback::new(move |row: Row| {
        let id = cell_text(&row, "id");
        let Some(item) = stock
            .get_untracked()
            .into_iter()
            .find(|s| s.id.as_string() == id)
        else {
            return;
        };

        let mut initial = FormDraft::new();
        initial.insert("product".into(), FieldValue::text(item.product.clone()));
        initial.insert(
            "input_quantity".into(),
            FieldValue::text(item.input_quantity.to_string()),
        );
        if let Some(area_id) = item.area_id {
            let name = areas_list
                .get_untracked()
                .iter()
                .find(|a| a.id == area_id)
                .map(|a| a.name.clone())
                .unwrap_or_default();
            initial.insert(
                "area".into(),
                FieldValue::reference(area_id.as_string(), name),
            );
        }

        let record_id = item.id.as_string();
        let submit: SubmitHandler = Arc::new(move |draft: FormDraft| {
            let record_id = record_id.clone();
            Box::pin(async move {
                let (product, quantity, area_id) = payload_from(&draft)?;
                api::update_stock_item(
                    &record_id,
                    StockItemUpdate::new(product, quantity, area_id),
                )
                .await?;
                toasts.success("Item actualizado correctamente");
                refetch().await;
                Ok(())
            })
        });
        open_form_modal(
            modal_stack,
            "Editar Item del Inventario",
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
                match api::delete_stock_item(&id).await {
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
            title="Gestión de Inventario"
            columns=columns()
            rows=rows
            on_add=handle_add
            on_edit=handle_edit
            on_delete=handle_delete
            enable_date_filter=true
            enable_export=true
            export_formatters=export_formatters()
        />
    }
}
