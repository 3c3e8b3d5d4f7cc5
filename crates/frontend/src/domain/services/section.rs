use std::sync::Arc;

use contracts::domain::areas::aggregate::{Area, AreaId};
use contracts::domain::common::RecordId;
use contracts::domain::services::aggregate::{Service, ServiceInsert, ServiceUpdate};
use contracts::domain::users::aggregate::{User, UserId};
use contracts::shared::forms::{
    ref_id_of, text_of, FieldKind, FieldSpec, FieldValue, FormDraft, ReferenceKind,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use crate::domain::{areas, users};
use crate::shared::components::confirm::confirm_delete;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::form_modal::{open_form_modal, SubmitHandler};
use crate::shared::export::{self, Formatters};
use crate::shared::list_core::{cell_text, row_from_value, Column, Row};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;

fn columns() -> Vec<Column> {
    vec![
        Column::new("usuario", "Usuario"),
        Column::new("descripcion", "Descripción"),
        Column::new("area", "Área"),
        Column::new("created_at", "Fecha de Creación"),
    ]
}

fn field_specs() -> Vec<FieldSpec> {
    vec![
        FieldSpec::required("usuario", "Usuario", FieldKind::Reference(ReferenceKind::User)),
        FieldSpec::required("descripcion", "Descripción", FieldKind::Text),
        FieldSpec::required(
            "area",
            "Área",
            FieldKind::CreatableReference(ReferenceKind::Area),
        ),
    ]
}

fn export_formatters() -> Formatters {
    let mut formatters = Formatters::new();
    formatters.insert("created_at", export::date_formatter as fn(&serde_json::Value) -> String);
    formatters
}

fn payload_from(draft: &FormDraft) -> Result<(UserId, AreaId, String), String> {
    let user_id = ref_id_of(draft, "usuario")
        .ok_or_else(|| "Seleccione un usuario de la lista".to_string())?;
    let area_id = ref_id_of(draft, "area")
        .ok_or_else(|| "Seleccione un área de la lista".to_string())?;
    Ok((
        UserId::from_string(&user_id)?,
        AreaId::from_string(&area_id)?,
        text_of(draft, "descripcion"),
    ))
}

#[component]
pub fn ServicesSection() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (services, set_services) = signal(Vec::<Service>::new());
    let (users_list, set_users) = signal(Vec::<User>::new());
    let (areas_list, set_areas) = signal(Vec::<Area>::new());

    let load = move || {
        spawn_local(async move {
            match api::fetch_services().await {
                Ok(list) => {
                    let _ = set_services.try_set(list);
                }
                Err(e) => {
                    log::error!("servicios: {}", e);
                    let _ = set_services.try_set(Vec::new());
                    toasts.error(format!("No se pudieron cargar los servicios: {}", e));
                }
            }
        });
        spawn_local(async move {
            match users::api::fetch_users().await {
                Ok(list) => {
                    let _ = set_users.try_set(list);
                }
                Err(e) => log::error!("usuarios: {}", e),
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
        match api::fetch_services().await {
            Ok(fresh) => {
                let _ = set_services.try_set(fresh);
            }
            Err(e) => log::error!("servicios: {}", e),
        }
    };

    let rows = Memo::new(move |_| {
        let users_list = users_list.get();
        let areas_list = areas_list.get();
        services
            .get()
            .into_iter()
            .map(|service| {
                let usuario = users_list
                    .iter()
                    .find(|u| u.id == service.user_id)
                    .map(|u| u.name.clone())
                    .unwrap_or_else(|| "Usuario no encontrado".to_string());
                let area = match service.area_id {
                    None => "Sin área asignada".to_string(),
                    Some(id) => areas_list
                        .iter()
                        .find(|a| a.id == id)
                        .map(|a| a.name.clone())
                        .unwrap_or_else(|| "Área no encontrada".to_string()),
                };
                row_from_value(serde_json::json!({
                    "id": service.id.as_string(),
                    "usuario": usuario,
                    "descripcion": service.description,
                    "area": area,
                    "created_at": service.lifecycle.created_at.format("%Y-%m-%d").to_string(),
                }))
            })
            .collect::<Vec<Row>>()
    });

    let handle_add = Callback::new(move |_| {
        let submit: SubmitHandler = Arc::new(move |draft: FormDraft| {
            Box::pin(async move {
                let (user_id, area_id, description) = payload_from(&draft)?;
                api::add_service(ServiceInsert::new(user_id, area_id, description)).await?;
                toasts.success("Servicio agregado correctamente");
                refetch().await;
                Ok(())
            })
        });
        open_form_modal(
            modal_stack,
            "Agregar Servicio",
            field_specs(),
            FormDraft::new(),
            submit,
        );
    });

    let handle_edit = Callback::new(move |row: Row| {
        let id = cell_text(&row, "id");
        let Some(service) = services
            .get_untracked()
            .into_iter()
            .find(|s| s.id.as_string() == id)
        else {
            return;
        };

        let mut initial = FormDraft::new();
        if let Some(user) = users_list
            .get_untracked()
            .iter()
            .find(|u| u.id == service.user_id)
        {
            initial.insert(
                "usuario".into(),
                FieldValue::reference(user.id.as_string(), user.name.clone()),
            );
        }
        initial.insert(
            "descripcion".into(),
            FieldValue::text(service.description.clone()),
        );
        if let Some(area_id) = service.area_id {
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

        let record_id = service.id.as_string();
        let submit: SubmitHandler = Arc::new(move |draft: FormDraft| {
            let record_id = record_id.clone();
            Box::pin(async move {
                let (user_id, area_id, description) = payload_from(&draft)?;
                api::update_service(&record_id, ServiceUpdate::new(user_id, area_id, description))
                    .await?;
                toasts.success("Servicio actualizado correctamente");
                refetch().await;
                Ok(())
            })
        });
        open_form_modal(
            modal_stack,
            "Editar Servicio",
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
                match api::delete_service(&id).await {
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
            title="Gestión de Servicios"
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
