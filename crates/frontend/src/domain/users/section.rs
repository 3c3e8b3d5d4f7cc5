use std::sync::Arc;

use contracts::domain::common::RecordId;
use contracts::domain::employments::aggregate::{Employment, EmploymentId};
use contracts::domain::pathologies::aggregate::{Pathology, PathologyId};
use contracts::domain::users::aggregate::{User, UserInsert, UserUpdate};
use contracts::shared::forms::{
    ref_id_of, text_of, FieldKind, FieldSpec, FieldValue, FormDraft, ReferenceKind,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use crate::domain::{employments, pathologies};
use crate::shared::components::confirm::confirm_delete;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::form_modal::{open_form_modal, SubmitHandler};
use crate::shared::list_core::{cell_text, row_from_value, Column, Row};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Nombre Completo"),
        Column::new("dni", "Cédula"),
        Column::new("gender", "Género"),
        Column::new("contact", "Contacto"),
        Column::new("age", "Edad"),
        Column::new("occupation", "Ocupación"),
        Column::new("pathology", "Patología"),
    ]
}

fn field_specs() -> Vec<FieldSpec> {
    vec![
        FieldSpec::required("name", "Nombre Completo", FieldKind::Text),
        FieldSpec::required("dni", "Cédula", FieldKind::Text),
        FieldSpec::required(
            "gender",
            "Género",
            FieldKind::Select(&["Masculino", "Femenino"]),
        ),
        FieldSpec::optional("contact", "Contacto", FieldKind::Phone),
        FieldSpec::required("age", "Edad", FieldKind::Number),
        FieldSpec::optional(
            "employment_id",
            "Ocupación",
            FieldKind::CreatableReference(ReferenceKind::Employment),
        ),
        FieldSpec::optional(
            "pathology_id",
            "Patología",
            FieldKind::CreatableReference(ReferenceKind::Pathology),
        ),
    ]
}

struct UserPayload {
    name: String,
    dni: String,
    gender: String,
    contact: Option<String>,
    age: i32,
    employment_id: Option<EmploymentId>,
    pathology_id: Option<PathologyId>,
}

fn payload_from(draft: &FormDraft) -> Result<UserPayload, String> {
    let age = text_of(draft, "age")
        .parse::<i32>()
        .map_err(|_| "Edad inválida".to_string())?;
    let employment_id = match ref_id_of(draft, "employment_id") {
        Some(id) => Some(EmploymentId::from_string(&id)?),
        None => None,
    };
    let pathology_id = match ref_id_of(draft, "pathology_id") {
        Some(id) => Some(PathologyId::from_string(&id)?),
        None => None,
    };
    let contact = Some(text_of(draft, "contact")).filter(|c| !c.is_empty());

    Ok(UserPayload {
        name: text_of(draft, "name"),
        dni: text_of(draft, "dni"),
        gender: text_of(draft, "gender"),
        contact,
        age,
        employment_id,
        pathology_id,
    })
}

#[component]
pub fn UsersSection() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (users, set_users) = signal(Vec::<User>::new());
    let (employments_list, set_employments) = signal(Vec::<Employment>::new());
    let (pathologies_list, set_pathologies) = signal(Vec::<Pathology>::new());

    let load = move || {
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(list) => {
                    let _ = set_users.try_set(list);
                }
                Err(e) => {
                    // Fetch failures fall back to an empty collection.
                    log::error!("usuarios: {}", e);
                    let _ = set_users.try_set(Vec::new());
                    toasts.error(format!("No se pudieron cargar los usuarios: {}", e));
                }
            }
        });
        spawn_local(async move {
            match employments::api::fetch_employments().await {
                Ok(list) => {
                    let _ = set_employments.try_set(list);
                }
                Err(e) => log::error!("ocupaciones: {}", e),
            }
        });
        spawn_local(async move {
            match pathologies::api::fetch_pathologies().await {
                Ok(list) => {
                    let _ = set_pathologies.try_set(list);
                }
                Err(e) => log::error!("patologías: {}", e),
            }
        });
    };
    load();

    let refetch = move || async move {
        match api::fetch_users().await {
            Ok(fresh) => {
                let _ = set_users.try_set(fresh);
            }
            Err(e) => log::error!("usuarios: {}", e),
        }
    };

    let rows = Memo::new(move |_| {
        let employments_list = employments_list.get();
        let pathologies_list = pathologies_list.get();
        users
            .get()
            .into_iter()
            .map(|user| {
                let occupation = match user.employment_id {
                    None => "Sin ocupación".to_string(),
                    Some(id) => employments_list
                        .iter()
                        .find(|e| e.id == id)
                        .map(|e| e.name.clone())
                        .unwrap_or_else(|| "Ocupación no encontrada".to_string()),
                };
                let pathology = match user.pathology_id {
                    None => "Sin patología".to_string(),
                    Some(id) => pathologies_list
                        .iter()
                        .find(|p| p.id == id)
                        .map(|p| p.name.clone())
                        .unwrap_or_else(|| "Patología no encontrada".to_string()),
                };
                row_from_value(serde_json::json!({
                    "id": user.id.as_string(),
                    "name": user.name,
                    "dni": user.dni,
                    "gender": user.gender,
                    "contact": user.contact.unwrap_or_else(|| "Sin contacto".to_string()),
                    "age": user.age,
                    "occupation": occupation,
                    "pathology": pathology,
                }))
            })
            .collect::<Vec<Row>>()
    });

    let handle_add = Callback::new(move |_| {
        let submit: SubmitHandler = Arc::new(move |draft: FormDraft| {
            Box::pin(async move {
                let payload = payload_from(&draft)?;
                api::add_user(UserInsert::new(
                    payload.name,
                    payload.dni,
                    payload.gender,
                    payload.contact,
                    payload.age,
                    payload.employment_id,
                    payload.pathology_id,
                ))
                .await?;
                toasts.success("Usuario agregado correctamente");
                refetch().await;
                Ok(())
            })
        });
        open_form_modal(
            modal_stack,
            "Agregar Usuario",
            field_specs(),
            FormDraft::new(),
            submit,
        );
    });

    let handle_edit = Callback::new(move |row: Row| {
        let id = cell_text(&row, "id");
        let Some(user) = users
            .get_untracked()
            .into_iter()
            .find(|u| u.id.as_string() == id)
        else {
            return;
        };

        let mut initial = FormDraft::new();
        initial.insert("name".into(), FieldValue::text(user.name.clone()));
        initial.insert("dni".into(), FieldValue::text(user.dni.clone()));
        initial.insert("gender".into(), FieldValue::text(user.gender.clone()));
        initial.insert(
            "contact".into(),
            FieldValue::text(user.contact.clone().unwrap_or_default()),
        );
        initial.insert("age".into(), FieldValue::text(user.age.to_string()));
        if let Some(employment_id) = user.employment_id {
            let name = employments_list
                .get_untracked()
                .iter()
                .find(|e| e.id == employment_id)
                .map(|e| e.name.clone())
                .unwrap_or_default();
            initial.insert(
                "employment_id".into(),
                FieldValue::reference(employment_id.as_string(), name),
            );
        }
        if let Some(pathology_id) = user.pathology_id {
            let name = pathologies_list
                .get_untracked()
                .iter()
                .find(|p| p.id == pathology_id)
                .map(|p| p.name.clone())
                .unwrap_or_default();
            initial.insert(
                "pathology_id".into(),
                FieldValue::reference(pathology_id.as_string(), name),
            );
        }

        let record_id = user.id.as_string();
        let submit: SubmitHandler = Arc::new(move |draft: FormDraft| {
            let record_id = record_id.clone();
            Box::pin(async move {
                let payload = payload_from(&draft)?;
                api::update_user(
                    &record_id,
                    UserUpdate::new(
                        payload.name,
                        payload.dni,
                        payload.gender,
                        payload.contact,
                        payload.age,
                        payload.employment_id,
                        payload.pathology_id,
                    ),
                )
                .await?;
                toasts.success("Usuario actualizado correctamente");
                refetch().await;
                Ok(())
            })
        });
        open_form_modal(
            modal_stack,
            "Editar Usuario",
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
                match api::delete_user(&id).await {
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
            title="Gestión de Usuarios"
            columns=columns()
            rows=rows
            on_add=handle_add
            on_edit=handle_edit
            on_delete=handle_delete
        />
    }
}
