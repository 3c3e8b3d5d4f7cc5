//! Dynamic form modal: renders a declarative field list, accumulates a
//! draft, validates required fields in one pass, resolves creatable
//! references, and hands the draft to the caller's async submit handler.
//!
//! State machine: closed -> open (pristine/dirty) -> submitting ->
//! closed on success, back to open-dirty on failure. A failed submit never
//! clears the draft, so the user can retry.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use contracts::shared::forms::{
    missing_fields_message, missing_required_labels, resolve_by_name, FieldKind, FieldSpec,
    FieldValue, FormDraft, RefOption, ReferenceKind,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;

pub type SubmitResult = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Awaited exactly once per submit attempt.
pub type SubmitHandler = Arc<dyn Fn(FormDraft) -> SubmitResult + Send + Sync>;

/// Open a form dialog on the modal stack. While a submit is in flight the
/// close guard keeps overlay clicks and Escape from dismissing the dialog.
pub fn open_form_modal(
    modal_stack: ModalStackService,
    title: &'static str,
    fields: Vec<FieldSpec>,
    initial: FormDraft,
    on_submit: SubmitHandler,
) {
    let is_submitting = RwSignal::new(false);
    let guard: Arc<dyn Fn() -> bool + Send + Sync> =
        Arc::new(move || !is_submitting.get_untracked());

    modal_stack.push_with_frame_guard(
        Some("max-width: min(480px, 95vw); width: min(480px, 95vw);".to_string()),
        Some(guard),
        move |handle| {
            let close = Callback::new({
                let handle = handle.clone();
                move |_| handle.close()
            });
            view! {
                <FormModal
                    title=title
                    fields=fields.clone()
                    initial=initial.clone()
                    on_submit=on_submit.clone()
                    is_submitting=is_submitting
                    on_saved=close
                    on_cancel=close
                />
            }
            .into_any()
        },
    );
}

#[component]
fn FormModal(
    title: &'static str,
    fields: Vec<FieldSpec>,
    initial: FormDraft,
    on_submit: SubmitHandler,
    is_submitting: RwSignal<bool>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let fields = StoredValue::new(fields);
    let draft = RwSignal::new(initial);
    let (error, set_error) = signal(None::<String>);

    let options = ReferenceOptions::new();
    options.load_for(&fields.get_value(), toasts);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let specs = fields.get_value();
        let current = draft.get_untracked();

        // All missing required labels are reported at once, never fail-fast.
        let missing = missing_required_labels(&specs, &current);
        if !missing.is_empty() {
            set_error.set(Some(missing_fields_message(&missing)));
            return;
        }

        is_submitting.set(true);
        set_error.set(None);

        let on_submit = on_submit.clone();
        spawn_local(async move {
            let resolved = match resolve_creatable_references(specs, current, options).await {
                Ok(draft) => draft,
                Err(e) => {
                    let _ = is_submitting.try_set(false);
                    let _ = set_error.try_set(Some(e.clone()));
                    toasts.error(e);
                    return;
                }
            };
            match on_submit(resolved).await {
                Ok(()) => {
                    let _ = is_submitting.try_set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    // Keep the dialog and the draft; the user can retry.
                    let _ = is_submitting.try_set(false);
                    let _ = set_error.try_set(Some(e.clone()));
                    toasts.error(e);
                }
            }
        });
    };

    view! {
        <div class="form-modal">
            <div class="form-modal__header">
                <h3>{title}</h3>
                <button
                    type="button"
                    class="button button--ghost"
                    title="Cerrar"
                    on:click=move |_| on_cancel.run(())
                >
                    {icon("x")}
                </button>
            </div>

            {move || error.get().map(|e| view! { <div class="form-modal__error">{e}</div> })}

            <form on:submit=handle_submit>
                {fields
                    .get_value()
                    .into_iter()
                    .map(|spec| view! { <FormField spec=spec draft=draft options=options /> })
                    .collect_view()}

                <div class="form-modal__actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| on_cancel.run(())
                        disabled=move || is_submitting.get()
                    >
                        "Cancelar"
                    </button>
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_submitting.get()
                    >
                        {move || if is_submitting.get() { "Guardando..." } else { "Guardar" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// One rendered field. The match on `FieldKind` is exhaustive.
#[component]
fn FormField(spec: FieldSpec, draft: RwSignal<FormDraft>, options: ReferenceOptions) -> impl IntoView {
    let name = spec.name;
    let label = spec.label;

    let set_text = move |value: String| {
        draft.update(|d| {
            d.insert(name.to_string(), FieldValue::text(value));
        });
    };
    let current_text = move || {
        draft
            .get()
            .get(name)
            .map(|v| v.text.clone())
            .unwrap_or_default()
    };

    let control = match spec.kind {
        FieldKind::Text => view! {
            <input
                type="text"
                class="form-field__input"
                prop:value=current_text
                on:input=move |ev| set_text(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Number => view! {
            <input
                type="number"
                class="form-field__input"
                prop:value=current_text
                on:input=move |ev| set_text(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Phone => view! {
            <input
                type="tel"
                class="form-field__input"
                prop:value=current_text
                on:input=move |ev| set_text(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Select(choices) => view! {
            <select
                class="form-field__input"
                prop:value=current_text
                on:change=move |ev| set_text(event_target_value(&ev))
            >
                <option value="" disabled=true selected=move || current_text().is_empty()>
                    {format!("Seleccionar {}", label.to_lowercase())}
                </option>
                {choices
                    .iter()
                    .map(|&choice| {
                        view! {
                            <option value=choice selected=move || current_text() == choice>
                                {choice}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Reference(kind) => view! {
            <ReferenceField name=name label=label options=options.for_kind(kind) creatable=false draft=draft />
        }
        .into_any(),
        FieldKind::CreatableReference(kind) => view! {
            <ReferenceField name=name label=label options=options.for_kind(kind) creatable=true draft=draft />
        }
        .into_any(),
    };

    view! {
        <div class="form-field">
            <label class="form-field__label">
                {label}
                {spec.required.then(|| view! { <span class="form-field__required">" *"</span> })}
            </label>
            {control}
        </div>
    }
}

/// Type-ahead lookup over a reference collection. Selecting an option binds
/// the record identifier next to the display text; typing afterwards drops
/// the binding again, so the identifier always matches what is shown.
#[component]
fn ReferenceField(
    name: &'static str,
    label: &'static str,
    #[prop(into)] options: Signal<Vec<RefOption>>,
    creatable: bool,
    draft: RwSignal<FormDraft>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    let current = move || draft.get().get(name).cloned().unwrap_or_default();

    let select_option = move |option: RefOption| {
        draft.update(|d| {
            d.insert(
                name.to_string(),
                FieldValue::reference(option.id, option.name),
            );
        });
        set_open.set(false);
    };

    let on_input = move |ev| {
        let text = event_target_value(&ev);
        draft.update(|d| {
            d.insert(name.to_string(), FieldValue::text(text));
        });
        set_open.set(true);
    };

    // Deferred so that a mousedown on an option wins over the blur.
    let on_blur = move |_| {
        spawn_local(async move {
            TimeoutFuture::new(150).await;
            let _ = set_open.try_set(false);
        });
    };

    let filtered = move || {
        let query = current().text.trim().to_lowercase();
        let all = options.get();
        if query.is_empty() {
            all
        } else {
            all.into_iter()
                .filter(|o| o.name.to_lowercase().contains(&query))
                .collect()
        }
    };

    view! {
        <div class="ref-field">
            <input
                type="text"
                class="form-field__input"
                placeholder=format!("Buscar {}...", label.to_lowercase())
                prop:value=move || current().text
                on:input=on_input
                on:focus=move |_| set_open.set(true)
                on:blur=on_blur
            />
            <Show when=move || open.get()>
                <div class="ref-field__options">
                    <For
                        each=filtered
                        key=|option| option.id.clone()
                        children=move |option| {
                            let chosen = option.clone();
                            view! {
                                <div
                                    class="ref-field__option"
                                    on:mousedown=move |_| select_option(chosen.clone())
                                >
                                    {option.name.clone()}
                                </div>
                            }
                        }
                    />
                    {move || {
                        (creatable && current().ref_id.is_none() && !current().text.trim().is_empty())
                            .then(|| {
                                view! {
                                    <div class="ref-field__hint">
                                        "Se creará al guardar: " {current().text}
                                    </div>
                                }
                            })
                    }}
                </div>
            </Show>
        </div>
    }
}

/// Reference options per kind, loaded lazily for the kinds a form uses.
#[derive(Clone, Copy)]
struct ReferenceOptions {
    users: RwSignal<Vec<RefOption>>,
    areas: RwSignal<Vec<RefOption>>,
    employments: RwSignal<Vec<RefOption>>,
    pathologies: RwSignal<Vec<RefOption>>,
    products: RwSignal<Vec<RefOption>>,
}

impl ReferenceOptions {
    fn new() -> Self {
        Self {
            users: RwSignal::new(Vec::new()),
            areas: RwSignal::new(Vec::new()),
            employments: RwSignal::new(Vec::new()),
            pathologies: RwSignal::new(Vec::new()),
            products: RwSignal::new(Vec::new()),
        }
    }

    fn for_kind(&self, kind: ReferenceKind) -> RwSignal<Vec<RefOption>> {
        match kind {
            ReferenceKind::User => self.users,
            ReferenceKind::Area => self.areas,
            ReferenceKind::Employment => self.employments,
            ReferenceKind::Pathology => self.pathologies,
            ReferenceKind::Product => self.products,
        }
    }

    fn load_for(&self, fields: &[FieldSpec], toasts: ToastService) {
        let mut kinds: Vec<ReferenceKind> = Vec::new();
        for field in fields {
            if let FieldKind::Reference(kind) | FieldKind::CreatableReference(kind) = field.kind {
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
            }
        }
        for kind in kinds {
            let target = self.for_kind(kind);
            spawn_local(async move {
                match load_reference_options(kind).await {
                    Ok(loaded) => {
                        let _ = target.try_set(loaded);
                    }
                    Err(e) => {
                        log::error!("error cargando referencias: {}", e);
                        toasts.error(e);
                    }
                }
            });
        }
    }
}

async fn load_reference_options(kind: ReferenceKind) -> Result<Vec<RefOption>, String> {
    use contracts::domain::common::RecordId;
    match kind {
        ReferenceKind::User => Ok(domain::users::api::fetch_users()
            .await?
            .into_iter()
            .map(|u| RefOption {
                id: u.id.as_string(),
                name: u.name,
            })
            .collect()),
        ReferenceKind::Area => Ok(domain::areas::api::fetch_areas()
            .await?
            .into_iter()
            .map(|a| RefOption {
                id: a.id.as_string(),
                name: a.name,
            })
            .collect()),
        ReferenceKind::Employment => Ok(domain::employments::api::fetch_employments()
            .await?
            .into_iter()
            .map(|e| RefOption {
                id: e.id.as_string(),
                name: e.name,
            })
            .collect()),
        ReferenceKind::Pathology => Ok(domain::pathologies::api::fetch_pathologies()
            .await?
            .into_iter()
            .map(|p| RefOption {
                id: p.id.as_string(),
                name: p.name,
            })
            .collect()),
        ReferenceKind::Product => Ok(domain::products::api::fetch_products()
            .await?
            .into_iter()
            .map(|p| RefOption {
                id: p.id.as_string(),
                name: p.name,
            })
            .collect()),
    }
}

async fn create_reference(kind: ReferenceKind, name: String) -> Result<RefOption, String> {
    use contracts::domain::common::RecordId;
    match kind {
        ReferenceKind::Area => domain::areas::api::add_area(name, None).await.map(|a| RefOption {
            id: a.id.as_string(),
            name: a.name,
        }),
        ReferenceKind::Employment => {
            domain::employments::api::add_employment(name).await.map(|e| RefOption {
                id: e.id.as_string(),
                name: e.name,
            })
        }
        ReferenceKind::Pathology => {
            domain::pathologies::api::add_pathology(name).await.map(|p| RefOption {
                id: p.id.as_string(),
                name: p.name,
            })
        }
        ReferenceKind::User | ReferenceKind::Product => {
            Err("Esta referencia no admite creación".to_string())
        }
    }
}

/// Creatable references typed as plain names are resolved before submit:
/// an exact match among the loaded options binds its id, anything else is
/// inserted into the reference collection and the new id is used.
async fn resolve_creatable_references(
    specs: Vec<FieldSpec>,
    mut draft: FormDraft,
    options: ReferenceOptions,
) -> Result<FormDraft, String> {
    for spec in &specs {
        let FieldKind::CreatableReference(kind) = spec.kind else {
            continue;
        };
        let Some(value) = draft.get(spec.name) else {
            continue;
        };
        if value.ref_id.is_some() || value.text.trim().is_empty() {
            continue;
        }
        let name = value.text.trim().to_string();
        let loaded = options.for_kind(kind).get_untracked();
        let resolved = match resolve_by_name(&loaded, &name) {
            Some(existing) => existing.clone(),
            None => create_reference(kind, name).await?,
        };
        draft.insert(
            spec.name.to_string(),
            FieldValue::reference(resolved.id, resolved.name),
        );
    }
    Ok(draft)
}
