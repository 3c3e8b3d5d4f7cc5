use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Root-owned services, handed to descendants via context.
    provide_context(ModalStackService::new());
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <ModalHost />
            <ToastHost />
        </AuthProvider>
    }
}
