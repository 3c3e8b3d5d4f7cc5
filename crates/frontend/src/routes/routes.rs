use leptos::prelude::*;

use crate::domain::areas::section::AreasSection;
use crate::domain::dispatch::section::DispatchSection;
use crate::domain::menu_expense::section::MenuExpenseSection;
use crate::domain::products::section::ProductsSection;
use crate::domain::services::section::ServicesSection;
use crate::domain::stocks::section::InventorySection;
use crate::domain::users::section::UsersSection;
use crate::layout::header::Header;
use crate::layout::sidebar::Sidebar;
use crate::layout::Section;
use crate::overview::OverviewSection;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;

#[component]
fn MainLayout() -> impl IntoView {
    let active = RwSignal::new(Section::Overview);

    view! {
        <div class="shell">
            <Sidebar active=active />
            <div class="shell__main">
                <Header />
                <main class="shell__content">
                    {move || match active.get() {
                        Section::Overview => view! { <OverviewSection /> }.into_any(),
                        Section::Users => view! { <UsersSection /> }.into_any(),
                        Section::Services => view! { <ServicesSection /> }.into_any(),
                        Section::Inventory => view! { <InventorySection /> }.into_any(),
                        Section::Dispatch => view! { <DispatchSection /> }.into_any(),
                        Section::MenuExpense => view! { <MenuExpenseSection /> }.into_any(),
                        Section::Products => view! { <ProductsSection /> }.into_any(),
                        Section::Areas => view! { <AreasSection /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}

/// Routing consults only the authenticated and loading flags.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || !auth_state.get().loading
            fallback=|| view! { <div class="app-loading">"Cargando..."</div> }
        >
            <Show
                when=move || auth_state.get().is_authenticated()
                fallback=|| view! { <LoginPage /> }
            >
                <RequireAuth>
                    <MainLayout />
                </RequireAuth>
            </Show>
        </Show>
    }
}
