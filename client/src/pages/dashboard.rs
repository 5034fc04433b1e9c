//! Authenticated shell: sidebar plus the active section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigation between sections is in-memory (`SessionState::active_section`),
//! not routed. Redirects to `/login` once the session has loaded without a
//! token.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::home_section::HomeSection;
use crate::components::plant_status_section::PlantStatusSection;
use crate::components::registration_section::{
    AnomalyRegistration, GrowthRegistration, PlantRegistration, ProductionRegistration, SensorRegistration,
};
use crate::components::reports_section::ReportsSection;
use crate::components::sidebar::Sidebar;
use crate::components::user_management::UserManagement;
use crate::state::session::{Section, SessionState};
use crate::state::ui::UiState;
use crate::util::auth::install_login_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_login_redirect(session, use_navigate());

    let active = Memo::new(move |_| session.with(|s| s.active_section));

    view! {
        <Show when=move || session.with(SessionState::is_authenticated)>
            <div class="dashboard">
                <Sidebar />
                <Show when=move || ui.with(|u| u.is_mobile() && u.sidebar_open)>
                    <div class="sidebar-scrim" on:click=move |_| ui.update(|u| u.sidebar_open = false)></div>
                </Show>
                <main class="dashboard__main">
                    <header class="dashboard__header">
                        <Show when=move || ui.with(UiState::is_mobile)>
                            <button class="btn dashboard__menu" aria-label="Menú" on:click=move |_| ui.update(UiState::toggle_sidebar)>
                                "☰"
                            </button>
                        </Show>
                        <h1>{move || active.get().label()}</h1>
                    </header>
                    {move || render_section(active.get())}
                </main>
            </div>
        </Show>
    }
}

fn render_section(section: Section) -> AnyView {
    match section {
        Section::Home => view! { <HomeSection /> }.into_any(),
        Section::Plants => view! { <PlantRegistration /> }.into_any(),
        Section::Growth => view! { <GrowthRegistration /> }.into_any(),
        Section::Production => view! { <ProductionRegistration /> }.into_any(),
        Section::Anomalies => view! { <AnomalyRegistration /> }.into_any(),
        Section::Sensors => view! { <SensorRegistration /> }.into_any(),
        Section::PlantStatus => view! { <PlantStatusSection /> }.into_any(),
        Section::Reports => view! { <ReportsSection /> }.into_any(),
        Section::Users => view! { <UserManagement /> }.into_any(),
    }
}
