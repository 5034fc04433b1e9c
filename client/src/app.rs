//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::{API_BASE_META_NAME, ApiConfig};
use crate::pages::{dashboard::DashboardPage, landing::LandingPage, login::LoginPage};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::{auth, dark_mode, viewport};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The API base URL is published in a `<meta>` tag so the browser bundle
/// picks up the server's configuration without a rebuild.
pub fn shell(options: LeptosOptions, api: ApiConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META_NAME content=api.base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, UI, and API contexts and sets up routing. Local
/// storage is read once, after hydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restoring());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);
    provide_context(use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_document));

    Effect::new(move || {
        auth::restore(session);
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });
    viewport::install_resize_listener(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/plant-tracker-ui.css"/>
        <Title text="Plant Tracker"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
