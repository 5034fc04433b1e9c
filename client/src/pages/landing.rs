//! Public landing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_get_started = move |_| {
        let target = if session.with_untracked(SessionState::is_authenticated) { "/dashboard" } else { "/login" };
        navigate(target, NavigateOptions::default());
    };

    view! {
        <div class="landing">
            <header class="landing__nav">
                <span class="landing__brand">"🌿 Plant Tracker"</span>
            </header>
            <main class="landing__hero">
                <h1>"Cultiva de forma más inteligente con Plant Tracker"</h1>
                <p>"Monitorea, analiza y optimiza la salud de tus plantas con nuestro sistema de seguimiento."</p>
                <button class="btn btn--primary btn--large" on:click=on_get_started>
                    "Comenzar →"
                </button>
            </main>
            <footer class="landing__footer">
                <p>"© 2024 Plant Tracker. Todos los derechos reservados."</p>
            </footer>
        </div>
    }
}
