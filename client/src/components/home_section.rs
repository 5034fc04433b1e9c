//! Dashboard landing view: one card per section plus the forecast.

use leptos::prelude::*;

use crate::components::weather_widget::WeatherWidget;
use crate::state::session::{Section, SessionState};

#[component]
pub fn HomeSection() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let greeting = move || {
        let name = session.with(|s| s.display_name().to_owned());
        if name.is_empty() { "Bienvenido".to_owned() } else { format!("Bienvenido, {name}") }
    };

    view! {
        <div class="home">
            <h2 class="home__greeting">{greeting}</h2>
            <WeatherWidget />
            <div class="home__cards">
                {Section::cards()
                    .map(|section| {
                        view! {
                            <article class="home-card">
                                <h3>{section.label()}</h3>
                                <p>{section.summary()}</p>
                                <button class="btn btn--primary" on:click=move |_| session.update(|s| s.select(section))>
                                    "Ver detalles"
                                </button>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
