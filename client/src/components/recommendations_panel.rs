//! Care recommendations for the selected plant, revealed progressively.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::loading::LoadingSpinner;
use crate::state::loadable::Loadable;
use crate::state::recommendations::{REVEAL_INTERVAL_MS, RevealState};
use crate::state::session::SessionState;
use crate::util::auth::api_client;
use crate::util::markdown::render_markdown_html;
use crate::util::timing::sleep_ms;

#[component]
pub fn RecommendationsPanel(#[prop(into)] code: Signal<Option<String>>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let reveal = RwSignal::new(Loadable::<RevealState>::Loading);
    // Bumped per selection so a stale fetch or reveal loop stops touching state.
    let generation = StoredValue::new(0_u64);

    Effect::new(move || {
        let Some(code) = code.get() else {
            return;
        };
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        reveal.set(Loadable::Loading);

        let client = api_client(session);
        spawn_local(async move {
            let result = client.fetch_recommendation(&code).await;
            if generation.try_get_value() != Some(current) {
                return;
            }
            let text = match result {
                Ok(text) => text,
                Err(err) => {
                    reveal.set(Loadable::Failed(format!("Error al obtener recomendaciones: {err}")));
                    return;
                }
            };
            reveal.set(Loadable::Ready(RevealState::new(&text)));
            loop {
                sleep_ms(REVEAL_INTERVAL_MS).await;
                if generation.try_get_value() != Some(current) {
                    break;
                }
                let more = reveal
                    .try_update(|r| match r {
                        Loadable::Ready(state) => state.tick(),
                        _ => false,
                    })
                    .unwrap_or(false);
                if !more {
                    break;
                }
            }
        });
    });

    view! {
        <Show when=move || code.get().is_some()>
            <section class="panel recommendations">
                <h3 class="panel__title">
                    {move || format!("Recomendaciones de Cuidado: {}", code.get().unwrap_or_default())}
                </h3>
                {move || match reveal.get() {
                    Loadable::Loading => view! { <LoadingSpinner label="Consultando al asistente..." /> }.into_any(),
                    Loadable::Failed(message) => view! { <p class="banner banner--error">{message}</p> }.into_any(),
                    Loadable::Ready(state) => {
                        let sections = state
                            .shown()
                            .iter()
                            .map(|section| {
                                let body = render_markdown_html(&section.body);
                                view! {
                                    <article class="recommendations__section">
                                        {section.title.clone().map(|t| view! { <h4 class="recommendations__title">{t}</h4> })}
                                        <div class="recommendations__body" inner_html=body></div>
                                    </article>
                                }
                            })
                            .collect::<Vec<_>>();
                        let pending = (!state.is_complete()).then(|| view! { <p class="recommendations__pending">"…"</p> });
                        view! { {sections} {pending} }.into_any()
                    }
                }}
            </section>
        </Show>
    }
}
