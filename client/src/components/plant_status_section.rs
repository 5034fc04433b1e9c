//! Plant lookup: search by code, browse the table, read recommendations.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::plant_table::PlantTable;
use crate::components::recommendations_panel::RecommendationsPanel;
use crate::net::types::Plant;
use crate::state::session::SessionState;
use crate::util::auth::api_client;

#[component]
pub fn PlantStatusSection() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = RwSignal::new(String::new());
    let search_result = RwSignal::new(None::<Vec<Plant>>);
    let searching = RwSignal::new(false);
    let search_error = RwSignal::new(None::<String>);
    let selected = RwSignal::new(None::<String>);

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if searching.get_untracked() {
            return;
        }
        let code = query.get_untracked().trim().to_owned();
        if code.is_empty() {
            search_error.set(None);
            search_result.set(None);
            return;
        }
        searching.set(true);
        search_error.set(None);
        let client = api_client(session);
        spawn_local(async move {
            match client.search_plant(&code).await {
                Ok(rows) => search_result.set(Some(rows)),
                Err(err) => search_error.set(Some(err.to_string())),
            }
            searching.set(false);
        });
    };

    let on_clear = move |_| {
        query.set(String::new());
        search_error.set(None);
        search_result.set(None);
    };

    view! {
        <section class="panel plant-status">
            <h3 class="panel__title">"Consultar Estado de Plantas"</h3>
            <form class="plant-status__search" on:submit=on_search>
                <input
                    class="form-field__input"
                    type="text"
                    placeholder="Código de la planta"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || searching.get()>
                    "Buscar"
                </button>
                <button class="btn" type="button" on:click=on_clear>
                    "Limpiar"
                </button>
            </form>
            <PlantTable
                search_result=search_result
                parent_loading=searching
                parent_error=search_error
                on_select=Callback::new(move |code: String| selected.set(Some(code)))
            />
        </section>
        <RecommendationsPanel code=selected />
    }
}
