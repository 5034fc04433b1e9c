//! Leaf spinner shown while a view waits on the API.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(into, optional)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Cargando...".to_owned());
    view! {
        <div class="loading" role="status">
            <span class="loading__leaf" aria-hidden="true">"🌱"</span>
            <span class="loading__label">{label}</span>
        </div>
    }
}
