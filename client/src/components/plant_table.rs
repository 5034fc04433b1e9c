//! Paginated plant table with QR and delete row actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the plant status section. When the parent supplies a search
//! result the table shows exactly those rows; otherwise it fetches every
//! plant itself. Layout follows `UiState::viewport_width`: cards on narrow
//! screens, a table otherwise.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::loading::LoadingSpinner;
use crate::components::qr_modal::QrModalView;
use crate::net::types::Plant;
use crate::state::plant_table::{PAGE_SIZE_OPTIONS, PlantTableState, TableLayout};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::auth::api_client;

#[component]
pub fn PlantTable(
    /// Parent search result; `None` means "show everything".
    #[prop(into)]
    search_result: Signal<Option<Vec<Plant>>>,
    /// Parent search in flight.
    #[prop(into)]
    parent_loading: Signal<bool>,
    /// Parent search failure.
    #[prop(into)]
    parent_error: Signal<Option<String>>,
    on_select: Callback<String>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let table = RwSignal::new(PlantTableState::default());

    Effect::new(move || {
        let result = search_result.get();
        let needs_fetch = table.try_update(|t| t.apply_search_result(result)).unwrap_or(false);
        if !needs_fetch {
            return;
        }
        let client = api_client(session);
        spawn_local(async move {
            match client.fetch_plants().await {
                Ok(rows) => table.update(|t| t.fetch_succeeded(rows)),
                Err(err) => table.update(|t| t.fetch_failed(err.to_string())),
            }
        });
    });

    let on_delete_confirm = Callback::new(move |()| {
        let Some(code) = table.try_update(PlantTableState::confirm_delete).flatten() else {
            return;
        };
        let client = api_client(session);
        spawn_local(async move {
            match client.delete_plant(&code).await {
                Ok(()) => table.update(|t| t.delete_confirmed(&code)),
                Err(err) => table.update(|t| t.delete_failed(&code, format!("Error al eliminar la planta: {err}"))),
            }
        });
    });
    let on_delete_cancel = Callback::new(move |()| table.update(PlantTableState::cancel_delete));
    let on_qr_close = Callback::new(move |()| table.update(PlantTableState::close_qr));

    let actions = RowActions {
        on_select,
        on_qr: Callback::new(move |code: String| table.update(|t| t.open_qr(&code))),
        on_delete: Callback::new(move |code: String| table.update(|t| t.request_delete(&code))),
        table,
    };

    let body = move || {
        if parent_loading.get() || table.with(PlantTableState::is_loading) {
            return view! { <LoadingSpinner label="Cargando plantas..." /> }.into_any();
        }
        if let Some(err) = parent_error.get() {
            return view! { <p class="banner banner--error">{format!("Error en la búsqueda: {err}")}</p> }
                .into_any();
        }
        if let Some(err) = table.with(|t| t.fetch_error().map(str::to_owned)) {
            return view! { <p class="banner banner--error">{format!("Error al cargar las plantas: {err}")}</p> }
                .into_any();
        }
        let rows = table.with(|t| t.visible_rows().to_vec());
        if rows.is_empty() {
            return view! { <p class="plant-table__empty">"No hay plantas para mostrar."</p> }.into_any();
        }
        let highlight = table.with(PlantTableState::highlight_single);
        match TableLayout::for_width(ui.with(|u| u.viewport_width)) {
            TableLayout::Cards => render_cards(rows, highlight, actions).into_any(),
            TableLayout::Table => render_table(rows, highlight, actions).into_any(),
        }
    };

    view! {
        <div class="plant-table">
            {move || {
                table
                    .with(|t| t.notice.clone())
                    .map(|notice| {
                        view! {
                            <p class="banner banner--error">
                                {notice}
                                <button class="banner__close" on:click=move |_| table.update(PlantTableState::dismiss_notice)>
                                    "×"
                                </button>
                            </p>
                        }
                    })
            }}
            {body}
            <Pager table=table />
            <QrModalView modal=Signal::derive(move || table.with(|t| t.qr.clone())) on_close=on_qr_close />
            <Show when=move || table.with(|t| t.confirm_delete.is_some())>
                <ConfirmDialog
                    title="Confirmar eliminación de planta"
                    message="¿Estás seguro de que quieres eliminar esta planta? Esta acción no se puede deshacer."
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}

#[derive(Clone, Copy)]
struct RowActions {
    on_select: Callback<String>,
    on_qr: Callback<String>,
    on_delete: Callback<String>,
    table: RwSignal<PlantTableState>,
}

fn action_buttons(code: String, actions: RowActions) -> impl IntoView {
    let (select_code, qr_code, delete_code, pending_code) = (code.clone(), code.clone(), code.clone(), code);
    let pending = move || actions.table.with(|t| t.is_pending(&pending_code));
    view! {
        <div class="plant-table__actions">
            <button class="btn btn--small" on:click=move |_| actions.on_select.run(select_code.clone())>
                "Ver recomendaciones"
            </button>
            <button class="btn btn--small" on:click=move |_| actions.on_qr.run(qr_code.clone())>
                "QR"
            </button>
            <button
                class="btn btn--small btn--danger"
                disabled=pending.clone()
                on:click=move |_| actions.on_delete.run(delete_code.clone())
            >
                {
                    let pending = pending.clone();
                    move || if pending() { "Eliminando..." } else { "Eliminar" }
                }
            </button>
        </div>
    }
}

fn render_table(rows: Vec<Plant>, highlight: bool, actions: RowActions) -> impl IntoView {
    let row_class = if highlight { "plant-table__row plant-table__row--highlight" } else { "plant-table__row" };
    view! {
        <table class="plant-table__table">
            <thead>
                <tr>
                    <th>"Código"</th>
                    <th>"Especie"</th>
                    <th>"Ubicación"</th>
                    <th>"Estado"</th>
                    <th>"Fecha de Estado"</th>
                    <th>"Condiciones"</th>
                    <th>"Tags"</th>
                    <th>"Acciones"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|plant| {
                        let status = plant.status_label();
                        view! {
                            <tr class=row_class>
                                <td>{plant.code.clone()}</td>
                                <td>{plant.species}</td>
                                <td>{plant.location}</td>
                                <td>
                                    <span class="status-pill">{status}</span>
                                </td>
                                <td>{plant.status_date}</td>
                                <td>{plant.conditions}</td>
                                <td>{plant.tags}</td>
                                <td>{action_buttons(plant.code, actions)}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

fn render_cards(rows: Vec<Plant>, highlight: bool, actions: RowActions) -> impl IntoView {
    let card_class = if highlight { "plant-card plant-card--highlight" } else { "plant-card" };
    view! {
        <ul class="plant-cards">
            {rows
                .into_iter()
                .map(|plant| {
                    let status = plant.status_label();
                    view! {
                        <li class=card_class>
                            <div class="plant-card__header">
                                <strong>{plant.code.clone()}</strong>
                                <span class="status-pill">{status}</span>
                            </div>
                            <dl class="plant-card__details">
                                <dt>"Especie"</dt>
                                <dd>{plant.species}</dd>
                                <dt>"Ubicación"</dt>
                                <dd>{plant.location}</dd>
                                <dt>"Condiciones"</dt>
                                <dd>{plant.conditions}</dd>
                            </dl>
                            {action_buttons(plant.code, actions)}
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
fn Pager(table: RwSignal<PlantTableState>) -> impl IntoView {
    let summary = move || {
        table.with(|t| {
            let total = t.total_count();
            let start = if total == 0 { 0 } else { t.page * t.page_size + 1 };
            let end = (t.page * t.page_size + t.page_size).min(total);
            format!("{start}-{end} de {total}")
        })
    };

    view! {
        <div class="pager">
            <label class="pager__size">
                "Filas por página"
                <select
                    prop:value=move || table.with(|t| t.page_size.to_string())
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            table.update(|t| t.set_page_size(size));
                        }
                    }
                >
                    {PAGE_SIZE_OPTIONS
                        .iter()
                        .map(|size| view! { <option value=size.to_string()>{size.to_string()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <span class="pager__summary">{summary}</span>
            <button
                class="btn btn--small"
                disabled=move || table.with(|t| t.page == 0)
                on:click=move |_| table.update(PlantTableState::prev_page)
            >
                "Anterior"
            </button>
            <button
                class="btn btn--small"
                disabled=move || table.with(|t| t.page + 1 >= t.page_count())
                on:click=move |_| table.update(PlantTableState::next_page)
            >
                "Siguiente"
            </button>
        </div>
    }
}
