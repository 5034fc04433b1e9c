//! Analytics overview: headline counts, status chart, sensors, recent harvests.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::loading::LoadingSpinner;
use crate::net::types::{Sensor, SensorKind};
use crate::state::loadable::Loadable;
use crate::state::reports::{ReportData, ReportSummary, StatusBar};
use crate::state::session::SessionState;
use crate::util::auth::api_client;

#[component]
pub fn ReportsSection() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let report = RwSignal::new(Loadable::<ReportSummary>::Loading);

    Effect::new(move || {
        let client = api_client(session);
        spawn_local(async move {
            let fetched = futures::try_join!(
                client.fetch_plants(),
                client.fetch_evolutions(),
                client.fetch_productions(),
                client.fetch_anomalies(),
                client.fetch_sensors(),
            );
            let result = fetched
                .map(|(plants, evolutions, productions, anomalies, sensors)| {
                    ReportSummary::from_data(&ReportData { plants, evolutions, productions, anomalies, sensors })
                })
                .map_err(|err| format!("Error al cargar los reportes: {err}"));
            report.set(Loadable::from_result(result));
        });
    });

    move || match report.get() {
        Loadable::Loading => view! { <LoadingSpinner label="Cargando reportes..." /> }.into_any(),
        Loadable::Failed(message) => view! { <p class="banner banner--error">{message}</p> }.into_any(),
        Loadable::Ready(summary) => render_summary(summary).into_any(),
    }
}

fn render_summary(summary: ReportSummary) -> impl IntoView {
    let ReportSummary { total_plants, latest_height, anomaly_count, sensor_count, status_bars, sensors, productions } =
        summary;
    view! {
        <div class="reports">
            <header class="reports__header">
                <h2>"Tablero de Control de Plant Tracker"</h2>
                <p>"Monitorea y rastrea la salud y el crecimiento de tus plantas"</p>
            </header>
            <div class="reports__cards">
                {stat_card("Total de Plantas", "🌿", total_plants.to_string())}
                {stat_card("Crecimiento Promedio", "📈", latest_height.unwrap_or_else(|| "N/A".to_owned()))}
                {stat_card("Problemas de Salud", "⚠️", anomaly_count.to_string())}
                {stat_card("Sensores Activos", "💧", sensor_count.to_string())}
            </div>
            <div class="reports__grid">
                <section class="panel">
                    <h3 class="panel__title">"Distribución de Salud de las Plantas"</h3>
                    {status_chart(status_bars)}
                </section>
                <section class="panel">
                    <h3 class="panel__title">"Condiciones Ambientales"</h3>
                    <div class="reports__sensors">
                        {sensors
                            .into_iter()
                            .map(|sensor| {
                                let glyph = sensor_glyph(&sensor);
                                stat_card(&sensor.kind, glyph, sensor.name)
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>
            </div>
            <section class="panel">
                <h3 class="panel__title">"Actividades Recientes"</h3>
                <ul class="reports__activity">
                    {productions
                        .into_iter()
                        .map(|p| view! { <li>{format!("Cosechadas {} plantas de calidad {}", p.quantity_kg, p.quality)}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
        </div>
    }
}

fn stat_card(title: &str, glyph: &'static str, value: String) -> impl IntoView + use<> {
    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <h4>{title.to_owned()}</h4>
                <span aria-hidden="true">{glyph}</span>
            </div>
            <p class="stat-card__value">{value}</p>
        </div>
    }
}

fn status_chart(bars: Vec<StatusBar>) -> impl IntoView {
    view! {
        <div class="bar-chart">
            {bars
                .into_iter()
                .map(|bar| {
                    view! {
                        <div class="bar-chart__row">
                            <span class="bar-chart__label">{bar.label}</span>
                            <div class="bar-chart__track">
                                <div class="bar-chart__bar" style=format!("width: {}%", bar.percent)></div>
                            </div>
                            <span class="bar-chart__count">{bar.count.to_string()}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

fn sensor_glyph(sensor: &Sensor) -> &'static str {
    match sensor.sensor_kind() {
        Some(SensorKind::Temperature) => "🌡️",
        Some(SensorKind::Humidity) => "💧",
        Some(SensorKind::Light) => "☀️",
        Some(SensorKind::Ph) | None => "🌬️",
    }
}
