//! Five-day forecast card for the home view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::loadable::Loadable;
use crate::state::session::SessionState;
use crate::state::weather::{ForecastDay, forecast};
use crate::util::auth::api_client;

#[component]
pub fn WeatherWidget() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let weather = RwSignal::new(Loadable::<Vec<ForecastDay>>::Loading);

    // Section changes update the session too; only sign-in and sign-out refetch.
    let authed = Memo::new(move |_| session.with(SessionState::is_authenticated));

    Effect::new(move || {
        if !authed.get() {
            weather.set(Loadable::Failed("No hay token de autenticación disponible".to_owned()));
            return;
        }
        let client = api_client(session);
        spawn_local(async move {
            let result = client
                .fetch_weather()
                .await
                .map(|days| forecast(&days))
                .map_err(|err| format!("Error al obtener los datos del clima: {err}"));
            weather.set(Loadable::from_result(result));
        });
    });

    move || match weather.get() {
        Loadable::Loading => view! { <p class="weather weather--muted">"Cargando datos del clima..."</p> }.into_any(),
        Loadable::Failed(message) => view! {
            <div class="weather weather--error">
                <p>{message}</p>
                <p class="weather__hint">
                    "Por favor, intenta recargar la página o inicia sesión nuevamente si el problema persiste."
                </p>
            </div>
        }
        .into_any(),
        Loadable::Ready(days) if days.is_empty() => {
            view! { <p class="weather weather--muted">"No hay datos del clima disponibles."</p> }.into_any()
        }
        Loadable::Ready(days) => view! {
            <section class="panel weather">
                <h3 class="panel__title">"🌡️ Pronóstico del Tiempo - Bogota D.C"</h3>
                <div class="weather__days">
                    {days
                        .into_iter()
                        .map(|day| {
                            view! {
                                <div class="weather__day">
                                    <span class="weather__name">{day.day}</span>
                                    <span class="weather__icon" title=day.icon.label()>{day.icon.glyph()}</span>
                                    <span class="weather__temps">
                                        <strong>{format!("{}°", day.high)}</strong>
                                        " / "
                                        {format!("{}°", day.low)}
                                    </span>
                                    <span class="weather__precip">{format!("💧 {}%", day.precip)}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        }
        .into_any(),
    }
}
