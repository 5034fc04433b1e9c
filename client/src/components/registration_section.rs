//! Registration forms for every creatable entity.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section is the same controlled form over a different `Draft`; the
//! entity-specific parts (fields, endpoint, coercion, messages) live in
//! `state::drafts`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::form_field::FormField;
use crate::components::notification::NotificationToast;
use crate::state::drafts::{AnomalyDraft, GrowthDraft, PlantDraft, ProductionDraft, SensorDraft};
use crate::state::forms::{AUTO_DISMISS_MS, Draft, FormState};
use crate::state::session::SessionState;
use crate::util::auth::api_client;
use crate::util::timing::sleep_ms;

/// Clear notification `id` after the auto-dismiss delay unless a newer one replaced it.
fn schedule_dismiss<D: Draft>(form: RwSignal<FormState<D>>, id: u64) {
    spawn_local(async move {
        sleep_ms(AUTO_DISMISS_MS).await;
        form.update(|f| f.dismiss(id));
    });
}

/// Render a registration form for `D`. `on_created` runs after each accepted submit.
pub fn registration_form<D: Draft>(on_created: Option<Callback<()>>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let form = RwSignal::new(FormState::<D>::default());
    let submitting = Signal::derive(move || form.with(|f| f.submitting));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let before = form.with_untracked(FormState::notification_id);
        let payload = form.try_update(FormState::begin_submit).flatten();
        let Some(payload) = payload else {
            if let Some(id) = form.with_untracked(FormState::notification_id).filter(|id| Some(*id) != before) {
                schedule_dismiss(form, id);
            }
            return;
        };

        let client = api_client(session);
        spawn_local(async move {
            let id = match D::submit(client, payload).await {
                Ok(()) => {
                    if let Some(callback) = on_created {
                        callback.run(());
                    }
                    form.try_update(FormState::submit_succeeded)
                }
                Err(err) => form.try_update(|f| f.submit_failed(&err)),
            };
            if let Some(id) = id {
                schedule_dismiss(form, id);
            }
        });
    };

    let fields = D::fields()
        .iter()
        .map(|spec| {
            let key = spec.key;
            view! {
                <FormField
                    spec=*spec
                    value=Signal::derive(move || form.with(|f| f.draft.value(key).to_owned()))
                    on_input=Callback::new(move |value: String| form.update(|f| f.set_field(key, value)))
                    disabled=submitting
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="panel registration">
            <h3 class="panel__title">{D::TITLE}</h3>
            <form class="registration__form" on:submit=on_submit>
                {fields}
                <button class="btn btn--primary registration__submit" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Guardando..." } else { D::SUBMIT_LABEL }}
                </button>
            </form>
            <NotificationToast
                notification=Signal::derive(move || form.with(|f| f.notification.clone()))
                on_dismiss=Callback::new(move |id: u64| form.update(|f| f.dismiss(id)))
            />
        </section>
    }
}

#[component]
pub fn PlantRegistration() -> impl IntoView {
    registration_form::<PlantDraft>(None)
}

#[component]
pub fn GrowthRegistration() -> impl IntoView {
    registration_form::<GrowthDraft>(None)
}

#[component]
pub fn ProductionRegistration() -> impl IntoView {
    registration_form::<ProductionDraft>(None)
}

#[component]
pub fn AnomalyRegistration() -> impl IntoView {
    registration_form::<AnomalyDraft>(None)
}

#[component]
pub fn SensorRegistration() -> impl IntoView {
    registration_form::<SensorDraft>(None)
}
