//! One labelled input bound to a draft field.

use leptos::prelude::*;

use crate::state::forms::{FieldKind, FieldSpec};

#[component]
pub fn FormField(
    spec: FieldSpec,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let id = format!("field-{}", spec.key);
    let control = match spec.kind {
        FieldKind::Select(options) => view! {
            <select
                id=id.clone()
                class="form-field__input"
                prop:value=move || value.get()
                on:change=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                <option value="">{format!("Seleccione {}", spec.label.to_lowercase())}</option>
                {options
                    .labels()
                    .into_iter()
                    .map(|label| view! { <option value=label>{label}</option> })
                    .collect::<Vec<_>>()}
            </select>
        }
        .into_any(),
        kind => view! {
            <input
                id=id.clone()
                class="form-field__input"
                type=kind.input_type()
                step=(kind == FieldKind::Number).then_some("any")
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-field">
            <label class="form-field__label" for=id>
                {spec.label}
            </label>
            {control}
        </div>
    }
}
