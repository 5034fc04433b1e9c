//! Transient toast for form outcomes.

use leptos::prelude::*;

use crate::state::forms::Notification;

#[component]
pub fn NotificationToast(
    #[prop(into)] notification: Signal<Option<Notification>>,
    on_dismiss: Callback<u64>,
) -> impl IntoView {
    move || {
        notification.get().map(|n| {
            let id = n.id;
            view! {
                <div class=format!("notification {}", n.severity.css_class()) role="alert">
                    <span class="notification__message">{n.message}</span>
                    <button class="notification__close" aria-label="Cerrar" on:click=move |_| on_dismiss.run(id)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
