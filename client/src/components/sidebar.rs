//! Section navigation, theme toggle, and logout.
//!
//! Always visible on desktop. On mobile it is a drawer opened from the
//! dashboard header and closed again after a section is picked.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Section, SessionState};
use crate::state::ui::UiState;
use crate::util::{auth, dark_mode};

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let class = move || {
        let (mobile, open) = ui.with(|u| (u.is_mobile(), u.sidebar_open));
        match (mobile, open) {
            (false, _) => "sidebar",
            (true, true) => "sidebar sidebar--drawer sidebar--open",
            (true, false) => "sidebar sidebar--drawer",
        }
    };

    let on_toggle_theme = move |_| {
        let next = dark_mode::toggle(ui.with_untracked(|u| u.dark_mode));
        ui.update(|u| u.dark_mode = next);
    };

    let on_logout = move |_| {
        auth::sign_out(session);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <aside class=class>
            <h2 class="sidebar__title">"Rastreador de salud vegetal"</h2>
            <p class="sidebar__user">
                {move || {
                    session.with(|s| match s.role() {
                        Some(role) => format!("{} · {}", s.display_name(), role.label()),
                        None => s.display_name().to_owned(),
                    })
                }}
            </p>
            <nav class="sidebar__nav">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        let item_class = move || {
                            if session.with(|s| s.active_section == section) {
                                "sidebar__item sidebar__item--active"
                            } else {
                                "sidebar__item"
                            }
                        };
                        view! {
                            <button
                                class=item_class
                                on:click=move |_| {
                                    session.update(|s| s.select(section));
                                    ui.update(|u| u.sidebar_open = false);
                                }
                            >
                                {section.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <button class="btn sidebar__theme" on:click=on_toggle_theme>
                {move || if ui.with(|u| u.dark_mode) { "Modo Claro" } else { "Modo Oscuro" }}
            </button>
            <button class="btn btn--danger sidebar__logout" on:click=on_logout>
                "Cerrar sesión"
            </button>
        </aside>
    }
}
