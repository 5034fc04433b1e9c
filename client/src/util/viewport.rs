//! Viewport width tracking for responsive layout decisions.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Current `window.innerWidth`, when running in a browser.
pub fn current_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.inner_width().ok()).and_then(|v| v.as_f64())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Seed `UiState::viewport_width` and keep it updated on `resize`.
pub fn install_resize_listener(ui: RwSignal<UiState>) {
    if let Some(width) = current_width() {
        ui.update(|u| u.set_viewport_width(width));
    }
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(width) = current_width() {
                ui.update(|u| u.set_viewport_width(width));
            }
        });
        on_cleanup(move || handle.remove());
    }
}
