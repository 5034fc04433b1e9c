//! Local UI chrome state (theme, sidebar, viewport).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of session state so layout
//! decisions can be made from a single context value.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Widest viewport (CSS pixels) that still renders the mobile layout.
pub const MOBILE_MAX_WIDTH: f64 = 600.0;

const DEFAULT_VIEWPORT_WIDTH: f64 = 1024.0;

/// UI state provided as `RwSignal<UiState>` from the app root.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Sidebar visibility on mobile; always shown on desktop.
    pub sidebar_open: bool,
    pub viewport_width: f64,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: false, sidebar_open: false, viewport_width: DEFAULT_VIEWPORT_WIDTH }
    }
}

impl UiState {
    pub fn is_mobile(&self) -> bool {
        self.viewport_width <= MOBILE_MAX_WIDTH
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Record a new viewport width; leaving the mobile layout closes the drawer.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
        if !self.is_mobile() {
            self.sidebar_open = false;
        }
    }
}
