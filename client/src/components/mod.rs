//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard sections and shared widgets while reading
//! the `SessionState` and `UiState` contexts provided by `App`. Per-view
//! models live in `state`; components only wire them to the DOM and the API.

pub mod confirm_dialog;
pub mod form_field;
pub mod home_section;
pub mod loading;
pub mod notification;
pub mod plant_status_section;
pub mod plant_table;
pub mod qr_modal;
pub mod recommendations_panel;
pub mod registration_section;
pub mod reports_section;
pub mod sidebar;
pub mod user_management;
pub mod weather_widget;
