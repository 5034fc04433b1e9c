//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by view (`plant_table`, `forms`, `reports`, ...) so each
//! component depends on a small focused model. `session` and `ui` are the
//! two app-wide contexts provided from `App`; the rest are owned by the
//! component that renders them.

pub mod drafts;
pub mod forms;
pub mod loadable;
pub mod plant_table;
pub mod recommendations;
pub mod reports;
pub mod session;
pub mod ui;
pub mod users;
pub mod weather;
