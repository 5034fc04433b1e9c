//! Session state for the signed-in browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<SessionState>` from `App`. The login page calls
//! `sign_in`, the sidebar calls `sign_out`, and the dashboard reads
//! `active_section` to pick what to render. Persisting the token to local
//! storage happens in `util::auth` at those same two transitions.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Role, UserInfo};

/// Dashboard section shown in the main pane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Plants,
    Growth,
    Production,
    Anomalies,
    Sensors,
    PlantStatus,
    Reports,
    Users,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Self::Home,
        Self::Plants,
        Self::Growth,
        Self::Production,
        Self::Anomalies,
        Self::Sensors,
        Self::PlantStatus,
        Self::Reports,
        Self::Users,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Inicio",
            Self::Plants => "Plantas",
            Self::Growth => "Crecimiento",
            Self::Production => "Producción",
            Self::Anomalies => "Anomalías",
            Self::Sensors => "Sensores",
            Self::PlantStatus => "Estado de Plantas",
            Self::Reports => "Reportes",
            Self::Users => "Usuarios",
        }
    }

    /// One-line blurb for the home cards.
    pub fn summary(self) -> String {
        format!("Resumen de {}", self.label().to_lowercase())
    }

    /// Sections linked from the home view (everything but home itself).
    pub fn cards() -> impl Iterator<Item = Section> {
        Self::ALL.into_iter().filter(|s| *s != Self::Home)
    }
}

/// Token, profile, and navigation for the current user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    token: Option<String>,
    pub user: Option<UserInfo>,
    pub active_section: Section,
    /// True until the stored token has been read on startup.
    pub loading: bool,
}

impl SessionState {
    /// Initial state before local storage has been consulted.
    pub fn restoring() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Adopt the token read from storage at startup (blank tokens are ignored).
    pub fn restore(&mut self, token: Option<String>) {
        self.token = token.filter(|t| !t.trim().is_empty());
        self.loading = false;
    }

    /// Attach the profile fetched for a restored token. Ignored once signed out.
    pub fn restore_profile(&mut self, user: UserInfo) {
        if self.is_authenticated() {
            self.user = Some(user);
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn sign_in(&mut self, token: String, user: Option<UserInfo>) {
        self.token = Some(token);
        self.user = user;
        self.active_section = Section::Home;
        self.loading = false;
    }

    /// Drop token and profile and return to the home section.
    pub fn sign_out(&mut self) {
        self.token = None;
        self.user = None;
        self.active_section = Section::Home;
    }

    pub fn select(&mut self, section: Section) {
        self.active_section = section;
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.username.as_str())
    }
}
