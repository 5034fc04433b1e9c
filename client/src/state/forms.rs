//! Registration form drafts and their submit lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every registration section (plants, growth, production, anomalies,
//! sensors, users) renders the same generic component over a `Draft`
//! implementation from `state::drafts`. The component owns one
//! `RwSignal<FormState<D>>`; this module holds the pure transitions.
//!
//! DESIGN
//! ======
//! A draft is the raw text of its inputs. `Draft::payload` applies the
//! per-entity coercion and is the only place a submit can fail before the
//! request is sent. Success resets the draft; failure keeps it so the user can
//! retry without retyping.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use futures::future::LocalBoxFuture;
use serde::Serialize;
use time::Date;
use time::macros::format_description;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{PlantStatus, ProductionQuality, Role, SensorKind};

/// How long a notification stays up before auto-dismissing.
pub const AUTO_DISMISS_MS: u32 = 6_000;

/// A closed option set backing a `<select>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Options {
    PlantStatus,
    Quality,
    SensorKind,
    Role,
}

impl Options {
    pub fn labels(self) -> Vec<&'static str> {
        match self {
            Self::PlantStatus => PlantStatus::ALL.iter().map(|v| v.label()).collect(),
            Self::Quality => ProductionQuality::ALL.iter().map(|v| v.label()).collect(),
            Self::SensorKind => SensorKind::ALL.iter().map(|v| v.label()).collect(),
            Self::Role => Role::ALL.iter().map(|v| v.label()).collect(),
        }
    }
}

/// Input widget for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Password,
    Select(Options),
}

impl FieldKind {
    /// `type` attribute for `<input>` widgets.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Text | Self::Select(_) => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Password => "password",
        }
    }
}

/// One form field: draft key, visible label, widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind }
    }
}

/// Local validation failure; no request is sent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("El campo «{0}» es obligatorio")]
    Missing(&'static str),
    #[error("«{value}» no es un número válido para «{field}»")]
    InvalidNumber { field: &'static str, value: String },
    #[error("«{value}» no es una fecha válida para «{field}»")]
    InvalidDate { field: &'static str, value: String },
    #[error("«{value}» no es una opción válida para «{field}»")]
    InvalidOption { field: &'static str, value: String },
}

/// A registration form's editable state.
pub trait Draft: Clone + Default + PartialEq + Send + Sync + 'static {
    type Payload: Serialize + 'static;

    const TITLE: &'static str;
    /// Create endpoint, relative to the API base.
    const ENDPOINT: &'static str;
    const SUCCESS: &'static str;
    const FAILURE: &'static str;
    const SUBMIT_LABEL: &'static str = "Guardar";

    fn fields() -> &'static [FieldSpec];

    fn value(&self, key: &str) -> &str;

    /// Unknown keys are ignored.
    fn set_value(&mut self, key: &str, value: String);

    /// Coerce the draft into the request body.
    ///
    /// # Errors
    ///
    /// Returns a `DraftError` when a coerced field is empty or malformed.
    fn payload(&self) -> Result<Self::Payload, DraftError>;

    /// Send an accepted payload. Defaults to a POST to [`Draft::ENDPOINT`].
    fn submit(client: ApiClient, payload: Self::Payload) -> LocalBoxFuture<'static, Result<(), ApiError>> {
        Box::pin(async move { client.create(Self::ENDPOINT, &payload).await })
    }

    /// Text shown when the server rejects the submit.
    fn failure_message(_err: &ApiError) -> String {
        Self::FAILURE.to_owned()
    }
}

// =============================================================================
// COERCION HELPERS
// =============================================================================

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(DraftError::Missing(field)) } else { Ok(trimmed) }
}

/// Browser `Date#toISOString` of a date-only input: midnight UTC.
///
/// # Errors
///
/// Returns `DraftError::Missing` or `DraftError::InvalidDate`.
pub fn iso_date(field: &'static str, value: &str) -> Result<String, DraftError> {
    let raw = required(field, value)?;
    let invalid = || DraftError::InvalidDate { field, value: raw.to_owned() };
    let date = Date::parse(raw, format_description!("[year]-[month]-[day]")).map_err(|_| invalid())?;
    date.format(format_description!("[year]-[month]-[day]T00:00:00.000Z")).map_err(|_| invalid())
}

/// # Errors
///
/// Returns `DraftError::Missing` or `DraftError::InvalidNumber` (non-finite values included).
pub fn parse_number(field: &'static str, value: &str) -> Result<f64, DraftError> {
    let raw = required(field, value)?;
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(DraftError::InvalidNumber { field, value: raw.to_owned() }),
    }
}

/// # Errors
///
/// Returns `DraftError::Missing` or `DraftError::InvalidNumber`.
pub fn parse_integer(field: &'static str, value: &str) -> Result<i64, DraftError> {
    let raw = required(field, value)?;
    raw.parse::<i64>().map_err(|_| DraftError::InvalidNumber { field, value: raw.to_owned() })
}

/// # Errors
///
/// Returns `DraftError::Missing` or `DraftError::InvalidOption`.
pub fn parse_option<T>(field: &'static str, value: &str, from_label: fn(&str) -> Option<T>) -> Result<T, DraftError> {
    let raw = required(field, value)?;
    from_label(raw).ok_or_else(|| DraftError::InvalidOption { field, value: raw.to_owned() })
}

// =============================================================================
// LIFECYCLE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notification--success",
            Self::Error => "notification--error",
        }
    }
}

/// Transient toast. `id` lets a delayed dismiss skip a newer notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Draft plus submit status for one form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState<D> {
    pub draft: D,
    pub submitting: bool,
    pub notification: Option<Notification>,
    seq: u64,
}

impl<D: Draft> FormState<D> {
    pub fn set_field(&mut self, key: &str, value: String) {
        self.draft.set_value(key, value);
    }

    /// Start a submit.
    ///
    /// Returns the payload to send, or `None` when a submit is already in
    /// flight or the draft failed coercion (an error notification is set).
    pub fn begin_submit(&mut self) -> Option<D::Payload> {
        if self.submitting {
            return None;
        }
        match self.draft.payload() {
            Ok(payload) => {
                self.submitting = true;
                Some(payload)
            }
            Err(err) => {
                self.notify(err.to_string(), Severity::Error);
                None
            }
        }
    }

    /// Server accepted the record. Returns the notification id to dismiss later.
    pub fn submit_succeeded(&mut self) -> u64 {
        self.submitting = false;
        self.draft = D::default();
        self.notify(D::SUCCESS.to_owned(), Severity::Success)
    }

    /// Server rejected the record or the call failed; the draft is kept.
    pub fn submit_failed(&mut self, err: &ApiError) -> u64 {
        self.submitting = false;
        self.notify(D::failure_message(err), Severity::Error)
    }

    pub fn notify(&mut self, message: String, severity: Severity) -> u64 {
        self.seq += 1;
        self.notification = Some(Notification { id: self.seq, message, severity });
        self.seq
    }

    /// Dismiss notification `id` if it is still the one showing.
    pub fn dismiss(&mut self, id: u64) {
        if self.notification.as_ref().is_some_and(|n| n.id == id) {
            self.notification = None;
        }
    }

    /// Id of the visible notification, if any.
    pub fn notification_id(&self) -> Option<u64> {
        self.notification.as_ref().map(|n| n.id)
    }
}
