//! Wire types mirrored from the plant-tracker REST API.
//!
//! DESIGN
//! ======
//! The API speaks Spanish field names; Rust fields are English and mapped
//! with `serde` renames. Read models are lenient (missing text fields default
//! to empty, numbers are accepted where strings are expected) so partial
//! search results still render. Closed value sets (`PlantStatus`, `Role`, ...)
//! are strict: an unknown label is a decode error at the API boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// =============================================================================
// CLOSED VALUE SETS
// =============================================================================

/// Health status of a plant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlantStatus {
    #[serde(rename = "Saludable")]
    Healthy,
    #[serde(rename = "En crecimiento")]
    Growing,
    #[serde(rename = "En producción")]
    Producing,
    #[serde(rename = "Con anomalías")]
    Anomalous,
}

impl PlantStatus {
    pub const ALL: [PlantStatus; 4] = [Self::Healthy, Self::Growing, Self::Producing, Self::Anomalous];

    /// Label used on the wire and in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Healthy => "Saludable",
            Self::Growing => "En crecimiento",
            Self::Producing => "En producción",
            Self::Anomalous => "Con anomalías",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Harvest quality grade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductionQuality {
    #[serde(rename = "Excelente")]
    Excellent,
    #[serde(rename = "Buena")]
    Good,
    #[serde(rename = "Regular")]
    Fair,
    #[serde(rename = "Mala")]
    Poor,
}

impl ProductionQuality {
    pub const ALL: [ProductionQuality; 4] = [Self::Excellent, Self::Good, Self::Fair, Self::Poor];

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excelente",
            Self::Good => "Buena",
            Self::Fair => "Regular",
            Self::Poor => "Mala",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.label() == label)
    }
}

/// Kind of environmental sensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensorKind {
    #[serde(rename = "Temperatura")]
    Temperature,
    #[serde(rename = "Humedad")]
    Humidity,
    #[serde(rename = "pH")]
    Ph,
    #[serde(rename = "Luz")]
    Light,
}

impl SensorKind {
    pub const ALL: [SensorKind; 4] = [Self::Temperature, Self::Humidity, Self::Ph, Self::Light];

    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperatura",
            Self::Humidity => "Humedad",
            Self::Ph => "pH",
            Self::Light => "Luz",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == label)
    }
}

/// Account role. Validated at decode time; unknown role strings are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Administrador")]
    Admin,
    #[serde(rename = "Supervisor")]
    Supervisor,
    #[serde(rename = "Cuidador")]
    Caretaker,
}

impl Role {
    pub const ALL: [Role; 3] = [Self::Admin, Self::Supervisor, Self::Caretaker];

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrador",
            Self::Supervisor => "Supervisor",
            Self::Caretaker => "Cuidador",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }
}

// =============================================================================
// READ MODELS
// =============================================================================

/// A plant row as returned by `GET plants` or a plant search.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Plant {
    #[serde(rename = "codigo", deserialize_with = "string_or_number")]
    pub code: String,
    #[serde(rename = "especie", default, deserialize_with = "string_or_number")]
    pub species: String,
    #[serde(rename = "ubicacion", default, deserialize_with = "string_or_number")]
    pub location: String,
    #[serde(rename = "estado", default, deserialize_with = "lenient_status")]
    pub status: Option<PlantStatus>,
    #[serde(rename = "fecha_estado", default, deserialize_with = "string_or_number")]
    pub status_date: String,
    #[serde(rename = "condiciones", default, deserialize_with = "string_or_number")]
    pub conditions: String,
    #[serde(rename = "fecha_creacion", default, deserialize_with = "string_or_number")]
    pub created_on: String,
    #[serde(default, deserialize_with = "text_or_list")]
    pub tags: String,
    #[serde(default)]
    pub qr: Option<String>,
}

impl Plant {
    pub fn status_label(&self) -> &'static str {
        self.status.map_or("Sin estado", PlantStatus::label)
    }
}

/// A growth measurement (`evolution` resource).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GrowthRecord {
    #[serde(rename = "id_planta", default, deserialize_with = "string_or_number")]
    pub plant_id: String,
    #[serde(rename = "altura", default, deserialize_with = "string_or_number")]
    pub height_cm: String,
    #[serde(rename = "diametro", default, deserialize_with = "string_or_number")]
    pub diameter_cm: String,
    #[serde(rename = "num_hojas", default, deserialize_with = "string_or_number")]
    pub leaf_count: String,
    #[serde(rename = "fecha_medicion", default, deserialize_with = "string_or_number")]
    pub measured_on: String,
}

/// A harvest record (`production` resource).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProductionRecord {
    #[serde(rename = "id_planta", default, deserialize_with = "string_or_number")]
    pub plant_id: String,
    #[serde(rename = "cantidad", default, deserialize_with = "string_or_number")]
    pub quantity_kg: String,
    #[serde(rename = "fecha_cosecha", default, deserialize_with = "string_or_number")]
    pub harvested_on: String,
    #[serde(rename = "calidad", default, deserialize_with = "string_or_number")]
    pub quality: String,
    #[serde(rename = "destino", default, deserialize_with = "string_or_number")]
    pub destination: String,
}

/// A detected anomaly (`anomalies` resource).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Anomaly {
    #[serde(rename = "id_planta", default, deserialize_with = "string_or_number")]
    pub plant_id: String,
    #[serde(rename = "descripcion", default, deserialize_with = "string_or_number")]
    pub description: String,
    #[serde(rename = "fecha_deteccion", default, deserialize_with = "string_or_number")]
    pub detected_on: String,
    #[serde(rename = "tratamiento", default, deserialize_with = "string_or_number")]
    pub treatment: String,
}

/// A registered sensor (`sensor` resource).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Sensor {
    #[serde(rename = "nombre", default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(rename = "tipo", default, deserialize_with = "string_or_number")]
    pub kind: String,
    #[serde(rename = "ubicacion", default, deserialize_with = "string_or_number")]
    pub location: String,
    #[serde(rename = "fecha_instalacion", default, deserialize_with = "string_or_number")]
    pub installed_on: String,
}

impl Sensor {
    pub fn sensor_kind(&self) -> Option<SensorKind> {
        SensorKind::from_label(&self.kind)
    }
}

/// A user account as listed by `GET users`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub username: String,
    pub role: Role,
}

/// Profile of the signed-in user (`GET auth/info-user`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserInfo {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, alias = "usernamer", deserialize_with = "string_or_number")]
    pub username: String,
    pub role: Role,
}

/// One forecast day from `GET weather`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct WeatherDay {
    #[serde(default, deserialize_with = "string_or_number")]
    pub shortday: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub high: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub low: String,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub precip: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub skycodeday: String,
}

/// `POST auth/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Care recommendation body from `GET assistance/ia/{id}`.
///
/// Accepts either a bare JSON string or an object wrapping the text.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecommendationBody {
    Text(String),
    Wrapped {
        #[serde(alias = "recommendation", alias = "recomendacion", alias = "respuesta", alias = "message")]
        text: String,
    },
}

impl RecommendationBody {
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) | Self::Wrapped { text } => text,
        }
    }
}

// =============================================================================
// WRITE PAYLOADS
// =============================================================================

/// `POST auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST plants/create` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPlant {
    pub codigo: String,
    pub especie: String,
    pub ubicacion: String,
    pub estado: PlantStatus,
    pub fecha_estado: String,
    pub condiciones: String,
    pub fecha_creacion: String,
    pub tags: String,
}

/// `POST evolution/create` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewGrowthRecord {
    pub id_planta: String,
    pub altura: String,
    pub diametro: String,
    pub num_hojas: String,
    pub fecha_medicion: String,
}

/// `POST production/create` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewProductionRecord {
    pub id_planta: String,
    pub cantidad: f64,
    pub fecha_cosecha: String,
    pub calidad: ProductionQuality,
    pub destino: String,
}

/// `POST anomalies/create` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewAnomaly {
    pub id_planta: i64,
    pub descripcion: String,
    pub fecha_deteccion: String,
    pub tratamiento: String,
}

/// `POST sensor/create` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewSensor {
    pub nombre: String,
    pub tipo: SensorKind,
    pub ubicacion: String,
    pub fecha_instalacion: String,
}

/// `POST users/create` body. The password is write-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: Role,
}

// =============================================================================
// LENIENT DECODERS
// =============================================================================

fn scalar_to_string<E: serde::de::Error>(value: Value) -> Result<String, E> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(E::custom(format!("expected a string or number, got {other}"))),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_to_string(Value::deserialize(deserializer)?)
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = scalar_to_string::<D::Error>(Value::deserialize(deserializer)?)?;
    Ok(if text.is_empty() { None } else { Some(text) })
}

/// Blank or unrecognised `estado` values decode as no status so one bad row
/// cannot reject a whole plant list.
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<PlantStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(label) => PlantStatus::from_label(label.trim()),
        _ => None,
    })
}

/// Tags arrive either as a comma-separated string or as a list.
fn text_or_list<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => {
            let parts = items
                .into_iter()
                .map(scalar_to_string::<D::Error>)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(parts.join(", "))
        }
        other => scalar_to_string(other),
    }
}
