//! Concrete drafts for each registration form.

#[cfg(test)]
#[path = "drafts_test.rs"]
mod drafts_test;

use futures::future::LocalBoxFuture;

use crate::net::api::{ApiClient, USERS_CREATE_PATH};
use crate::net::error::ApiError;
use crate::net::types::{
    NewAnomaly, NewGrowthRecord, NewPlant, NewProductionRecord, NewSensor, NewUser, PlantStatus, ProductionQuality,
    Role, SensorKind,
};
use crate::state::forms::{
    Draft, DraftError, FieldKind, FieldSpec, Options, iso_date, parse_integer, parse_number, parse_option,
};

// =============================================================================
// PLANT
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlantDraft {
    pub codigo: String,
    pub especie: String,
    pub ubicacion: String,
    pub estado: String,
    pub fecha_estado: String,
    pub condiciones: String,
    pub fecha_creacion: String,
    pub tags: String,
}

const PLANT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("codigo", "Código", FieldKind::Text),
    FieldSpec::new("especie", "Especie", FieldKind::Text),
    FieldSpec::new("ubicacion", "Ubicación", FieldKind::Text),
    FieldSpec::new("estado", "Estado", FieldKind::Select(Options::PlantStatus)),
    FieldSpec::new("fecha_estado", "Fecha de Estado", FieldKind::Date),
    FieldSpec::new("condiciones", "Condiciones", FieldKind::Text),
    FieldSpec::new("fecha_creacion", "Fecha de Creación", FieldKind::Date),
    FieldSpec::new("tags", "Tags", FieldKind::Text),
];

impl Draft for PlantDraft {
    type Payload = NewPlant;

    const TITLE: &'static str = "Registro de Planta";
    const ENDPOINT: &'static str = "plants/create";
    const SUCCESS: &'static str = "Planta registrada exitosamente";
    const FAILURE: &'static str = "Error al registrar la planta";

    fn fields() -> &'static [FieldSpec] {
        PLANT_FIELDS
    }

    fn value(&self, key: &str) -> &str {
        match key {
            "codigo" => &self.codigo,
            "especie" => &self.especie,
            "ubicacion" => &self.ubicacion,
            "estado" => &self.estado,
            "fecha_estado" => &self.fecha_estado,
            "condiciones" => &self.condiciones,
            "fecha_creacion" => &self.fecha_creacion,
            "tags" => &self.tags,
            _ => "",
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        let slot = match key {
            "codigo" => &mut self.codigo,
            "especie" => &mut self.especie,
            "ubicacion" => &mut self.ubicacion,
            "estado" => &mut self.estado,
            "fecha_estado" => &mut self.fecha_estado,
            "condiciones" => &mut self.condiciones,
            "fecha_creacion" => &mut self.fecha_creacion,
            "tags" => &mut self.tags,
            _ => return,
        };
        *slot = value;
    }

    fn payload(&self) -> Result<NewPlant, DraftError> {
        Ok(NewPlant {
            codigo: self.codigo.clone(),
            especie: self.especie.clone(),
            ubicacion: self.ubicacion.clone(),
            estado: parse_option("Estado", &self.estado, PlantStatus::from_label)?,
            fecha_estado: self.fecha_estado.clone(),
            condiciones: self.condiciones.clone(),
            fecha_creacion: self.fecha_creacion.clone(),
            tags: self.tags.clone(),
        })
    }
}

// =============================================================================
// GROWTH
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GrowthDraft {
    pub id_planta: String,
    pub altura: String,
    pub diametro: String,
    pub num_hojas: String,
    pub fecha_medicion: String,
}

const GROWTH_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("id_planta", "ID Planta", FieldKind::Number),
    FieldSpec::new("altura", "Altura (cm)", FieldKind::Number),
    FieldSpec::new("diametro", "Diámetro (cm)", FieldKind::Number),
    FieldSpec::new("num_hojas", "Número de Hojas", FieldKind::Number),
    FieldSpec::new("fecha_medicion", "Fecha Medición", FieldKind::Date),
];

impl Draft for GrowthDraft {
    type Payload = NewGrowthRecord;

    const TITLE: &'static str = "Registro de Crecimiento";
    const ENDPOINT: &'static str = "evolution/create";
    const SUCCESS: &'static str = "Registro de crecimiento guardado exitosamente";
    const FAILURE: &'static str = "Error al guardar el registro de crecimiento";

    fn fields() -> &'static [FieldSpec] {
        GROWTH_FIELDS
    }

    fn value(&self, key: &str) -> &str {
        match key {
            "id_planta" => &self.id_planta,
            "altura" => &self.altura,
            "diametro" => &self.diametro,
            "num_hojas" => &self.num_hojas,
            "fecha_medicion" => &self.fecha_medicion,
            _ => "",
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        let slot = match key {
            "id_planta" => &mut self.id_planta,
            "altura" => &mut self.altura,
            "diametro" => &mut self.diametro,
            "num_hojas" => &mut self.num_hojas,
            "fecha_medicion" => &mut self.fecha_medicion,
            _ => return,
        };
        *slot = value;
    }

    fn payload(&self) -> Result<NewGrowthRecord, DraftError> {
        Ok(NewGrowthRecord {
            id_planta: self.id_planta.clone(),
            altura: self.altura.clone(),
            diametro: self.diametro.clone(),
            num_hojas: self.num_hojas.clone(),
            fecha_medicion: self.fecha_medicion.clone(),
        })
    }
}

// =============================================================================
// PRODUCTION
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductionDraft {
    pub id_planta: String,
    pub cantidad: String,
    pub fecha_cosecha: String,
    pub calidad: String,
    pub destino: String,
}

const PRODUCTION_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("id_planta", "ID Planta", FieldKind::Number),
    FieldSpec::new("cantidad", "Cantidad (kg)", FieldKind::Number),
    FieldSpec::new("fecha_cosecha", "Fecha Cosecha", FieldKind::Date),
    FieldSpec::new("calidad", "Calidad", FieldKind::Select(Options::Quality)),
    FieldSpec::new("destino", "Destino", FieldKind::Text),
];

impl Draft for ProductionDraft {
    type Payload = NewProductionRecord;

    const TITLE: &'static str = "Registro de Producción";
    const ENDPOINT: &'static str = "production/create";
    const SUCCESS: &'static str = "Producción registrada exitosamente";
    const FAILURE: &'static str = "Error al registrar la producción";

    fn fields() -> &'static [FieldSpec] {
        PRODUCTION_FIELDS
    }

    fn value(&self, key: &str) -> &str {
        match key {
            "id_planta" => &self.id_planta,
            "cantidad" => &self.cantidad,
            "fecha_cosecha" => &self.fecha_cosecha,
            "calidad" => &self.calidad,
            "destino" => &self.destino,
            _ => "",
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        let slot = match key {
            "id_planta" => &mut self.id_planta,
            "cantidad" => &mut self.cantidad,
            "fecha_cosecha" => &mut self.fecha_cosecha,
            "calidad" => &mut self.calidad,
            "destino" => &mut self.destino,
            _ => return,
        };
        *slot = value;
    }

    fn payload(&self) -> Result<NewProductionRecord, DraftError> {
        Ok(NewProductionRecord {
            id_planta: self.id_planta.clone(),
            cantidad: parse_number("Cantidad (kg)", &self.cantidad)?,
            fecha_cosecha: iso_date("Fecha Cosecha", &self.fecha_cosecha)?,
            calidad: parse_option("Calidad", &self.calidad, ProductionQuality::from_label)?,
            destino: self.destino.clone(),
        })
    }
}

// =============================================================================
// ANOMALY
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnomalyDraft {
    pub id_planta: String,
    pub descripcion: String,
    pub fecha_deteccion: String,
    pub tratamiento: String,
}

const ANOMALY_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("id_planta", "ID Planta", FieldKind::Number),
    FieldSpec::new("descripcion", "Descripción", FieldKind::Text),
    FieldSpec::new("fecha_deteccion", "Fecha Detección", FieldKind::Date),
    FieldSpec::new("tratamiento", "Tratamiento", FieldKind::Text),
];

impl Draft for AnomalyDraft {
    type Payload = NewAnomaly;

    const TITLE: &'static str = "Registro de Anomalías";
    const ENDPOINT: &'static str = "anomalies/create";
    const SUCCESS: &'static str = "Anomalía registrada exitosamente";
    const FAILURE: &'static str = "Error al registrar la anomalía";

    fn fields() -> &'static [FieldSpec] {
        ANOMALY_FIELDS
    }

    fn value(&self, key: &str) -> &str {
        match key {
            "id_planta" => &self.id_planta,
            "descripcion" => &self.descripcion,
            "fecha_deteccion" => &self.fecha_deteccion,
            "tratamiento" => &self.tratamiento,
            _ => "",
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        let slot = match key {
            "id_planta" => &mut self.id_planta,
            "descripcion" => &mut self.descripcion,
            "fecha_deteccion" => &mut self.fecha_deteccion,
            "tratamiento" => &mut self.tratamiento,
            _ => return,
        };
        *slot = value;
    }

    fn payload(&self) -> Result<NewAnomaly, DraftError> {
        Ok(NewAnomaly {
            id_planta: parse_integer("ID Planta", &self.id_planta)?,
            descripcion: self.descripcion.clone(),
            fecha_deteccion: iso_date("Fecha Detección", &self.fecha_deteccion)?,
            tratamiento: self.tratamiento.clone(),
        })
    }
}

// =============================================================================
// SENSOR
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SensorDraft {
    pub nombre: String,
    pub tipo: String,
    pub ubicacion: String,
    pub fecha_instalacion: String,
}

const SENSOR_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("nombre", "Nombre Sensor", FieldKind::Text),
    FieldSpec::new("tipo", "Tipo", FieldKind::Select(Options::SensorKind)),
    FieldSpec::new("ubicacion", "Ubicación", FieldKind::Text),
    FieldSpec::new("fecha_instalacion", "Fecha Instalación", FieldKind::Date),
];

impl Draft for SensorDraft {
    type Payload = NewSensor;

    const TITLE: &'static str = "Registro de Sensor";
    const ENDPOINT: &'static str = "sensor/create";
    const SUCCESS: &'static str = "Sensor registrado exitosamente";
    const FAILURE: &'static str = "Error al registrar el sensor";

    fn fields() -> &'static [FieldSpec] {
        SENSOR_FIELDS
    }

    fn value(&self, key: &str) -> &str {
        match key {
            "nombre" => &self.nombre,
            "tipo" => &self.tipo,
            "ubicacion" => &self.ubicacion,
            "fecha_instalacion" => &self.fecha_instalacion,
            _ => "",
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        let slot = match key {
            "nombre" => &mut self.nombre,
            "tipo" => &mut self.tipo,
            "ubicacion" => &mut self.ubicacion,
            "fecha_instalacion" => &mut self.fecha_instalacion,
            _ => return,
        };
        *slot = value;
    }

    fn payload(&self) -> Result<NewSensor, DraftError> {
        Ok(NewSensor {
            nombre: self.nombre.clone(),
            tipo: parse_option("Tipo", &self.tipo, SensorKind::from_label)?,
            ubicacion: self.ubicacion.clone(),
            fecha_instalacion: self.fecha_instalacion.clone(),
        })
    }
}

// =============================================================================
// USER
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub username: String,
    pub password: String,
    pub role: String,
}

const USER_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("username", "Nombre de usuario", FieldKind::Text),
    FieldSpec::new("password", "Contraseña", FieldKind::Password),
    FieldSpec::new("role", "Rol", FieldKind::Select(Options::Role)),
];

impl Draft for UserDraft {
    type Payload = NewUser;

    const TITLE: &'static str = "Crear Usuario";
    const ENDPOINT: &'static str = USERS_CREATE_PATH;
    const SUCCESS: &'static str = "Usuario creado exitosamente";
    const FAILURE: &'static str = "Error al crear el usuario";
    const SUBMIT_LABEL: &'static str = "Crear Usuario";

    fn fields() -> &'static [FieldSpec] {
        USER_FIELDS
    }

    fn value(&self, key: &str) -> &str {
        match key {
            "username" => &self.username,
            "password" => &self.password,
            "role" => &self.role,
            _ => "",
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        let slot = match key {
            "username" => &mut self.username,
            "password" => &mut self.password,
            "role" => &mut self.role,
            _ => return,
        };
        *slot = value;
    }

    fn payload(&self) -> Result<NewUser, DraftError> {
        Ok(NewUser {
            username: required_text("Nombre de usuario", &self.username)?,
            password: required_text("Contraseña", &self.password)?,
            role: parse_option("Rol", &self.role, Role::from_label)?,
        })
    }

    fn submit(client: ApiClient, payload: NewUser) -> LocalBoxFuture<'static, Result<(), ApiError>> {
        Box::pin(async move { client.create_user(&payload).await })
    }

    fn failure_message(err: &ApiError) -> String {
        err.message_or(Self::FAILURE)
    }
}

fn required_text(field: &'static str, value: &str) -> Result<String, DraftError> {
    if value.trim().is_empty() { Err(DraftError::Missing(field)) } else { Ok(value.to_owned()) }
}
