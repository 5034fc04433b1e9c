use super::*;
use crate::net::error::status_error;

fn fill<D: Draft>(pairs: &[(&str, &str)]) -> D {
    let mut draft = D::default();
    for (key, value) in pairs {
        draft.set_value(key, (*value).to_owned());
    }
    draft
}

// =============================================================
// Field tables
// =============================================================

#[test]
fn every_field_key_round_trips_through_set_value() {
    fn check<D: Draft>() {
        let mut draft = D::default();
        for field in D::fields() {
            draft.set_value(field.key, format!("v-{}", field.key));
            assert_eq!(draft.value(field.key), format!("v-{}", field.key), "{}", D::TITLE);
        }
    }
    check::<PlantDraft>();
    check::<GrowthDraft>();
    check::<ProductionDraft>();
    check::<AnomalyDraft>();
    check::<SensorDraft>();
    check::<UserDraft>();
}

#[test]
fn unknown_keys_are_ignored() {
    let mut draft = PlantDraft::default();
    draft.set_value("fecha_actual", "2024-01-01".to_owned());
    assert_eq!(draft, PlantDraft::default());
    assert_eq!(draft.value("fecha_actual"), "");
}

#[test]
fn endpoints_target_create_routes() {
    assert_eq!(PlantDraft::ENDPOINT, "plants/create");
    assert_eq!(GrowthDraft::ENDPOINT, "evolution/create");
    assert_eq!(ProductionDraft::ENDPOINT, "production/create");
    assert_eq!(AnomalyDraft::ENDPOINT, "anomalies/create");
    assert_eq!(SensorDraft::ENDPOINT, "sensor/create");
    assert_eq!(UserDraft::ENDPOINT, "users/create");
}

// =============================================================
// Coercion
// =============================================================

#[test]
fn plant_payload_keeps_dates_as_typed() {
    let draft: PlantDraft = fill(&[("codigo", "P1"), ("estado", "En producción"), ("fecha_estado", "2024-05-01")]);
    let body = serde_json::to_value(draft.payload().unwrap()).unwrap();
    assert_eq!(body["estado"], "En producción");
    assert_eq!(body["fecha_estado"], "2024-05-01");
    assert_eq!(body["tags"], "");
}

#[test]
fn plant_payload_requires_status() {
    let draft: PlantDraft = fill(&[("codigo", "P1")]);
    assert_eq!(draft.payload(), Err(DraftError::Missing("Estado")));
}

#[test]
fn growth_payload_sends_strings() {
    let draft: GrowthDraft = fill(&[("id_planta", "3"), ("altura", "12.5"), ("num_hojas", "8")]);
    let body = serde_json::to_value(draft.payload().unwrap()).unwrap();
    assert_eq!(body["id_planta"], "3");
    assert_eq!(body["altura"], "12.5");
    assert_eq!(body["num_hojas"], "8");
}

#[test]
fn production_payload_coerces_quantity_and_date() {
    let draft: ProductionDraft = fill(&[
        ("id_planta", "3"),
        ("cantidad", "4.75"),
        ("fecha_cosecha", "2024-06-15"),
        ("calidad", "Buena"),
        ("destino", "Mercado"),
    ]);
    let body = serde_json::to_value(draft.payload().unwrap()).unwrap();
    assert_eq!(body["cantidad"], 4.75);
    assert_eq!(body["fecha_cosecha"], "2024-06-15T00:00:00.000Z");
    assert_eq!(body["calidad"], "Buena");
    assert_eq!(body["id_planta"], "3");
}

#[test]
fn production_payload_rejects_bad_quantity() {
    let draft: ProductionDraft = fill(&[("cantidad", "mucho"), ("fecha_cosecha", "2024-06-15"), ("calidad", "Buena")]);
    assert!(matches!(draft.payload(), Err(DraftError::InvalidNumber { field: "Cantidad (kg)", .. })));
}

#[test]
fn anomaly_payload_coerces_plant_id_and_date() {
    let draft: AnomalyDraft = fill(&[("id_planta", "17"), ("descripcion", "Hojas amarillas"), ("fecha_deteccion", "2024-02-29")]);
    let body = serde_json::to_value(draft.payload().unwrap()).unwrap();
    assert_eq!(body["id_planta"], 17);
    assert_eq!(body["fecha_deteccion"], "2024-02-29T00:00:00.000Z");
}

#[test]
fn sensor_payload_requires_known_kind() {
    let ok: SensorDraft = fill(&[("nombre", "S1"), ("tipo", "pH")]);
    assert_eq!(serde_json::to_value(ok.payload().unwrap()).unwrap()["tipo"], "pH");

    let bad: SensorDraft = fill(&[("nombre", "S1"), ("tipo", "Presión")]);
    assert!(matches!(bad.payload(), Err(DraftError::InvalidOption { field: "Tipo", .. })));
}

#[test]
fn user_payload_maps_role_label() {
    let draft: UserDraft = fill(&[("username", "ana"), ("password", "secreto"), ("role", "Cuidador")]);
    assert_eq!(draft.payload().unwrap().role, Role::Caretaker);

    let missing: UserDraft = fill(&[("username", "ana"), ("role", "Cuidador")]);
    assert_eq!(missing.payload(), Err(DraftError::Missing("Contraseña")));
}

#[test]
fn user_failure_prefers_server_message() {
    let err = status_error(409, r#"{"message":"El usuario ya existe"}"#);
    assert_eq!(UserDraft::failure_message(&err), "El usuario ya existe");
    assert_eq!(UserDraft::failure_message(&status_error(500, "")), "Error al crear el usuario");
    assert_eq!(PlantDraft::failure_message(&err), "Error al registrar la planta");
}
