use super::*;

// =============================================================
// Plant
// =============================================================

#[test]
fn plant_decodes_full_record() {
    let raw = serde_json::json!({
        "codigo": "P1",
        "especie": "Helecho",
        "ubicacion": "Invernadero 2",
        "estado": "En crecimiento",
        "fecha_estado": "2024-05-01",
        "condiciones": "Sombra parcial",
        "fecha_creacion": "2024-04-01",
        "tags": "interior,sombra",
        "qr": "<img src=\"data:image/png;base64,AAAA\">"
    });
    let plant: Plant = serde_json::from_value(raw).unwrap();
    assert_eq!(plant.code, "P1");
    assert_eq!(plant.species, "Helecho");
    assert_eq!(plant.location, "Invernadero 2");
    assert_eq!(plant.status, Some(PlantStatus::Growing));
    assert_eq!(plant.tags, "interior,sombra");
    assert!(plant.qr.is_some());
}

#[test]
fn plant_decodes_partial_search_row() {
    let raw = serde_json::json!({ "codigo": "P1", "especie": "Fern" });
    let plant: Plant = serde_json::from_value(raw).unwrap();
    assert_eq!(plant.code, "P1");
    assert_eq!(plant.species, "Fern");
    assert_eq!(plant.location, "");
    assert_eq!(plant.status, None);
    assert_eq!(plant.status_label(), "Sin estado");
    assert_eq!(plant.qr, None);
}

#[test]
fn plant_accepts_numeric_code_and_tag_list() {
    let raw = serde_json::json!({ "codigo": 42, "tags": ["a", "b"], "especie": null });
    let plant: Plant = serde_json::from_value(raw).unwrap();
    assert_eq!(plant.code, "42");
    assert_eq!(plant.tags, "a, b");
    assert_eq!(plant.species, "");
}

#[test]
fn plant_without_code_is_rejected() {
    let raw = serde_json::json!({ "especie": "Fern" });
    assert!(serde_json::from_value::<Plant>(raw).is_err());
}

#[test]
fn plant_list_with_blank_or_unknown_status_still_decodes() {
    let raw = serde_json::json!([
        { "codigo": "P1", "estado": "Saludable" },
        { "codigo": "P2", "estado": "" },
        { "codigo": "P3", "estado": "Crítico" },
        { "codigo": "P4", "estado": null },
        { "codigo": "P5", "estado": " Con anomalías " }
    ]);
    let plants: Vec<Plant> = serde_json::from_value(raw).unwrap();
    assert_eq!(plants.len(), 5);
    assert_eq!(plants[0].status, Some(PlantStatus::Healthy));
    assert_eq!(plants[1].status, None);
    assert_eq!(plants[1].status_label(), "Sin estado");
    assert_eq!(plants[2].status, None);
    assert_eq!(plants[3].status, None);
    assert_eq!(plants[4].status, Some(PlantStatus::Anomalous));
}

// =============================================================
// Closed value sets
// =============================================================

#[test]
fn plant_status_labels_round_trip_through_from_label() {
    for status in PlantStatus::ALL {
        assert_eq!(PlantStatus::from_label(status.label()), Some(status));
    }
    assert_eq!(PlantStatus::from_label(""), None);
}

#[test]
fn role_decodes_spanish_labels() {
    let role: Role = serde_json::from_value(serde_json::json!("Cuidador")).unwrap();
    assert_eq!(role, Role::Caretaker);
    assert!(serde_json::from_value::<Role>(serde_json::json!("Root")).is_err());
}

#[test]
fn sensor_kind_lookup_is_exact() {
    assert_eq!(SensorKind::from_label("pH"), Some(SensorKind::Ph));
    assert_eq!(SensorKind::from_label("ph"), None);
    let sensor = Sensor { kind: "Humedad".to_owned(), ..Sensor::default() };
    assert_eq!(sensor.sensor_kind(), Some(SensorKind::Humidity));
}

#[test]
fn production_quality_serializes_to_label() {
    let json = serde_json::to_value(ProductionQuality::Fair).unwrap();
    assert_eq!(json, serde_json::json!("Regular"));
}

// =============================================================
// Users
// =============================================================

#[test]
fn user_info_accepts_misspelled_username_field() {
    let raw = serde_json::json!({ "id": 7, "usernamer": "ana", "role": "Supervisor" });
    let info: UserInfo = serde_json::from_value(raw).unwrap();
    assert_eq!(info.id, "7");
    assert_eq!(info.username, "ana");
    assert_eq!(info.role, Role::Supervisor);
}

#[test]
fn new_user_serializes_role_label() {
    let payload = NewUser { username: "ana".to_owned(), password: "secret".to_owned(), role: Role::Admin };
    assert_eq!(
        serde_json::to_value(payload).unwrap(),
        serde_json::json!({ "username": "ana", "password": "secret", "role": "Administrador" })
    );
}

// =============================================================
// Weather + recommendations
// =============================================================

#[test]
fn weather_day_accepts_numbers_and_missing_precip() {
    let raw = serde_json::json!({ "shortday": "Lun", "high": 21, "low": "9", "skycodeday": 28 });
    let day: WeatherDay = serde_json::from_value(raw).unwrap();
    assert_eq!(day.high, "21");
    assert_eq!(day.low, "9");
    assert_eq!(day.precip, None);
    assert_eq!(day.skycodeday, "28");
}

#[test]
fn weather_day_treats_empty_precip_as_missing() {
    let raw = serde_json::json!({ "precip": "" });
    let day: WeatherDay = serde_json::from_value(raw).unwrap();
    assert_eq!(day.precip, None);
}

#[test]
fn recommendation_body_accepts_bare_string_or_wrapper() {
    let bare: RecommendationBody = serde_json::from_value(serde_json::json!("**Riego:** diario")).unwrap();
    assert_eq!(bare.into_text(), "**Riego:** diario");

    let wrapped: RecommendationBody =
        serde_json::from_value(serde_json::json!({ "recommendation": "Poda ligera" })).unwrap();
    assert_eq!(wrapped.into_text(), "Poda ligera");
}
