use super::*;

// =============================================================
// Config + URLs
// =============================================================

#[test]
fn api_config_trims_trailing_slashes() {
    let config = ApiConfig::new("https://api.example.test/v1/api//");
    assert_eq!(config.base_url, "https://api.example.test/v1/api");
}

#[test]
fn api_config_from_document_falls_back_to_default_outside_browser() {
    assert_eq!(ApiConfig::from_document(), ApiConfig::default());
    assert_eq!(ApiConfig::default().base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn client_url_joins_base_and_path() {
    let client = ApiClient::new(&ApiConfig::new("https://api.example.test/v1/api/"), None);
    assert_eq!(client.url("plants"), "https://api.example.test/v1/api/plants");
    assert_eq!(client.url("/auth/login"), "https://api.example.test/v1/api/auth/login");
}

#[test]
fn bearer_requires_non_empty_token() {
    let config = ApiConfig::default();
    assert_eq!(ApiClient::new(&config, None).bearer(), Err(ApiError::MissingToken));
    assert_eq!(ApiClient::new(&config, Some(String::new())).bearer(), Err(ApiError::MissingToken));
    assert_eq!(ApiClient::new(&config, Some("abc".to_owned())).bearer(), Ok("Bearer abc".to_owned()));
}

#[test]
fn resource_paths_encode_identifiers() {
    assert_eq!(plant_search_path(" P1 "), "plants/P1");
    assert_eq!(plant_delete_path("P 1/a"), "plants/delete/P%201%2Fa");
    assert_eq!(user_delete_path("12"), "users/delete/12");
    assert_eq!(recommendation_path("P-9"), "assistance/ia/P-9");
}

#[test]
fn encode_segment_escapes_non_ascii_bytes() {
    assert_eq!(encode_segment("ñ"), "%C3%B1");
    assert_eq!(encode_segment("a.b_c~d"), "a.b_c~d");
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decode_list_rejects_objects() {
    let err = decode_list::<Plant>(serde_json::json!({ "codigo": "P1" })).unwrap_err();
    assert!(matches!(err, ApiError::Shape(_)));
    assert!(err.to_string().contains("un objeto"));
}

#[test]
fn decode_list_accepts_arrays() {
    let plants = decode_list::<Plant>(serde_json::json!([{ "codigo": "P1" }, { "codigo": "P2" }])).unwrap();
    assert_eq!(plants.len(), 2);
    assert_eq!(plants[1].code, "P2");
}

#[test]
fn decode_list_reports_bad_records_as_decode_errors() {
    let err = decode_list::<Plant>(serde_json::json!([{ "especie": "sin código" }])).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_one_or_many_wraps_single_object() {
    let plants = decode_one_or_many::<Plant>(serde_json::json!({ "codigo": "P1", "especie": "Fern" })).unwrap();
    assert_eq!(plants.len(), 1);
    assert_eq!(plants[0].species, "Fern");
}

#[test]
fn decode_one_or_many_passes_lists_through() {
    let plants = decode_one_or_many::<Plant>(serde_json::json!([{ "codigo": "P1" }])).unwrap();
    assert_eq!(plants.len(), 1);
}

#[test]
fn decode_one_or_many_rejects_scalars() {
    let err = decode_one_or_many::<Plant>(serde_json::json!("P1")).unwrap_err();
    assert!(matches!(err, ApiError::Shape(_)));
}

#[test]
fn parse_body_reports_malformed_json() {
    assert!(matches!(parse_body("not json"), Err(ApiError::Decode(_))));
    assert_eq!(parse_body("[]").unwrap(), serde_json::json!([]));
}

#[test]
fn method_names_match_http_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}
