use super::*;

// =============================================================================
// parse_port / parse_api_base_url
// =============================================================================

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn port_parses_valid_values() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
}

#[test]
fn port_rejects_zero_and_garbage() {
    assert_eq!(parse_port(Some("0")), Err(ConfigError::InvalidPort("0".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".into())));
}

#[test]
fn api_base_url_defaults_when_unset() {
    assert_eq!(parse_api_base_url(None), Ok(DEFAULT_API_BASE_URL.to_owned()));
}

#[test]
fn api_base_url_trims_trailing_slashes() {
    assert_eq!(
        parse_api_base_url(Some("https://plants.example.test/v1/api//")),
        Ok("https://plants.example.test/v1/api".to_owned())
    );
}

#[test]
fn api_base_url_requires_http_scheme_and_host() {
    for bad in ["ftp://plants.test", "plants.test/v1", "https://", "http:///"] {
        assert_eq!(
            parse_api_base_url(Some(bad)),
            Err(ConfigError::InvalidApiBaseUrl(bad.to_owned())),
            "expected rejection for {bad:?}"
        );
    }
}

// =============================================================================
// from_env
// =============================================================================

/// Only one test touches these variables so the default parallel runner stays safe.
///
/// # Safety
/// Callers must not race other threads reading `PORT` or `PLANT_API_BASE_URL`.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("PLANT_API_BASE_URL");
    }
}

#[test]
fn from_env_reads_overrides_defaults_and_errors() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "4100");
        std::env::set_var("PLANT_API_BASE_URL", "http://localhost:9000/v1/api/");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig { port: 4100, api_base_url: "http://localhost:9000/v1/api".into() });

    unsafe { clear_server_env() };
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);

    unsafe { std::env::set_var("PORT", "not-a-port") };

    let err = ServerConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));

    unsafe { clear_server_env() };
}
