//! REST client for the external plant-tracker API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each call is a single request: no retry, no timeout, no backoff. Failures
//! come back as `ApiError` so the calling component decides how to surface
//! them; the helpers here only log at `warn` in the browser console.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::status_error;
use super::types::{
    Anomaly, GrowthRecord, LoginRequest, LoginResponse, NewUser, Plant, ProductionRecord, RecommendationBody, Sensor,
    User, UserInfo, WeatherDay,
};

/// Base URL used when the host does not provide one.
pub const DEFAULT_API_BASE_URL: &str = "https://backend-hackaton-production-f38b.up.railway.app/v1/api";

/// `<meta name=...>` carrying the base URL from the host to the browser.
pub const API_BASE_META_NAME: &str = "plant-api-base";

const LOGIN_PATH: &str = "auth/login";
const USER_INFO_PATH: &str = "auth/info-user";
const PLANTS_PATH: &str = "plants";
const EVOLUTION_PATH: &str = "evolution";
const PRODUCTION_PATH: &str = "production";
const ANOMALIES_PATH: &str = "anomalies";
const SENSORS_PATH: &str = "sensor";
const USERS_PATH: &str = "users";
pub const USERS_CREATE_PATH: &str = "users/create";
const WEATHER_PATH: &str = "weather";

/// Where the external API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    /// Read the base URL the host rendered into the document head.
    ///
    /// Falls back to [`DEFAULT_API_BASE_URL`] when the tag is missing, empty,
    /// or when running outside the browser.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{API_BASE_META_NAME}\"]");
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"))
                .filter(|v| !v.trim().is_empty());
            if let Some(base) = content {
                return Self::new(&base);
            }
        }
        Self::default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A configured API handle carrying the session's bearer token.
///
/// Cheap to build; components construct one per call from the session
/// context rather than holding it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, token: Option<String>) -> Self {
        Self { base_url: config.base_url.clone(), token }
    }

    /// Absolute URL for a path relative to the API base.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn bearer(&self) -> Result<String, ApiError> {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(bearer_header(token)),
            _ => Err(ApiError::MissingToken),
        }
    }

    async fn call(&self, method: Method, path: &str, body: Option<Value>, authenticated: bool) -> Result<String, ApiError> {
        let bearer = if authenticated { Some(self.bearer()?) } else { None };
        #[cfg(feature = "hydrate")]
        {
            let result = send(method, &self.url(path), bearer.as_deref(), body).await;
            if let Err(err) = &result {
                log::warn!("{} {path} failed: {err}", method.as_str());
            }
            result
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method.as_str(), path, body, bearer);
            Err(ApiError::Unavailable)
        }
    }

    async fn get_value(&self, path: &str) -> Result<Value, ApiError> {
        let text = self.call(Method::Get, path, None, true).await?;
        parse_body(&text)
    }

    async fn post<P: Serialize>(&self, path: &str, payload: &P, authenticated: bool) -> Result<String, ApiError> {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.call(Method::Post, path, Some(body), authenticated).await
    }

    // -------------------------------------------------------------------------
    // Auth
    // -------------------------------------------------------------------------

    /// Exchange credentials for a bearer token via `POST auth/login`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` for rejected credentials, or a transport or
    /// decode error.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let request = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let text = self.post(LOGIN_PATH, &request, false).await?;
        let response: LoginResponse = decode(parse_body(&text)?)?;
        Ok(response.token)
    }

    /// Fetch the signed-in user's profile via `GET auth/info-user`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the role is not a known role.
    pub async fn fetch_user_info(&self) -> Result<UserInfo, ApiError> {
        decode(self.get_value(USER_INFO_PATH).await?)
    }

    // -------------------------------------------------------------------------
    // Plants
    // -------------------------------------------------------------------------

    /// Fetch every plant. The response must be a JSON array.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Shape` when the body is not an array.
    pub async fn fetch_plants(&self) -> Result<Vec<Plant>, ApiError> {
        decode_list(self.get_value(PLANTS_PATH).await?)
    }

    /// Look up a plant by code. The API may answer with one record or a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the body is neither an object nor an array.
    pub async fn search_plant(&self, code: &str) -> Result<Vec<Plant>, ApiError> {
        decode_one_or_many(self.get_value(&plant_search_path(code)).await?)
    }

    /// Delete a plant by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the server does not confirm the delete.
    pub async fn delete_plant(&self, code: &str) -> Result<(), ApiError> {
        self.call(Method::Delete, &plant_delete_path(code), None, true).await.map(|_| ())
    }

    // -------------------------------------------------------------------------
    // Collections
    // -------------------------------------------------------------------------

    /// # Errors
    ///
    /// Returns an error if the call fails or the body is not a list of growth records.
    pub async fn fetch_evolutions(&self) -> Result<Vec<GrowthRecord>, ApiError> {
        decode_list(self.get_value(EVOLUTION_PATH).await?)
    }

    /// # Errors
    ///
    /// Returns an error if the call fails or the body is not a list of production records.
    pub async fn fetch_productions(&self) -> Result<Vec<ProductionRecord>, ApiError> {
        decode_list(self.get_value(PRODUCTION_PATH).await?)
    }

    /// # Errors
    ///
    /// Returns an error if the call fails or the body is not a list of anomalies.
    pub async fn fetch_anomalies(&self) -> Result<Vec<Anomaly>, ApiError> {
        decode_list(self.get_value(ANOMALIES_PATH).await?)
    }

    /// # Errors
    ///
    /// Returns an error if the call fails or the body is not a list of sensors.
    pub async fn fetch_sensors(&self) -> Result<Vec<Sensor>, ApiError> {
        decode_list(self.get_value(SENSORS_PATH).await?)
    }

    /// # Errors
    ///
    /// Returns an error if the call fails or the body is not a list of forecast days.
    pub async fn fetch_weather(&self) -> Result<Vec<WeatherDay>, ApiError> {
        decode_list(self.get_value(WEATHER_PATH).await?)
    }

    /// POST a create payload to `<entity>/create`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the record.
    pub async fn create<P: Serialize>(&self, endpoint: &str, payload: &P) -> Result<(), ApiError> {
        self.post(endpoint, payload, true).await.map(|_| ())
    }

    // -------------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------------

    /// # Errors
    ///
    /// Returns an error if the call fails or any user carries an unknown role.
    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        decode_list(self.get_value(USERS_PATH).await?)
    }

    /// # Errors
    ///
    /// Returns an error if the server rejects the new account.
    pub async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        self.create(USERS_CREATE_PATH, user).await
    }

    /// # Errors
    ///
    /// Returns an error if the server does not confirm the delete.
    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.call(Method::Delete, &user_delete_path(id), None, true).await.map(|_| ())
    }

    // -------------------------------------------------------------------------
    // Assistance
    // -------------------------------------------------------------------------

    /// Fetch care recommendations for a plant.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the body carries no text.
    pub async fn fetch_recommendation(&self, code: &str) -> Result<String, ApiError> {
        let body: RecommendationBody = decode(self.get_value(&recommendation_path(code)).await?)?;
        Ok(body.into_text())
    }
}

#[cfg(feature = "hydrate")]
async fn send(method: Method, url: &str, bearer: Option<&str>, body: Option<Value>) -> Result<String, ApiError> {
    use gloo_net::http::Request;

    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Delete => Request::delete(url),
    };
    let builder = builder.header("Content-Type", "application/json");
    let builder = match bearer {
        Some(value) => builder.header("Authorization", value),
        None => builder,
    };
    let request = match body {
        Some(body) => builder.json(&body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(status_error(resp.status(), &text));
    }
    Ok(text)
}

// =============================================================================
// PATHS + DECODING
// =============================================================================

fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

fn plant_search_path(code: &str) -> String {
    format!("{PLANTS_PATH}/{}", encode_segment(code.trim()))
}

fn plant_delete_path(code: &str) -> String {
    format!("{PLANTS_PATH}/delete/{}", encode_segment(code))
}

fn user_delete_path(id: &str) -> String {
    format!("{USERS_PATH}/delete/{}", encode_segment(id))
}

fn recommendation_path(code: &str) -> String {
    format!("assistance/ia/{}", encode_segment(code))
}

/// Percent-encode one path segment (RFC 3986 unreserved characters pass through).
fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn parse_body(text: &str) -> Result<Value, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a collection endpoint, rejecting anything that is not a JSON array.
fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ApiError> {
    if !value.is_array() {
        return Err(ApiError::Shape(format!("se esperaba una lista, se recibió {}", json_kind(&value))));
    }
    decode(value)
}

/// Decode a response that may be a single record or a list of records.
fn decode_one_or_many<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ApiError> {
    match value {
        Value::Array(_) => decode(value),
        Value::Object(_) => decode(value).map(|one| vec![one]),
        other => Err(ApiError::Shape(format!("se esperaba un registro, se recibió {}", json_kind(&other)))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "un booleano",
        Value::Number(_) => "un número",
        Value::String(_) => "un texto",
        Value::Array(_) => "una lista",
        Value::Object(_) => "un objeto",
    }
}
