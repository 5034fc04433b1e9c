//! Browser localStorage helpers for the session token and UI preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so session and
//! theme code never repeat web-sys glue. Outside the browser every read is
//! empty and every write is a no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "plant_tracker_token";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read a raw string for `key`.
pub fn load(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string for `key`. Failures (quota, private mode) are logged and dropped.
pub fn save(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Stored bearer token, ignoring blank values.
pub fn load_token() -> Option<String> {
    load(TOKEN_KEY).filter(|t| !t.trim().is_empty())
}

pub fn save_token(token: &str) {
    save(TOKEN_KEY, token);
}

pub fn clear_token() {
    remove(TOKEN_KEY);
}
