//! Browser `localStorage` access for the persisted credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the csr-only `web-sys` glue; native builds see an empty store.

/// Read the string stored under `key`.
pub fn read_item(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`. Failures are logged, not returned.
pub fn write_item(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable; {key} not persisted");
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("failed to persist {key}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from storage.
pub fn remove_item(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.remove_item(key).is_err() {
                log::warn!("failed to clear {key}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}
