//! localStorage helpers for the session token.

use web_sys::{window, Storage};

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn read(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn write(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("Failed to persist '{}' to localStorage", key);
        }
    } else {
        log::warn!("localStorage unavailable; session will not survive reload");
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        storage.remove_item(key).ok();
    }
}
