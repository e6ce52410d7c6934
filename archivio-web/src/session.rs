//! Bearer-token session persistence.
//!
//! Single writer: the login/register flow stores, logout clears. The token
//! is validated against `/auth/me` at boot; a rejected token is wiped so the
//! app falls back to the anonymous routes.

const TOKEN_KEY: &str = "archivio.token";

#[must_use]
pub fn stored_token() -> Option<String> {
    let storage = crate::dom::local_storage().ok()?;
    storage.get_item(TOKEN_KEY).ok().flatten()
}

pub fn store_token(token: &str) {
    match crate::dom::local_storage() {
        Ok(storage) => {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                log::warn!("failed to persist session token");
            }
        }
        Err(e) => log::warn!("localStorage unavailable: {}", crate::dom::js_error_message(&e)),
    }
}

pub fn clear_token() {
    if let Ok(storage) = crate::dom::local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
