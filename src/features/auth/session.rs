//! Persistence for the login credential: a single localStorage entry under a
//! fixed key, surviving reloads until explicitly cleared. The store owns the
//! value; everything else reads it transiently through these accessors and
//! never caches it. Storage failures are ignored; a browser without
//! localStorage simply behaves as signed out.

/// Fixed storage key for the backend-issued token.
const STORAGE_KEY: &str = "auth_token";

/// Reads the persisted credential, if any.
pub fn credential() -> Option<String> {
    storage::read()
}

/// True iff a credential is currently persisted.
pub fn has_credential() -> bool {
    credential().is_some()
}

/// Persists the token, overwriting any prior value. The token shape is not
/// validated; it is opaque to the frontend.
pub fn set_credential(token: &str) {
    storage::write(token);
}

/// Removes the persisted credential. Idempotent.
pub fn clear_credential() {
    storage::remove();
}

#[cfg(target_arch = "wasm32")]
mod storage {
    use super::STORAGE_KEY;

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }

    pub(super) fn read() -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
    }

    pub(super) fn write(token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }

    pub(super) fn remove() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

// localStorage does not exist off-wasm; tests drive the auth flow through a
// process-local slot instead.
#[cfg(not(target_arch = "wasm32"))]
mod storage {
    use std::cell::RefCell;

    thread_local! {
        static SLOT: RefCell<Option<String>> = const { RefCell::new(None) };
    }

    pub(super) fn read() -> Option<String> {
        SLOT.with(|slot| slot.borrow().clone())
    }

    pub(super) fn write(token: &str) {
        SLOT.with(|slot| *slot.borrow_mut() = Some(token.to_string()));
    }

    pub(super) fn remove() {
        SLOT.with(|slot| *slot.borrow_mut() = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_has_then_clear() {
        clear_credential();
        assert!(!has_credential());

        set_credential("tok-1");
        assert!(has_credential());
        assert_eq!(credential().as_deref(), Some("tok-1"));

        clear_credential();
        assert!(!has_credential());
        assert_eq!(credential(), None);
    }

    #[test]
    fn last_write_wins() {
        set_credential("first");
        set_credential("second");
        assert_eq!(credential().as_deref(), Some("second"));
        clear_credential();
    }

    #[test]
    fn clear_is_idempotent() {
        set_credential("tok");
        clear_credential();
        clear_credential();
        assert!(!has_credential());
    }
}
