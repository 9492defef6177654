//! Session token state management

use leptos::prelude::*;

use crate::utils::constants::TOKEN_STORAGE_KEY;
use crate::utils::storage;

/// Global session context holding the backend-issued auth token.
///
/// The token is opaque to the frontend: the only operations are get, set and
/// clear. It is mirrored to localStorage so a page reload keeps the session;
/// no client-side expiry is applied.
#[derive(Clone, Copy)]
pub struct SessionContext {
    token: RwSignal<Option<String>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            token: RwSignal::new(storage::read(TOKEN_STORAGE_KEY)),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.token.with(|token| token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(|token| token.is_some())
    }

    /// Store a freshly issued token, replacing any previous session.
    pub fn set(&self, token: String) {
        storage::write(TOKEN_STORAGE_KEY, &token);
        self.token.set(Some(token));
    }

    pub fn clear(&self) {
        storage::remove(TOKEN_STORAGE_KEY);
        self.token.set(None);
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
