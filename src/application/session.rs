use std::rc::Rc;
use std::str::FromStr;

use crate::domain::errors::StorageError;
use crate::domain::session::{KeyValueStore, THEME_KEY, TOKEN_KEY};
use crate::domain::theme::ThemeKey;
use crate::infrastructure::storage::default_store;

/// Client-held session: the bearer token and the chosen club theme.
///
/// Set at login, cleared at logout. Cloning shares the same store.
#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn KeyValueStore>,
}

impl SessionContext {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Session persisted in the browser's local storage
    pub fn browser() -> Self {
        Self::new(Rc::from(default_store()))
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn store_token(&self, token: &str) -> Result<(), StorageError> {
        self.store.set(TOKEN_KEY, token)
    }

    pub fn clear_token(&self) {
        self.store.remove(TOKEN_KEY);
    }

    /// Saved theme; unknown names are ignored
    pub fn theme(&self) -> Option<ThemeKey> {
        self.store.get(THEME_KEY).and_then(|name| ThemeKey::from_str(&name).ok())
    }

    pub fn store_theme(&self, key: ThemeKey) -> Result<(), StorageError> {
        self.store.set(THEME_KEY, key.as_ref())
    }

    /// Logout: forget token and theme
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(THEME_KEY);
    }
}
