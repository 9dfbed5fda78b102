use crate::domain::errors::StorageError;

/// Storage key of the session token
pub const TOKEN_KEY: &str = "token";
/// Storage key of the saved theme name
pub const THEME_KEY: &str = "favTheme";

/// Client-local persistent string store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}
