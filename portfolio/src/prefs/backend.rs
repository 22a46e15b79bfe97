use super::PreferenceError;

/// String key-value storage, the shape of a browser's `localStorage`.
pub trait PreferenceBackend: Send {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;

    fn delete(&mut self, key: &str) -> Result<(), PreferenceError>;
}
