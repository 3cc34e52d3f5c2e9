use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("localStorage is not available")]
    NoStorage,
    #[error("localStorage {0} failed for key \"{1}\"")]
    Access(&'static str, String),
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::NoWindow)?;
    window
        .local_storage()
        .map_err(|_| StorageError::NoStorage)?
        .ok_or(StorageError::NoStorage)
}

#[cfg(target_arch = "wasm32")]
pub fn get_item(key: &str) -> Result<Option<String>, StorageError> {
    local_storage()?
        .get_item(key)
        .map_err(|_| StorageError::Access("read", key.to_string()))
}

#[cfg(target_arch = "wasm32")]
pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(key, value)
        .map_err(|_| StorageError::Access("write", key.to_string()))
}

#[cfg(target_arch = "wasm32")]
pub fn remove_item(key: &str) -> Result<(), StorageError> {
    local_storage()?
        .remove_item(key)
        .map_err(|_| StorageError::Access("remove", key.to_string()))
}

// Host builds have no browser storage; callers treat the error as "absent".

#[cfg(not(target_arch = "wasm32"))]
pub fn get_item(_key: &str) -> Result<Option<String>, StorageError> {
    Err(StorageError::NoWindow)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_item(_key: &str, _value: &str) -> Result<(), StorageError> {
    Err(StorageError::NoWindow)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn remove_item(_key: &str) -> Result<(), StorageError> {
    Err(StorageError::NoWindow)
}
