use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;

use crate::error::RetrieveError;

/// Read-only view of a parameter store that can hand back decrypted values.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch the value stored under `name`, decrypting `SecureString` parameters.
    async fn get_decrypted(&self, name: &str) -> Result<String, RetrieveError>;
}

/// In-memory parameter store for tests and offline runs.
#[derive(Debug, Default, Clone)]
pub struct InMemoryParameterStore {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a parameter, overwriting any existing value.
    pub fn insert(&self, name: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut map) = self.inner.lock() {
            map.insert(name.into(), value.into());
        }
    }
}

#[async_trait]
impl ParameterStore for InMemoryParameterStore {
    async fn get_decrypted(&self, name: &str) -> Result<String, RetrieveError> {
        let map = self
            .inner
            .lock()
            .map_err(|err| RetrieveError::service(name, format!("lock poisoned: {err}")))?;

        map.get(name).cloned().ok_or_else(|| {
            RetrieveError::not_found(name, format!("Parameter {name} not found."))
        })
    }
}
