use tracing::{debug, instrument};

use crate::{
    error::RetrieveError,
    key::{parameter_name, PrivateKey},
    store::ParameterStore,
};

/// Looks up keypair private keys in a region-scoped parameter store.
///
/// The store is owned by the retriever; build one per invocation.
pub struct KeyRetriever<S: ParameterStore> {
    store: S,
}

impl<S: ParameterStore> KeyRetriever<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetch the decrypted private key for `key_id`.
    ///
    /// Store failures are returned as-is; nothing is retried here.
    #[instrument(skip(self))]
    pub async fn fetch(&self, key_id: &str) -> Result<PrivateKey, RetrieveError> {
        if key_id.trim().is_empty() {
            return Err(RetrieveError::InvalidRequest { field: "key-id" });
        }
        let name = parameter_name(key_id);
        let value = self.store.get_decrypted(&name).await?;
        debug!(%name, len = value.len(), "retrieved keypair parameter");
        Ok(PrivateKey::new(value))
    }
}
