use thiserror::Error;

/// Errors produced while resolving a keypair's private key.
///
/// Variants that originate in a backend carry the backend's own message in
/// `reason`, unmodified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RetrieveError {
    /// A required request field was empty.
    #[error("{field} must not be empty")]
    InvalidRequest { field: &'static str },
    /// Session could not be built or the request could not be dispatched
    /// (region, credentials, endpoint, transport).
    #[error("session error: {reason}")]
    Session { reason: String },
    /// No parameter exists under the requested name.
    #[error("parameter not found: {name}: {reason}")]
    NotFound { name: String, reason: String },
    /// Caller is not allowed to read or decrypt the parameter.
    #[error("access denied for {name}: {reason}")]
    AccessDenied { name: String, reason: String },
    /// The parameter exists but its value could not be decrypted.
    #[error("failed to decrypt {name}: {reason}")]
    Decryption { name: String, reason: String },
    /// Any other failure reported by the parameter store.
    #[error("parameter store failure for {name}: {reason}")]
    Service { name: String, reason: String },
}

impl RetrieveError {
    pub fn not_found(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NotFound {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn service(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Service {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
