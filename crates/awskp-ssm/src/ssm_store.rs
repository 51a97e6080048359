use async_trait::async_trait;
use aws_sdk_ssm::{
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    operation::get_parameter::GetParameterError,
    Client,
};
use awskp_core::{ParameterStore, RetrieveError};
use tracing::{debug, instrument};

use crate::session::{self, SessionOptions};

const ACCESS_DENIED_CODES: &[&str] = &[
    "AccessDeniedException",
    "AccessDenied",
    "UnrecognizedClientException",
    "InvalidSignatureException",
    "ExpiredTokenException",
];

/// Parameter store backed by AWS SSM `GetParameter`.
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    client: Client,
}

impl SsmParameterStore {
    /// Build a session for the requested region and wrap a fresh SSM client.
    pub async fn connect(options: &SessionOptions) -> Self {
        let config = session::load(options).await;
        Self::new(Client::new(&config))
    }

    pub fn new(client: Client) -> Self {
        Self { client }
    }

    #[cfg(test)]
    fn region(&self) -> Option<&str> {
        self.client.config().region().map(|r| r.as_ref())
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    #[instrument(skip_all, fields(name = %name))]
    async fn get_decrypted(&self, name: &str) -> Result<String, RetrieveError> {
        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|err| classify(name, err))?;

        output
            .parameter()
            .and_then(|p| p.value())
            .map(str::to_owned)
            .ok_or_else(|| RetrieveError::service(name, "GetParameter returned no value"))
    }
}

fn classify<R>(name: &str, err: SdkError<GetParameterError, R>) -> RetrieveError
where
    R: std::fmt::Debug,
{
    let reason = DisplayErrorContext(&err).to_string();
    match err.as_service_error() {
        Some(service) => classify_service_error(name, service, reason),
        None => {
            debug!(%name, "parameter request did not reach the service");
            RetrieveError::Session { reason }
        }
    }
}

fn classify_service_error(name: &str, err: &GetParameterError, reason: String) -> RetrieveError {
    let name = name.to_string();
    match err {
        GetParameterError::ParameterNotFound(_) => RetrieveError::NotFound { name, reason },
        GetParameterError::InvalidKeyId(_) => RetrieveError::Decryption { name, reason },
        other if other.code().is_some_and(|c| ACCESS_DENIED_CODES.contains(&c)) => {
            RetrieveError::AccessDenied { name, reason }
        }
        _ => RetrieveError::Service { name, reason },
    }
}
