use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::debug;

/// Inputs used to build a region-scoped AWS session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub region: String,
    /// Named profile from the shared config/credentials files.
    pub profile: Option<String>,
    /// Override for the SSM endpoint (LocalStack and similar).
    pub endpoint_url: Option<String>,
}

impl SessionOptions {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Self::default()
        }
    }

    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_endpoint_url(mut self, endpoint_url: Option<String>) -> Self {
        self.endpoint_url = endpoint_url;
        self
    }
}

/// Resolve shared SDK configuration. Credentials come from the default provider
/// chain unless a profile is named.
pub async fn load(options: &SessionOptions) -> SdkConfig {
    debug!(region = %options.region, profile = ?options.profile, "loading aws session");
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(options.region.clone()));
    if let Some(profile) = &options.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(endpoint) = &options.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }
    loader.load().await
}
