//! AWS Systems Manager Parameter Store backend for awskp.
//! Session setup goes through `aws-config`; lookups through `aws-sdk-ssm`.

pub mod session;
pub mod ssm_store;

pub use session::SessionOptions;
pub use ssm_store::SsmParameterStore;
