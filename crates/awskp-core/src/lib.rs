//! Core abstractions for awskp: the keypair request, the parameter store contract,
//! and the retriever that ties them together. Backends live in sibling crates.

pub mod error;
pub mod key;
pub mod retriever;
pub mod store;

pub use error::RetrieveError;
pub use key::{parameter_name, KeyRequest, PrivateKey};
pub use retriever::KeyRetriever;
pub use store::{InMemoryParameterStore, ParameterStore};
