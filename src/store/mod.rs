//! Parameter store abstraction.
//!
//! The resolver only needs "get value by key, optionally decrypted". The
//! AWS-backed implementation lives in [`ssm`]; [`memory`] is a map-backed
//! stand-in for tests and dry runs.

pub mod memory;
pub mod ssm;

use std::future::Future;

use crate::config::secrets::SecretString;
use crate::error::LookupError;

pub use memory::MemoryStore;
pub use ssm::SsmStore;

/// A remote key/value store holding secret parameters.
pub trait ParameterStore {
    /// Fetch the value stored under `name`.
    ///
    /// With `with_decryption` set, encrypted values come back as plaintext.
    fn get_parameter(
        &self,
        name: &str,
        with_decryption: bool,
    ) -> impl Future<Output = Result<SecretString, LookupError>> + Send;
}
