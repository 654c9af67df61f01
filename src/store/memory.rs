//! In-process parameter store.

use std::collections::HashMap;

use super::ParameterStore;
use crate::config::secrets::SecretString;
use crate::error::LookupError;

/// Map-backed [`ParameterStore`].
///
/// Values are stored as plain strings; `with_decryption` is accepted and
/// ignored. Keys listed via [`MemoryStore::fail`] return a request error
/// instead of a value, which lets callers exercise transport failures.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    failing: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Make lookups of `key` fail with `message`.
    pub fn fail(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.failing.insert(key.into(), message.into());
        self
    }
}

impl ParameterStore for MemoryStore {
    async fn get_parameter(
        &self,
        name: &str,
        _with_decryption: bool,
    ) -> Result<SecretString, LookupError> {
        if let Some(message) = self.failing.get(name) {
            return Err(LookupError::Request {
                key: name.to_string(),
                message: message.clone(),
            });
        }
        self.values
            .get(name)
            .map(|v| SecretString::from(v.clone()))
            .ok_or_else(|| LookupError::NotFound {
                key: name.to_string(),
            })
    }
}
