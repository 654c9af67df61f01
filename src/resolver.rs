//! Parameter resolution: variable name → lookup key → secret value.
//!
//! The command-line argument is never the key itself. It names an
//! environment variable, and that variable's value is the key sent to the
//! parameter store.

use std::env::VarError;
use std::time::Instant;

use opentelemetry::KeyValue;

use crate::config::secrets::SecretString;
use crate::error::LookupError;
use crate::store::ParameterStore;
use crate::telemetry::{lookup, metrics};

/// What to do when the named environment variable is unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Send an empty key to the store and let it report not-found.
    #[default]
    PassThrough,
    /// Fail the lookup locally without contacting the store.
    SkipUnset,
}

/// Resolves variable names against a single, already-connected store.
pub struct Resolver<S> {
    store: S,
    policy: KeyPolicy,
}

impl<S: ParameterStore> Resolver<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            policy: KeyPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: KeyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve the secret for the environment variable `name`.
    ///
    /// # Errors
    /// Returns a [`LookupError`] if the key cannot be read (under
    /// [`KeyPolicy::SkipUnset`]) or the store has no value for it.
    pub async fn resolve(&self, name: &str) -> Result<SecretString, LookupError> {
        let span = lookup::start_lookup_span(name);
        let result = self.resolve_in(&span, name).await;

        match &result {
            Ok(_) => {
                lookup::record_outcome(&span, "resolved");
                metrics::parameters_resolved().add(1, &[]);
            }
            Err(err) => {
                let reason = skip_reason(err);
                lookup::record_outcome(&span, reason);
                span.in_scope(|| tracing::debug!(variable = name, error = %err, "lookup failed"));
                metrics::parameters_skipped().add(1, &[KeyValue::new("reason", reason)]);
            }
        }
        result
    }

    async fn resolve_in(
        &self,
        span: &tracing::Span,
        name: &str,
    ) -> Result<SecretString, LookupError> {
        let key = self.lookup_key(name)?;
        lookup::record_key(span, &key);

        let started = Instant::now();
        let value = self.store.get_parameter(&key, true).await;
        metrics::lookup_duration_ms().record(started.elapsed().as_secs_f64() * 1000.0, &[]);
        value
    }

    fn lookup_key(&self, name: &str) -> Result<String, LookupError> {
        match (std::env::var(name), self.policy) {
            (Ok(key), _) => Ok(key),
            (Err(VarError::NotUnicode(_)), _) => Err(LookupError::InvalidVariable {
                name: name.to_string(),
            }),
            (Err(VarError::NotPresent), KeyPolicy::PassThrough) => Ok(String::new()),
            (Err(VarError::NotPresent), KeyPolicy::SkipUnset) => {
                Err(LookupError::UnsetVariable {
                    name: name.to_string(),
                })
            }
        }
    }
}

fn skip_reason(err: &LookupError) -> &'static str {
    match err {
        LookupError::NotFound { .. } => "not_found",
        LookupError::UnsetVariable { .. } => "unset_variable",
        LookupError::InvalidVariable { .. } => "invalid_variable",
        LookupError::Request { .. } => "request",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secrets::ExposeSecret;
    use crate::store::MemoryStore;

    // Each test uses its own variable names; the environment is shared.

    #[tokio::test]
    async fn resolves_through_environment_indirection() {
        unsafe { std::env::set_var("BURRITO_UT_DB_PASS", "prod/db/password") };
        let store = MemoryStore::new()
            .with("prod/db/password", "s3cr3t")
            .with("BURRITO_UT_DB_PASS", "wrong");

        let value = Resolver::new(store).resolve("BURRITO_UT_DB_PASS").await.unwrap();
        assert_eq!(value.expose_secret(), "s3cr3t");
    }

    #[tokio::test]
    async fn unset_variable_sends_empty_key_by_default() {
        unsafe { std::env::remove_var("BURRITO_UT_UNSET_A") };
        let store = MemoryStore::new().with("", "empty-key-value");

        let value = Resolver::new(store).resolve("BURRITO_UT_UNSET_A").await.unwrap();
        assert_eq!(value.expose_secret(), "empty-key-value");
    }

    #[tokio::test]
    async fn unset_variable_fails_locally_with_skip_unset() {
        unsafe { std::env::remove_var("BURRITO_UT_UNSET_B") };
        let store = MemoryStore::new().with("", "empty-key-value");

        let err = Resolver::new(store)
            .with_policy(KeyPolicy::SkipUnset)
            .resolve("BURRITO_UT_UNSET_B")
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::UnsetVariable { name } if name == "BURRITO_UT_UNSET_B"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_unicode_variable_is_not_treated_as_unset() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        unsafe { std::env::set_var("BURRITO_UT_NOT_UTF8", OsStr::from_bytes(b"prod/\xff")) };
        let store = MemoryStore::new().with("", "empty-key-value");

        for policy in [KeyPolicy::PassThrough, KeyPolicy::SkipUnset] {
            let err = Resolver::new(store.clone())
                .with_policy(policy)
                .resolve("BURRITO_UT_NOT_UTF8")
                .await
                .unwrap_err();
            let LookupError::InvalidVariable { name } = &err else {
                panic!("unexpected error under {policy:?}: {err}");
            };
            assert_eq!(name, "BURRITO_UT_NOT_UTF8");
        }
    }

    #[tokio::test]
    async fn missing_parameter_is_lookup_error() {
        unsafe { std::env::set_var("BURRITO_UT_MISSING", "prod/nothing") };
        let err = Resolver::new(MemoryStore::new())
            .resolve("BURRITO_UT_MISSING")
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::NotFound { key } if key == "prod/nothing"));
    }
}
