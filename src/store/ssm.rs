//! AWS Systems Manager Parameter Store client.

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::ProvideCredentials as _;
use aws_sdk_ssm::error::DisplayErrorContext;

use super::ParameterStore;
use crate::config::secrets::SecretString;
use crate::error::{Error, LookupError, Result};

/// SSM-backed [`ParameterStore`]. One session per run.
#[derive(Debug, Clone)]
pub struct SsmStore {
    client: aws_sdk_ssm::Client,
}

impl SsmStore {
    /// Establish a session pinned to `region`.
    ///
    /// Loads the shared AWS configuration (environment, `~/.aws/config`,
    /// `~/.aws/credentials`, instance roles) and resolves credentials up
    /// front, so a broken session fails once instead of once per parameter.
    ///
    /// # Errors
    /// Returns [`Error::Session`] if no credentials can be resolved.
    pub async fn connect(region: &str) -> Result<Self> {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        let provider = config
            .credentials_provider()
            .ok_or_else(|| Error::Session("no credentials provider configured".to_string()))?;
        provider
            .provide_credentials()
            .await
            .map_err(|e| Error::Session(DisplayErrorContext(&e).to_string()))?;

        tracing::debug!(region, "parameter store session established");
        Ok(Self {
            client: aws_sdk_ssm::Client::new(&config),
        })
    }
}

impl ParameterStore for SsmStore {
    async fn get_parameter(
        &self,
        name: &str,
        with_decryption: bool,
    ) -> std::result::Result<SecretString, LookupError> {
        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(with_decryption)
            .send()
            .await
            .map_err(|e| {
                let not_found = e
                    .as_service_error()
                    .is_some_and(|service| service.is_parameter_not_found());
                if not_found {
                    LookupError::NotFound {
                        key: name.to_string(),
                    }
                } else {
                    LookupError::Request {
                        key: name.to_string(),
                        message: DisplayErrorContext(&e).to_string(),
                    }
                }
            })?;

        output
            .parameter()
            .and_then(|p| p.value())
            .map(|v| SecretString::from(v.to_string()))
            .ok_or_else(|| LookupError::NotFound {
                key: name.to_string(),
            })
    }
}
