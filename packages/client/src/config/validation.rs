//! Configuration validation utilities

use std::time::Duration;

use url::Url;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("no base address configured")]
    MissingAddress,

    #[error("Invalid network address: {0}")]
    InvalidAddress(String),

    #[error("Invalid timeout value: {0}")]
    InvalidTimeout(String),

    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),
}

impl From<ConfigurationError> for crate::error::Error {
    fn from(err: ConfigurationError) -> Self {
        crate::error::Error::MisconfiguredClient(err.to_string())
    }
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `MissingAddress` - if no base address is set
    /// - `InvalidAddress` - if the base address cannot serve as an HTTP base
    /// - `InvalidTimeout` - if timeout values are zero or exceed limits
    /// - `InvalidParameter` - if parameters are outside valid ranges
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a base address
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidAddress` if:
    /// - The scheme is not `http` or `https`
    /// - The URL cannot be a base (e.g. `mailto:`)
    /// - The URL has no host
    pub fn validate_base_address(address: &Url) -> ConfigResult<()> {
        if !matches!(address.scheme(), "http" | "https") {
            return Err(ConfigurationError::InvalidAddress(format!(
                "{address}: scheme must be http or https"
            )));
        }

        if address.cannot_be_a_base() || address.host_str().is_none() {
            return Err(ConfigurationError::InvalidAddress(format!(
                "{address}: cannot be used as a base address"
            )));
        }

        Ok(())
    }

    /// Validate timeout duration
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidTimeout` if:
    /// - The timeout duration is zero
    /// - The timeout duration exceeds 1 hour (3600 seconds)
    pub fn validate_timeout(timeout: Duration, name: &str) -> ConfigResult<()> {
        if timeout.is_zero() {
            return Err(ConfigurationError::InvalidTimeout(format!(
                "{name} cannot be zero"
            )));
        }

        if timeout.as_secs() > 3600 {
            return Err(ConfigurationError::InvalidTimeout(format!(
                "{name} cannot exceed 1 hour"
            )));
        }

        Ok(())
    }

    /// Validate a user agent header value
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the user agent is empty,
    /// longer than 1000 characters, or not a valid header value.
    pub fn validate_user_agent(user_agent: &str) -> ConfigResult<()> {
        if user_agent.is_empty() {
            return Err(ConfigurationError::InvalidParameter(
                "user agent cannot be empty".to_string(),
            ));
        }

        if user_agent.len() > 1000 {
            return Err(ConfigurationError::InvalidParameter(
                "user agent must not exceed 1000 characters".to_string(),
            ));
        }

        http::HeaderValue::from_str(user_agent).map_err(|e| {
            ConfigurationError::InvalidParameter(format!("user agent is not a valid header value: {e}"))
        })?;

        Ok(())
    }

    /// Validate a connection pool size
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the size exceeds 1000.
    pub fn validate_pool_size(size: usize, name: &str) -> ConfigResult<()> {
        if size > 1000 {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} must not exceed 1000"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_address_must_be_http() {
        let ftp = Url::parse("ftp://files.example.com").unwrap();
        assert!(ConfigValidator::validate_base_address(&ftp).is_err());

        let mailto = Url::parse("mailto:ops@example.com").unwrap();
        assert!(ConfigValidator::validate_base_address(&mailto).is_err());

        let ok = Url::parse("https://pdf.internal:3000/").unwrap();
        assert!(ConfigValidator::validate_base_address(&ok).is_ok());
    }

    #[test]
    fn timeout_bounds() {
        assert!(ConfigValidator::validate_timeout(Duration::ZERO, "t").is_err());
        assert!(ConfigValidator::validate_timeout(Duration::from_secs(3601), "t").is_err());
        assert!(ConfigValidator::validate_timeout(Duration::from_secs(30), "t").is_ok());
    }

    #[test]
    fn user_agent_must_be_header_safe() {
        assert!(ConfigValidator::validate_user_agent("").is_err());
        assert!(ConfigValidator::validate_user_agent("bad\nagent").is_err());
        assert!(ConfigValidator::validate_user_agent("svc/1.0").is_ok());
    }

    #[test]
    fn configuration_errors_map_to_misconfigured_client() {
        let err: crate::error::Error = ConfigurationError::MissingAddress.into();
        assert!(matches!(err, crate::error::Error::MisconfiguredClient(_)));
        assert!(err.is_validation());
    }
}
