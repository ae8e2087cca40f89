//! Client configuration and presets

use std::time::Duration;

use url::Url;

use super::validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};

/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("gotenberg-rs/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the service address for [`ClientConfig::from_env`]
pub const ENV_ADDRESS: &str = "GOTENBERG_URL";

/// Environment variable overriding the user agent for [`ClientConfig::from_env`]
pub const ENV_USER_AGENT: &str = "GOTENBERG_USER_AGENT";

/// Configuration for a [`GotenbergClient`](crate::client::GotenbergClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base address of the conversion service; request paths are resolved against it
    pub base_address: Option<Url>,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// How long an idle pooled connection is kept
    pub pool_idle_timeout: Option<Duration>,

    /// Maximum number of idle connections per host
    pub pool_max_idle_per_host: usize,

    /// Connection timeout
    pub connect_timeout: Option<Duration>,

    /// Enable TCP_NODELAY
    pub tcp_nodelay: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_address: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            pool_idle_timeout: Some(Duration::from_secs(90)),
            pool_max_idle_per_host: 32,
            connect_timeout: Some(Duration::from_secs(10)),
            tcp_nodelay: true,
        }
    }
}

impl ClientConfig {
    /// Configuration for a service at `address`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidAddress` if `address` does not parse as a URL.
    pub fn new(address: &str) -> ConfigResult<Self> {
        let base_address = Url::parse(address)
            .map_err(|e| ConfigurationError::InvalidAddress(format!("{address}: {e}")))?;
        Ok(Self {
            base_address: Some(base_address),
            ..Self::default()
        })
    }

    /// Configuration for a service on the default local port.
    ///
    /// # Examples
    /// ```
    /// use gotenberg_client::config::ClientConfig;
    ///
    /// let config = ClientConfig::local();
    /// assert_eq!(config.base_address.unwrap().as_str(), "http://localhost:3000/");
    /// ```
    #[must_use]
    pub fn local() -> Self {
        Self {
            base_address: Url::parse("http://localhost:3000").ok(),
            ..Self::default()
        }
    }

    /// Configuration read from `GOTENBERG_URL` and, optionally, `GOTENBERG_USER_AGENT`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MissingAddress` when `GOTENBERG_URL` is unset
    /// and `ConfigurationError::InvalidAddress` when it does not parse.
    pub fn from_env() -> ConfigResult<Self> {
        let address = std::env::var(ENV_ADDRESS)
            .map_err(|_| ConfigurationError::MissingAddress)?;
        let mut config = Self::new(&address)?;
        if let Ok(user_agent) = std::env::var(ENV_USER_AGENT) {
            config.user_agent = user_agent;
        }
        Ok(config)
    }

    /// Set the User-Agent header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the idle timeout of pooled connections.
    #[must_use]
    pub fn with_pool_idle_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Set the maximum number of idle connections per host.
    #[must_use]
    pub fn with_pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

impl Validator for ClientConfig {
    fn validate(&self) -> ConfigResult<()> {
        let base_address = self
            .base_address
            .as_ref()
            .ok_or(ConfigurationError::MissingAddress)?;
        ConfigValidator::validate_base_address(base_address)?;
        ConfigValidator::validate_user_agent(&self.user_agent)?;
        if let Some(timeout) = self.connect_timeout {
            ConfigValidator::validate_timeout(timeout, "connect timeout")?;
        }
        if let Some(timeout) = self.pool_idle_timeout {
            ConfigValidator::validate_timeout(timeout, "pool idle timeout")?;
        }
        ConfigValidator::validate_pool_size(self.pool_max_idle_per_host, "pool max idle per host")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_address() {
        let config = ClientConfig::default();
        assert!(config.base_address.is_none());
        assert!(matches!(config.validate(), Err(ConfigurationError::MissingAddress)));
    }

    #[test]
    fn new_parses_address() {
        let config = ClientConfig::new("http://gotenberg:3000").unwrap();
        assert_eq!(config.base_address.as_ref().unwrap().host_str(), Some("gotenberg"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_rejects_garbage() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(ConfigurationError::InvalidAddress(_))
        ));
    }

    #[test]
    fn builder_setters_apply() {
        let config = ClientConfig::local()
            .with_user_agent("reports/2.1")
            .with_pool_max_idle_per_host(4)
            .with_connect_timeout(None);
        assert_eq!(config.user_agent, "reports/2.1");
        assert_eq!(config.pool_max_idle_per_host, 4);
        assert!(config.connect_timeout.is_none());
        assert!(config.validate().is_ok());
    }
}
