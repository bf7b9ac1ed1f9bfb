use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;

#[derive(Debug, Clone)]
pub struct CmcConfig {
    pub api_key: Secret<String>,
    pub sandbox: bool,
    pub base_url: Option<String>,
}

// Custom Serialize implementation - never expose the API key in serialization
impl Serialize for CmcConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("CmcConfig", 3)?;
        state.serialize_field("api_key", "[REDACTED]")?;
        state.serialize_field("sandbox", &self.sandbox)?;
        state.serialize_field("base_url", &self.base_url)?;
        state.end()
    }
}

// Custom Deserialize implementation
impl<'de> Deserialize<'de> for CmcConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct CmcConfigHelper {
            api_key: String,
            #[serde(default)]
            sandbox: bool,
            #[serde(default)]
            base_url: Option<String>,
        }

        let helper = CmcConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            api_key: Secret::new(helper.api_key),
            sandbox: helper.sandbox,
            base_url: helper.base_url,
        })
    }
}

impl CmcConfig {
    /// Create a new configuration with an API key, targeting production.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            api_key: Secret::new(api_key),
            sandbox: false,
            base_url: None,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `COINMARKETCAP_API_KEY`
    /// - `COINMARKETCAP_SANDBOX` (optional, defaults to false)
    /// - `COINMARKETCAP_BASE_URL` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("COINMARKETCAP_API_KEY")
            .map_err(|_| ConfigError::MissingEnvironmentVariable("COINMARKETCAP_API_KEY".into()))?;

        let sandbox = env::var("COINMARKETCAP_SANDBOX")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);

        let base_url = env::var("COINMARKETCAP_BASE_URL").ok();

        Ok(Self {
            api_key: Secret::new(api_key),
            sandbox,
            base_url,
        })
    }

    /// Create configuration from a .env file and environment variables
    ///
    /// Loads environment variables from a .env file (if it exists), then
    /// reads the configuration using the standard variable names.
    ///
    /// **Security Warning**: Never commit .env files to version control!
    /// Add .env to your .gitignore file.
    #[cfg(feature = "env-file")]
    pub fn from_env_file() -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(".env")
    }

    /// Create configuration from a specific .env file path
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(_) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // .env file doesn't exist, continue with system env vars
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env()
    }

    /// Check if this configuration carries a usable API key
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.api_key.expose_secret().trim().is_empty()
    }

    /// Target the sandbox API
    #[must_use]
    pub const fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Set a custom base URL (production only; the sandbox flag wins)
    #[must_use]
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Get the API key (use carefully - exposes the secret)
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
