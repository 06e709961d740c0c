//! Layered portal configuration.
//!
//! Sources, later ones overriding earlier ones:
//! - Bundled defaults (include_str! from satudata.toml)
//! - `~/.config/satudata/satudata.toml`
//! - `./satudata.toml`
//! - `SATUDATA_*` environment variables

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use satudata_core::ResourceEndpoints;
use satudata_error::{ConfigError, ResourceError, ResourceErrorKind, SatuDataError, SatuDataResult};
use satudata_interface::Session;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../satudata.toml");

/// Backend connection settings and the endpoint table of every resource.
///
/// # Example
///
/// ```toml
/// base_url = "https://data.example.go.id/api"
/// timeout_secs = 30
///
/// [resources.opd]
/// list = "/opd"
/// delete = "/opd/{id}"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_", into)]
pub struct PortalConfig {
    /// Base URL every endpoint path is appended to.
    base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,

    /// User-Agent header value.
    #[serde(default = "default_user_agent")]
    user_agent: String,

    /// Bearer token used when no session is given explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,

    /// Endpoint templates per resource name.
    #[serde(default)]
    resources: BTreeMap<String, ResourceEndpoints>,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("satudata/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            token: None,
            resources: BTreeMap::new(),
        }
    }
}

impl PortalConfig {
    /// Load only the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse.
    pub fn bundled() -> SatuDataResult<Self> {
        Self::build(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    /// Load bundled defaults overlaid with a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> SatuDataResult<Self> {
        debug!("Loading configuration from file");

        Self::build(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    /// Load configuration with precedence: env > current dir > home dir > bundled.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if any present source fails to parse.
    #[instrument]
    pub fn load() -> SatuDataResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/satudata/satudata.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("satudata").required(false))
            .add_source(Environment::with_prefix("SATUDATA"));

        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> SatuDataResult<Self> {
        builder
            .build()
            .map_err(|e| {
                SatuDataError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SatuDataError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Endpoint templates of a named resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceErrorKind::UnknownResource`] for unconfigured names.
    #[instrument(skip(self))]
    pub fn endpoints(&self, resource: &str) -> SatuDataResult<&ResourceEndpoints> {
        debug!(resource, "Looking up resource endpoints");
        self.resources.get(resource).ok_or_else(|| {
            ResourceError::new(ResourceErrorKind::UnknownResource(resource.to_string())).into()
        })
    }

    /// Session carrying the configured token, anonymous when none is set.
    pub fn session(&self) -> Session {
        match &self.token {
            Some(token) => Session::with_token(token.clone()),
            None => Session::anonymous(),
        }
    }

    /// Full URL of an endpoint path.
    ///
    /// ```
    /// use satudata_client::PortalConfig;
    ///
    /// let config = PortalConfig::default().with_base_url("https://data.example.go.id/api/");
    /// assert_eq!(config.url_for("/opd"), "https://data.example.go.id/api/opd");
    /// assert_eq!(config.url_for("opd"), "https://data.example.go.id/api/opd");
    /// ```
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
