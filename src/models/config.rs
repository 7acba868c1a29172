//! Configuration model loaded from external sources.

use std::env;
use std::time::Duration;

use config::Config;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::types::{
    ApiToken, BaseUrl, DatabaseId, FilterProperty, TypeConstraintError, WorkspaceName,
};

pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_NOTION_SITE_URL: &str = "https://www.notion.so";
pub const DEFAULT_NOTION_VERSION: &str = "2021-05-13";
pub const DEFAULT_FILTER_PROPERTY: &str = "Nickname";
pub const DEFAULT_INSTRUCTIONS_URL: &str = "https://github.com/fsubal/slack-whois-notion";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Errors raised while loading configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("missing required setting `{0}`")]
    Missing(&'static str),

    #[error("invalid setting `{key}`: {source}")]
    Invalid {
        key: &'static str,
        source: TypeConstraintError,
    },
}

#[derive(Clone, Debug, Deserialize)]
/// Raw settings as read from `config/*.yaml` and `APP_*` environment variables.
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_instructions_url")]
    pub instructions_url: String,
    #[serde(default)]
    pub notion_api_key: Option<String>,
    #[serde(default)]
    pub notion_workspace_name: Option<String>,
    #[serde(default)]
    pub database_id: Option<String>,
    #[serde(default = "default_notion_version")]
    pub notion_version: String,
    #[serde(default = "default_filter_property")]
    pub database_filter_by: String,
    #[serde(default = "default_notion_api_url")]
    pub notion_api_url: String,
    #[serde(default = "default_notion_site_url")]
    pub notion_site_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_instructions_url() -> String {
    DEFAULT_INSTRUCTIONS_URL.to_string()
}

fn default_notion_version() -> String {
    DEFAULT_NOTION_VERSION.to_string()
}

fn default_filter_property() -> String {
    DEFAULT_FILTER_PROPERTY.to_string()
}

fn default_notion_api_url() -> String {
    DEFAULT_NOTION_API_URL.to_string()
}

fn default_notion_site_url() -> String {
    DEFAULT_NOTION_SITE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl ServerConfig {
    /// Loads settings from `config/default.yaml`, the optional
    /// `config/<APP_ENV>.yaml` profile and `APP_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        // Select config profile (defaults to `local`).
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        let settings = Config::builder()
            // Add `./config/default.yaml`
            .add_source(config::File::with_name("config/default"))
            // Add environment-specific overrides
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            // Add settings from the environment (with a prefix of APP)
            .add_source(config::Environment::with_prefix("APP"))
            .build()?;

        Self::from_settings(settings)
    }

    /// Deserializes an already assembled [`Config`].
    pub fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        Ok(settings.try_deserialize::<ServerConfig>()?)
    }

    /// Validates the Notion related settings.
    pub fn notion(&self) -> Result<NotionSettings, ConfigError> {
        NotionSettings::try_from(self)
    }
}

/// Validated settings consumed by [`crate::repository::notion::NotionRepository`].
#[derive(Clone, Debug)]
pub struct NotionSettings {
    pub api_url: BaseUrl,
    pub site_url: BaseUrl,
    pub token: ApiToken,
    pub version: String,
    pub workspace: WorkspaceName,
    pub database_id: DatabaseId,
    pub filter_property: FilterProperty,
    pub timeout: Duration,
}

fn required<'a>(key: &'static str, value: &'a Option<String>) -> Result<&'a str, ConfigError> {
    value
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn invalid(key: &'static str) -> impl FnOnce(TypeConstraintError) -> ConfigError {
    move |source| ConfigError::Invalid { key, source }
}

impl TryFrom<&ServerConfig> for NotionSettings {
    type Error = ConfigError;

    fn try_from(config: &ServerConfig) -> Result<Self, Self::Error> {
        let token = ApiToken::new(required("notion_api_key", &config.notion_api_key)?)
            .map_err(invalid("notion_api_key"))?;
        let workspace = WorkspaceName::new(required(
            "notion_workspace_name",
            &config.notion_workspace_name,
        )?)
        .map_err(invalid("notion_workspace_name"))?;
        let database_id = DatabaseId::new(required("database_id", &config.database_id)?)
            .map_err(invalid("database_id"))?;

        let version = config.notion_version.trim();
        if version.is_empty() {
            return Err(ConfigError::Invalid {
                key: "notion_version",
                source: TypeConstraintError::EmptyString,
            });
        }

        if config.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "request_timeout_secs",
                source: TypeConstraintError::InvalidValue("timeout must be positive".to_string()),
            });
        }

        Ok(Self {
            api_url: BaseUrl::new(config.notion_api_url.as_str())
                .map_err(invalid("notion_api_url"))?,
            site_url: BaseUrl::new(config.notion_site_url.as_str())
                .map_err(invalid("notion_site_url"))?,
            token,
            version: version.to_string(),
            workspace,
            database_id,
            filter_property: FilterProperty::new(config.database_filter_by.as_str())
                .map_err(invalid("database_filter_by"))?,
            timeout: Duration::from_secs(config.request_timeout_secs),
        })
    }
}
