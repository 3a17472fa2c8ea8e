use serde::Deserialize;
use tracing::debug;

/// Root application configuration. Loaded from an optional `nurture-roi`
/// config file and environment variables with the prefix `NURTURE_ROI__`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub integrations: IntegrationConfig,
    #[serde(default)]
    pub scenarios: ScenarioConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Summary,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShareConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Credentials for the outbound email-list and chat integrations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntegrationConfig {
    #[serde(default)]
    pub sendfox_token: Option<String>,
    #[serde(default)]
    pub slack_webhook_url: Option<String>,
    #[serde(default)]
    pub enable_auto_notifications: bool,
    #[serde(default)]
    pub sendfox_list_ids: Vec<u64>,
}

impl IntegrationConfig {
    pub fn sendfox_configured(&self) -> bool {
        self.sendfox_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }

    pub fn slack_configured(&self) -> bool {
        self.slack_webhook_url
            .as_deref()
            .is_some_and(|u| u.starts_with("https://"))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default = "default_max_saved")]
    pub max_saved: usize,
}

fn default_format() -> OutputFormat {
    OutputFormat::Summary
}
fn default_pretty() -> bool {
    true
}
fn default_base_url() -> String {
    "http://localhost:5173/calculator".to_string()
}
fn default_max_saved() -> usize {
    3
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            pretty: default_pretty(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            max_saved: default_max_saved(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional config file and environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("nurture-roi")
    }

    /// Same as [`AppConfig::load`] with an explicit config file stem.
    pub fn load_from(file_stem: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(file_stem).required(false))
            .add_source(
                config::Environment::with_prefix("NURTURE_ROI")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("integrations.sendfox_list_ids"),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            format = ?config.output.format,
            max_saved = config.scenarios.max_saved,
            sendfox = config.integrations.sendfox_configured(),
            slack = config.integrations.slack_configured(),
            "Configuration loaded"
        );
        Ok(config)
    }
}
