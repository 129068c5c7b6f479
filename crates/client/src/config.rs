use serde::Deserialize;
use std::sync::OnceLock;
use std::time::Duration;

use shared_types::AppError;

/// Path to the optional tuning file, relative to the process cwd.
const CONFIG_PATH: &str = "config.toml";

static SETTINGS: OnceLock<PaymentSettings> = OnceLock::new();

/// Connection settings for the two backend instances.
///
/// The platform runs a primary instance (records, case management)
/// and a secondary one (donations); endpoints are pinned to one or
/// the other, never both.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub api2_base_url: String,
    pub bearer_token: Option<String>,
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Config pointed at a single instance, for tests and local setups
    /// where both instances share one host.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        Self {
            api2_base_url: base.clone(),
            api_base_url: base,
            bearer_token: None,
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Read connection settings from the environment (`.env` honored).
    ///
    ///   - `BARANGAY_API_BASE_URL`: primary instance (required)
    ///   - `BARANGAY_API2_BASE_URL`: donation instance (defaults to primary)
    ///   - `BARANGAY_API_TOKEN`: bearer token (optional)
    ///   - `BARANGAY_HTTP_TIMEOUT_SECS`: per-request timeout (default 30)
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        let api_base_url = std::env::var("BARANGAY_API_BASE_URL")
            .map_err(|_| AppError::bad_request("BARANGAY_API_BASE_URL must be set"))?;
        let api2_base_url =
            std::env::var("BARANGAY_API2_BASE_URL").unwrap_or_else(|_| api_base_url.clone());
        let bearer_token = std::env::var("BARANGAY_API_TOKEN").ok();
        let timeout_secs = std::env::var("BARANGAY_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        Ok(Self {
            api_base_url,
            api2_base_url,
            bearer_token,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }
}

/// Donation poll tuning, read once from `config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaymentSettings {
    pub poll_interval_secs: u64,
    pub poll_ceiling_secs: u64,
}

impl Default for PaymentSettings {
    fn default() -> Self {
        Self {
            poll_interval_secs: 3,
            poll_ceiling_secs: 600,
        }
    }
}

impl PaymentSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn poll_ceiling(&self) -> Duration {
        Duration::from_secs(self.poll_ceiling_secs)
    }
}

#[derive(Debug, Default, Deserialize)]
struct AppConfig {
    #[serde(default)]
    payment: PaymentSettings,
}

/// Read `config.toml`, parse payment settings, and cache them in the
/// global `OnceLock`. Safe to call multiple times; only the first
/// call has effect. Missing or unparseable file ⇒ defaults.
pub fn payment_settings() -> &'static PaymentSettings {
    SETTINGS.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
            Ok(config) => config.payment,
            Err(e) => {
                tracing::warn!("failed to parse {CONFIG_PATH}: {e}, using default payment settings");
                PaymentSettings::default()
            }
        },
        Err(_) => PaymentSettings::default(),
    })
}
