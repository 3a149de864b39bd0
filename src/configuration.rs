use crate::errors::ConfigurationError;
use config::{Config, FileFormat};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};
use std::env::var;
use std::time::Duration;
use url::Url;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Settings {
    pub application: Application,
    pub backend: BackendSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
    #[serde(default)]
    pub views: ViewSettings,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Application {
    pub host: String,
    pub port: u16,
}

/// Where the REST backend lives and how long a single request may take.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BackendSettings {
    pub base_url: Url,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "request_timeout_ms", default = "default_request_timeout")]
    pub request_timeout: Duration,
}

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NotificationSettings {
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "life_ms")]
    pub life: Duration,
    pub capacity: usize,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "sweep_interval_ms")]
    pub sweep_interval: Duration,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ViewSettings {
    pub page_size: usize,
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            life: Duration::from_millis(3000),
            capacity: 32,
            sweep_interval: Duration::from_millis(250),
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

impl Settings {
    pub fn check_if_valid(&self) -> Result<(), ConfigurationError> {
        if self.backend.base_url.cannot_be_a_base() {
            return Err(ConfigurationError::InvalidBackendUrl(
                self.backend.base_url.to_string(),
            ));
        }
        if self.views.page_size == 0 {
            return Err(ConfigurationError::ZeroPageSize);
        }
        if self.notifications.capacity == 0 {
            return Err(ConfigurationError::ZeroNotificationCapacity);
        }
        if self.notifications.life.is_zero() {
            return Err(ConfigurationError::ZeroNotificationLife);
        }
        if self.notifications.sweep_interval.is_zero() {
            return Err(ConfigurationError::ZeroSweepInterval);
        }
        Ok(())
    }
}

/// The possible runtime environment for our application.
#[derive(Debug, Eq, PartialEq)]
pub enum Environment {
    Dev,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Prod => "prod",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = ConfigurationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => Err(ConfigurationError::UnknownEnvironment(other.to_string())),
        }
    }
}

pub fn get_env() -> Result<Environment, ConfigurationError> {
    var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "dev".into())
        .try_into()
}

pub fn get_configuration() -> Result<Settings, ConfigurationError> {
    let environment = get_env()?;
    let second_source = format!("configuration/{}", environment.as_str());
    let settings = Config::builder()
        .add_source(config::File::new("configuration/base", FileFormat::Yaml))
        .add_source(config::File::new(&second_source, FileFormat::Yaml).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?
        .try_deserialize::<Settings>()?;
    settings.check_if_valid()?;
    Ok(settings)
}
