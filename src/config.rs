use config::{Config, ConfigError, File};
use serde::Deserialize;

/// All settings for the server. There are only application settings, since the service keeps no
/// state and talks to nothing else.
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Application settings.
    pub application: ApplicationSettings,
}

/// Application settings.
#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    /// The port number on which the application will listen.
    pub port: u16,

    /// The hostname or IP address where the application will run.
    ///
    /// This could be a hostname like "localhost" or an IP address like "127.0.0.1".
    pub host: String,
}

impl ApplicationSettings {
    /// The `host:port` pair the listener binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reads `config/base.toml`, then the file for the environment named by `APP_ENVIRONMENT`, then
/// any `APP_`-prefixed environment variables, and returns the merged settings.
///
/// Nested keys are separated by a double underscore, e.g. `APP_APPLICATION__PORT=9000`.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| ConfigError::Message(format!("{e}")))?;
    let config_dir = base_path.join("config");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;
    let environment_filename = format!("{}.toml", environment.as_str());

    let settings = Config::builder()
        .add_source(File::from(config_dir.join("base.toml")).required(false))
        .add_source(File::from(config_dir.join(environment_filename)).required(false))
        .add_source(config::Environment::with_prefix("APP").prefix_separator("_").separator("__"))
        .build()?;
    settings.try_deserialize()
}

/// The possible runtime environments for the application.
#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    /// Local development environment.
    Local,
    /// Production environment.
    Production,
}

impl Environment {
    /// Returns the environment as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Must be `local` or `production`"
            )),
        }
    }
}
