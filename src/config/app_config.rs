use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
    pub directory: DirectoryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Bearer token guarding the mutating endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub admin_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Start with the built-in seed records
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

impl AuthConfig {
    /// Configured token, ignoring blank values
    pub fn token(&self) -> Option<&str> {
        self.admin_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

impl AppConfig {
    /// Load from config files, `APP__*` variables, and `ADMIN_TOKEN`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(app_environment(), std::env::var("ADMIN_TOKEN").ok())
    }

    fn load_with(
        environment: config::Environment,
        fallback_token: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment)
            .build()?;

        let mut app_config: Self = config.try_deserialize()?;

        if app_config.auth.token().is_none() {
            app_config.auth.admin_token = fallback_token;
        }

        Ok(app_config)
    }

    /// Copy safe to print: the admin token is masked
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();

        if copy.auth.admin_token.is_some() {
            copy.auth.admin_token = Some("[REDACTED]".to_string());
        }

        copy
    }
}

fn app_environment() -> config::Environment {
    config::Environment::with_prefix("APP")
        .separator("__")
        .try_parsing(true)
}
