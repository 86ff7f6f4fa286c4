use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Defaults, then an optional `trivia.toml`, then `TRIVIA_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::builder()?
            .add_source(File::with_name("trivia").required(false))
            .add_source(Environment::with_prefix("TRIVIA").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("database_url", "sqlite:trivia.db")?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 5000)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
