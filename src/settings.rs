use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Mongo {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Deserialize)]
pub struct Model {
    pub path: String,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub mongo: Mongo,
    pub model: Model,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config.toml"))
            .add_source(Environment::with_prefix("INSIGHT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
