use core_config::server::ServerConfig;
use core_config::{app_info, AppInfo, ConfigError, Environment, FromEnv};
use database::mongodb::MongoConfig;

/// Full configuration for the products API, assembled from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub mongo: MongoConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app: app_info!(),
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            mongo: MongoConfig::from_env()?,
        })
    }
}
