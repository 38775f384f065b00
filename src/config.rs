//! Application configuration.
//!
//! Sources, lowest to highest precedence:
//! 1. built-in defaults
//! 2. `config/default` and `config/{RUN_MODE}`, both optional
//! 3. `config/local`, optional and not checked in
//! 4. `ORDER_SERVICE__*` environment variables, e.g.
//!    `ORDER_SERVICE__SERVICE__MISSING_PRODUCT=ignore`

use crate::pricing::PricingConfig;
use crate::service::ServiceConfig;
use ::config::{ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::env;

const ENV_PREFIX: &str = "ORDER_SERVICE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub actors: ActorConfig,
    pub service: ServiceConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Mailbox capacity of each actor.
    pub buffer_size: usize,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = ::config::Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(File::with_name("config/local").required(false));

        Self::build(builder.add_source(environment()))
    }

    /// Parses an inline TOML document. Missing keys keep their defaults.
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        Self::build(::config::Config::builder().add_source(File::from_str(document, FileFormat::Toml)))
    }

    fn build(
        builder: ::config::ConfigBuilder<::config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.actors.buffer_size == 0 {
            return Err(ConfigError::Message(
                "actors.buffer_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}
