//! Loading [`ClientConfig`] from a file and the environment.

use crate::{ClientConfig, DEFAULT_API_BASE_URL};

/// Name of the optional settings file (`todo.toml`, `todo.yaml`, ...).
pub const CONFIG_FILE: &str = "todo";
/// Environment variables are read as `TODO_<KEY>`, e.g. `TODO_API_BASE_URL`.
pub const ENV_PREFIX: &str = "TODO";

impl ClientConfig {
    /// Loads configuration, later sources overriding earlier ones:
    /// the built-in default, then `todo.*` if present, then `TODO_API_BASE_URL`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::builder(CONFIG_FILE)?.build()?.try_deserialize()
    }

    fn builder(
        file: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX));
        Ok(builder)
    }
}
