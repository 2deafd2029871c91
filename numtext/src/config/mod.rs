//! Configuration management for the numtext binary
use config::Config;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use crate::config::error::NumtextConfigError;
use crate::int_type::IntType;
use crate::logging::LogOutputFormat;
use crate::logging::DEFAULT_LOG_DIRECTIVES;

mod error;

/// Prefix of the environment variables read by [`Settings::new`].
pub const ENV_PREFIX: &str = "NUMTEXT";

/// Trait for validating configuration values.
trait Validatable {
    /// Validate the configuration values.
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Top-level configuration for the numtext binary
#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    /// Codec configuration
    pub codec: CodecConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Codec configuration
#[derive(Deserialize, Clone, Debug)]
pub struct CodecConfig {
    /// The integer type to decode into when none is given on the command
    /// line.
    pub default_type: IntType,
}

/// Logging configuration
#[derive(Deserialize, Clone, Debug)]
pub struct LoggingConfig {
    /// `tracing_subscriber` filter directives, used when `RUST_LOG` is not
    /// set.
    pub directives: String,
    /// The log output format.
    pub format: LogOutputFormat,
}

impl Validatable for LoggingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.directives.trim().is_empty() {
            return Err(ConfigError::Message(
                NumtextConfigError::EmptyLogDirectives.to_string(),
            ));
        }

        if let Err(err) = EnvFilter::try_new(&self.directives) {
            let err = NumtextConfigError::InvalidLogDirectives(self.directives.clone(), err);
            return Err(ConfigError::Message(err.to_string()));
        }

        Ok(())
    }
}

impl Settings {
    /// Initializing the config first with default values, then with the
    /// optional config file and finally with environment variables.
    ///
    /// The environment variables are prefixed with `NUMTEXT_` and the nested
    /// fields are separated with double underscores. For example, the path
    /// `codec.default_type` is set with:
    ///
    /// ```text
    /// NUMTEXT_CODEC__DEFAULT_TYPE=u16
    /// ^^^^^^^ ^^^^^  ^^^^^^^^^^^^
    ///    │   ^  │  ^^    └ The `default_type` field of the `codec` object
    ///    │   │  │  └ separator("__")
    ///    │   │  └ The `codec` field of the root object (`Settings`)
    ///    │   └ prefix_separator("_")
    ///    └ with_prefix("NUMTEXT")
    /// ```
    pub fn new(config_path: Option<impl AsRef<Path>>) -> Result<Self, ConfigError> {
        Self::new_with_environment(config_path, environment())
    }

    /// Like [`Settings::new`], with an explicit environment source.
    fn new_with_environment(
        config_path: Option<impl AsRef<Path>>,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        let mut cfg_builder = Config::builder();

        cfg_builder = cfg_builder.set_default("codec.default_type", "i64")?;
        cfg_builder = cfg_builder.set_default("logging.directives", DEFAULT_LOG_DIRECTIVES)?;
        cfg_builder = cfg_builder.set_default("logging.format", "pretty")?;

        if let Some(path) = config_path {
            let path = path.as_ref();
            tracing::debug!(path = %path.display(), "loading configuration file");
            cfg_builder = cfg_builder.add_source(File::from(path));
        }
        cfg_builder = cfg_builder.add_source(env);

        let cfg = cfg_builder.build()?;

        let settings: Settings = cfg.try_deserialize()?;

        settings.validate()?;

        Ok(settings)
    }

    /// Perform validation on the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        self.logging.validate()?;

        Ok(())
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .prefix_separator("_")
}
