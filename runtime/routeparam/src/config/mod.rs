//! Load the configuration that drives how `routeparam` rejects requests.
//!
//! [`ConfigLoader`] assembles a configuration out of YAML files and environment variables.
//! [`ExtractorConfig`] is the configuration consumed by
//! [`IntParamExtractor`](crate::request::path::IntParamExtractor).
use std::path::PathBuf;

use anyhow::Context;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::de::DeserializeOwned;

pub use extractor::{BodyFormat, ExtractorConfig, RejectionStatus};

mod extractor;

#[derive(Clone, Debug, Default)]
/// A utility to load hierarchical configuration.
///
/// Check out [`ConfigLoader::load`] for more information.
///
/// # Example
///
/// ```rust,no_run
/// use routeparam::config::{ConfigLoader, ExtractorConfig};
///
/// # fn main() -> anyhow::Result<()> {
/// let config: ExtractorConfig = ConfigLoader::new().load()?;
/// # Ok(())
/// # }
/// ```
pub struct ConfigLoader {
    configuration_dir: Option<PathBuf>,
}

static ENV_PREFIX: &str = "RP_";

impl ConfigLoader {
    /// Initialize a new [`ConfigLoader`] instance.
    pub fn new() -> Self {
        Self {
            configuration_dir: None,
        }
    }

    /// Specify the path to the directory where configuration files are stored.
    ///
    /// Relative paths are resolved against the current working directory.
    ///
    /// # Default value
    ///
    /// By default, configuration files are looked up under `configuration/`.
    pub fn configuration_dir<Dir>(mut self, dir: Dir) -> Self
    where
        Dir: Into<PathBuf>,
    {
        self.configuration_dir = Some(dir.into());
        self
    }

    /// Load the configuration by merging together two sources:
    ///
    /// 1. Environment variables (`RP_*`, with `__` as the separator for nested keys)
    /// 2. Base configuration file (`{configuration_dir}/base.yml`), if it exists
    ///
    /// The list above is ordered by precedence: environment variables take precedence
    /// over the configuration file.
    pub fn load<Config>(self) -> Result<Config, errors::ConfigLoadError>
    where
        Config: DeserializeOwned,
    {
        let configuration_dir = self
            .configuration_dir
            .unwrap_or_else(|| PathBuf::from("configuration"));
        let span = tracing::info_span!(
            "Loading configuration",
            configuration.directory = %configuration_dir.display(),
        );
        let _guard = span.enter();
        let base_filepath = configuration_dir.join("base.yml");

        let figment = Figment::new()
            .merge(Yaml::file(base_filepath))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let configuration: Config = figment
            .extract()
            .context("Failed to load hierarchical configuration")
            .map_err(errors::ConfigLoadError)?;
        Ok(configuration)
    }
}

/// Errors that can occur when loading configuration.
pub mod errors {
    pub use super::extractor::InvalidRejectionStatus;

    #[derive(Debug, thiserror::Error)]
    #[error("Failed to load configuration")]
    /// The error returned by [`ConfigLoader::load`](super::ConfigLoader::load).
    pub struct ConfigLoadError(#[source] pub(super) anyhow::Error);
}
