//! Configuration for the shard pool and search defaults.
//!
//! Loaded with a precedence system (later sources override earlier):
//! - Bundled defaults (include_str! from mediadex.toml)
//! - User config in home directory (~/.config/mediadex/mediadex.toml)
//! - User config in current directory (./mediadex.toml)
//! - An explicit file, if one is given
//! - Environment variables prefixed `MEDIADEX__` (e.g. `MEDIADEX__MAX_BUTTONS=8`)

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use mediadex_error::{BuilderError, BuilderErrorKind, ConfigError, MediadexResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../mediadex.toml");

/// Storage backend of one shard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ShardBackend {
    /// Process-local collection, lost on exit
    #[display("memory")]
    Memory,
    /// PostgreSQL table reached through `url`
    #[display("postgres")]
    Postgres,
}

/// One shard's connection target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ShardConfig {
    /// Name used in logs and stats
    name: String,
    /// Backend kind
    backend: ShardBackend,
    /// Connection string, required for PostgreSQL shards
    #[serde(default)]
    url: Option<String>,
}

impl ShardConfig {
    /// Create a shard target.
    pub fn new(name: impl Into<String>, backend: ShardBackend, url: Option<String>) -> Self {
        Self {
            name: name.into(),
            backend,
            url,
        }
    }
}

/// Process configuration, loaded once at startup.
///
/// # Example
///
/// ```
/// use mediadex_index::{MediadexConfigBuilder, ShardBackend, ShardConfig};
///
/// let config = MediadexConfigBuilder::default()
///     .max_buttons(8_usize)
///     .shards(vec![ShardConfig::new("a", ShardBackend::Memory, None)])
///     .build()
///     .unwrap();
///
/// assert_eq!(config.collection_name(), "telegram_files");
/// assert!(!*config.use_caption_filter());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct MediadexConfig {
    /// Table/collection name used on every shard
    #[builder(default = "telegram_files".to_string())]
    collection_name: String,
    /// Search captions as well as file names when a request does not say
    #[builder(default = false)]
    use_caption_filter: bool,
    /// Page size when the chat has not asked for the reduced page
    #[builder(default = 5)]
    max_buttons: usize,
    /// Deadline for one fan-out search
    #[serde(default)]
    #[builder(default)]
    search_timeout_ms: Option<u64>,
    /// Shards in fixed order
    shards: Vec<ShardConfig>,
}

impl MediadexConfigBuilder {
    /// Build and validate a configuration.
    ///
    /// # Errors
    ///
    /// Returns error if `shards` was not set or the result fails
    /// [`MediadexConfig::validate`].
    #[track_caller]
    pub fn build(&self) -> Result<MediadexConfig, BuilderError> {
        let config = self.build_internal().map_err(|e| match e {
            MediadexConfigBuilderError::UninitializedField(field) => {
                BuilderError::new(BuilderErrorKind::MissingField(field.to_string()))
            }
            other => BuilderError::from(other.to_string()),
        })?;

        config
            .validate()
            .map_err(|e| BuilderError::new(BuilderErrorKind::ValidationFailed(e.to_string())))?;
        Ok(config)
    }
}

impl Default for MediadexConfig {
    fn default() -> Self {
        Self {
            collection_name: "telegram_files".to_string(),
            use_caption_filter: false,
            max_buttons: 5,
            search_timeout_ms: None,
            shards: vec![ShardConfig::new("primary", ShardBackend::Memory, None)],
        }
    }
}

fn parse(builder: ConfigBuilder<DefaultState>) -> MediadexResult<MediadexConfig> {
    let config: MediadexConfig = builder
        .build()
        .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
        .try_deserialize()
        .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

    config.validate()?;
    Ok(config)
}

impl MediadexConfig {
    /// Load configuration from every default source.
    ///
    /// # Errors
    ///
    /// Returns error if a present source cannot be parsed or the merged
    /// configuration is invalid.
    pub fn load() -> MediadexResult<Self> {
        Self::load_with(None)
    }

    /// Load configuration, layering `explicit` above the user files.
    ///
    /// # Errors
    ///
    /// Returns error if `explicit` is missing, a present source cannot be
    /// parsed or the merged configuration is invalid.
    #[instrument(skip(explicit), fields(explicit = ?explicit.map(Path::display)))]
    pub fn load_with(explicit: Option<&Path>) -> MediadexResult<Self> {
        debug!("Loading configuration");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/mediadex/mediadex.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("mediadex").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEDIADEX")
                .separator("__")
                .try_parsing(true),
        );

        parse(builder)
    }

    /// Load configuration from one file, without defaults or environment.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed, or is invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> MediadexResult<Self> {
        debug!("Loading configuration from file");
        parse(Config::builder().add_source(File::from(path.as_ref())))
    }

    /// Parse configuration from TOML text layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the text cannot be parsed or the result is invalid.
    pub fn from_toml_str(toml: &str) -> MediadexResult<Self> {
        parse(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from_str(toml, FileFormat::Toml)),
        )
    }

    /// Check invariants that deserialisation cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if there are no shards, a PostgreSQL shard has
    /// no url, shard names repeat, `collection_name` is not a plain
    /// identifier, or `max_buttons` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shards.is_empty() {
            return Err(ConfigError::new("At least one shard must be configured"));
        }

        for (i, shard) in self.shards.iter().enumerate() {
            if shard.backend == ShardBackend::Postgres && shard.url.is_none() {
                return Err(ConfigError::new(format!(
                    "Shard '{}' uses the postgres backend but has no url",
                    shard.name
                )));
            }
            if self.shards[..i].iter().any(|s| s.name == shard.name) {
                return Err(ConfigError::new(format!("Duplicate shard name '{}'", shard.name)));
            }
        }

        if mediadex_database::validate_table_name(&self.collection_name).is_err() {
            return Err(ConfigError::new(format!(
                "collection_name {:?} must be a plain identifier",
                self.collection_name
            )));
        }

        if self.max_buttons == 0 {
            return Err(ConfigError::new("max_buttons must be greater than zero"));
        }

        Ok(())
    }

    /// Fan-out deadline, if configured.
    pub fn search_timeout(&self) -> Option<Duration> {
        self.search_timeout_ms.map(Duration::from_millis)
    }
}
